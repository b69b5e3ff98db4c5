//! Top-level rendering failure boundary with a full-reset recovery action.

use leptos::prelude::*;

/// Wraps the routed view; any rendering error replaces the whole screen
/// with a recovery card whose single action restarts from the root.
#[component]
pub fn AppErrorBoundary(children: ChildrenFn) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|_| {
            view! {
                <div class="crash-screen">
                    <h1>"Something went wrong"</h1>
                    <p class="crash-screen__hint">
                        "The page hit an unexpected error. Returning to the start will reload the application."
                    </p>
                    <button class="btn btn--primary" on:click=|_| reset_to_root()>
                        "Back to start"
                    </button>
                </div>
            }
        }>{children()}</ErrorBoundary>
    }
}

/// Hard-navigate to the application root, discarding all client state.
fn reset_to_root() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    }
}
