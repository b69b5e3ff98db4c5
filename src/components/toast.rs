//! Transient toast presenter.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};

/// Seconds a toast stays on screen before expiring on its own.
#[cfg(feature = "hydrate")]
const TOAST_SECS: u64 = 4;

/// Renders the current toast and expires it after a few seconds.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let state = ui.get();
        if state.toast.is_none() {
            return;
        }
        let seq = state.toast_seq;
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_SECS)).await;
            ui.update(|state| state.dismiss_toast(seq));
        });
    });

    let class = move || match ui.get().toast.map(|toast| toast.kind).unwrap_or_default() {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    };

    view! {
        <Show when=move || ui.get().toast.is_some()>
            <div class=class>
                <span class="toast__message">
                    {move || ui.get().toast.map(|toast| toast.message).unwrap_or_default()}
                </span>
                <button
                    class="toast__dismiss"
                    on:click=move |_| {
                        ui.update(|state| {
                            let seq = state.toast_seq;
                            state.dismiss_toast(seq);
                        });
                    }
                >
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
