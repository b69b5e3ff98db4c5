//! Login page: email/password form with inline failure messaging.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav::role_home;
use crate::state::auth;
#[cfg(feature = "hydrate")]
use crate::state::auth::AuthOutcome;
use crate::util::role::normalize_role;

/// Choose where a fresh login lands: a preserved in-app path wins over the
/// role home; anything not rooted in the app is ignored.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn post_login_target(redirect: Option<&str>, home: &'static str) -> String {
    match redirect {
        Some(path) if path.starts_with('/') => path.to_owned(),
        _ => home.to_owned(),
    }
}

/// Extract the `redirect` bounce-back parameter from a query string.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn redirect_from_query(search: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    search.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == "redirect" && value.starts_with('/')).then(|| value.to_owned())
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = auth::use_auth();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    // An already-signed-in visitor has no business here; send them home.
    // The in-flight login flow navigates itself, so `busy` suppresses this.
    Effect::new(move || {
        if busy.get() {
            return;
        }
        let state = auth.get();
        if !state.loading {
            if let Some(user) = state.user.as_ref() {
                navigate(role_home(normalize_role(Some(user))), NavigateOptions::default());
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            info.set("Enter both email and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let search = web_sys::window().and_then(|w| w.location().search().ok()).unwrap_or_default();
            let redirect = redirect_from_query(&search);
            leptos::task::spawn_local(async move {
                match auth::login(auth, &email_value, &password_value).await {
                    Ok(AuthOutcome::Authenticated { user, .. }) => {
                        let home = role_home(normalize_role(Some(&user)));
                        let target = post_login_target(redirect.as_deref(), home);
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&target);
                        }
                    }
                    Ok(AuthOutcome::Rejected(envelope)) => {
                        info.set(envelope.message.unwrap_or_else(|| "Sign-in failed.".to_owned()));
                        busy.set(false);
                    }
                    Err(error) => {
                        info.set(error.to_string());
                        busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"HR Portal"</h1>
                <p class="login-card__subtitle">"Sign in to your workspace"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@company.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "New organization? "
                    <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
