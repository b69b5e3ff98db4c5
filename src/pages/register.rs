//! Organization signup page creating the tenant and its first account.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav::role_home;
use crate::state::auth;
#[cfg(feature = "hydrate")]
use crate::state::auth::AuthOutcome;
use crate::util::role::normalize_role;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = auth::use_auth();
    let organization_name = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    // Same bounce as the login page for already-signed-in visitors.
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
        let registration = auth::Registration {
            organization_name: organization_name.get().trim().to_owned(),
            first_name: first_name.get().trim().to_owned(),
            last_name: last_name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        if registration.organization_name.is_empty()
            || registration.email.is_empty()
            || registration.password.is_empty()
        {
            info.set("Organization name, email, and password are required.".to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match auth::register(auth, &registration).await {
                Ok(AuthOutcome::Authenticated { user, .. }) => {
                    let home = role_home(normalize_role(Some(&user)));
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(home);
                    }
                }
                Ok(AuthOutcome::Rejected(envelope)) => {
                    info.set(envelope.message.unwrap_or_else(|| "Registration failed.".to_owned()));
                    busy.set(false);
                }
                Err(error) => {
                    info.set(error.to_string());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create your workspace"</h1>
                <p class="login-card__subtitle">"Register an organization and its admin account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Organization name"
                        prop:value=move || organization_name.get()
                        on:input=move |ev| organization_name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="First name"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Last name"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
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
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
