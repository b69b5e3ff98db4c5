//! Route guards deciding between rendering, login redirect, and role-home
//! redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards re-evaluate on every render from the auth context alone; there
//! is no cached decision and no error state here. Failures surface through
//! the auth context's own fields.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::nav::role_home;
use crate::net::api::LOGIN_ROUTE;
use crate::net::types::User;
use crate::util::role::{Role, normalize_role};

/// Coarse access classes a route may admit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessClass {
    /// Every authenticated user.
    All,
    /// Admin-like roles (admin, hr, super admin).
    Admin,
    /// Employee-like roles (employee, team lead).
    Employee,
    /// Exactly the super admin role.
    SuperAdmin,
}

/// Terminal decision for one navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session bootstrap still pending; render a neutral waiting view.
    Checking,
    /// Not signed in; go to the login entry point.
    RedirectToLogin,
    /// Render the route's children.
    Allow,
    /// Signed in but not admitted; go to the role-appropriate home.
    RedirectToRoleHome(&'static str),
}

/// Evaluate a navigation attempt. Pure; called fresh on every render.
pub fn evaluate_guard(loading: bool, user: Option<&User>, allowed: Option<&[AccessClass]>) -> GuardOutcome {
    if loading {
        return GuardOutcome::Checking;
    }
    let Some(user) = user else {
        return GuardOutcome::RedirectToLogin;
    };
    let Some(allowed) = allowed else {
        return GuardOutcome::Allow;
    };
    let role = normalize_role(Some(user));
    if has_access(role, allowed) {
        GuardOutcome::Allow
    } else {
        GuardOutcome::RedirectToRoleHome(role_home(role))
    }
}

/// Whether `role` satisfies one of the route's access classes.
pub fn has_access(role: Role, allowed: &[AccessClass]) -> bool {
    allowed.iter().any(|class| match class {
        AccessClass::All => true,
        AccessClass::Admin => role.is_admin_like(),
        AccessClass::Employee => role.is_employee_like(),
        AccessClass::SuperAdmin => role == Role::SuperAdmin,
    })
}

/// Login path carrying the attempted location for post-login bounce-back.
pub fn login_redirect_path(attempted: &str) -> String {
    if attempted.is_empty() || attempted == "/" {
        LOGIN_ROUTE.to_owned()
    } else {
        format!("{LOGIN_ROUTE}?redirect={attempted}")
    }
}

/// Gate requiring only an authenticated session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guard_view(None, children)
}

/// Gate admitting only the listed access classes.
#[component]
pub fn RequireRole(allowed: &'static [AccessClass], children: ChildrenFn) -> impl IntoView {
    guard_view(Some(allowed), children)
}

fn guard_view(allowed: Option<&'static [AccessClass]>, children: ChildrenFn) -> impl IntoView {
    let auth = crate::state::auth::use_auth();
    let navigate = use_navigate();
    let location = use_location();

    let outcome = move || {
        let state = auth.get();
        evaluate_guard(state.loading, state.user.as_ref(), allowed)
    };

    // Redirects run as an effect; the view below only ever shows a neutral
    // placeholder for non-Allow outcomes.
    let effect_outcome = outcome.clone();
    Effect::new(move || match effect_outcome() {
        GuardOutcome::RedirectToLogin => {
            let attempted = location.pathname.get_untracked();
            navigate(&login_redirect_path(&attempted), NavigateOptions::default());
        }
        GuardOutcome::RedirectToRoleHome(target) => {
            navigate(target, NavigateOptions::default());
        }
        GuardOutcome::Checking | GuardOutcome::Allow => {}
    });

    view! {
        <Show
            when=move || outcome() == GuardOutcome::Allow
            fallback=move || {
                view! {
                    <div class="guard-screen">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting..." }}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
