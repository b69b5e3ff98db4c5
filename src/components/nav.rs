//! Route table, role-filtered navigation, and the authenticated app shell.
//!
//! DESIGN
//! ======
//! One static table drives the sidebar menu, page-title resolution, and
//! the role-home map so the three can never disagree about a path.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::guards::{AccessClass, has_access};
use crate::components::notifications::NotificationBell;
use crate::net::api::LOGIN_ROUTE;
use crate::state::auth;
use crate::util::role::{Role, normalize_role};

/// Product name, shown as the brand and the fallback page title.
pub const APP_TITLE: &str = "HR Portal";

/// Super admin landing route.
pub const SUPER_ADMIN_HOME: &str = "/super-admin";
/// Admin-like landing route.
pub const ADMIN_HOME: &str = "/admin";
/// Landing route for everyone else.
pub const EMPLOYEE_HOME: &str = "/employee";

/// Access lists shared by the route table and the router.
pub const SUPER_ADMIN_ONLY: &[AccessClass] = &[AccessClass::SuperAdmin];
pub const ADMIN_ONLY: &[AccessClass] = &[AccessClass::Admin];
pub const STAFF: &[AccessClass] = &[AccessClass::Admin, AccessClass::Employee];
pub const EVERYONE: &[AccessClass] = &[AccessClass::All];

/// One navigable screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub path: &'static str,
    pub title: &'static str,
    /// Access classes whose members see this entry.
    pub access: &'static [AccessClass],
}

/// Every screen reachable from the sidebar, in display order.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { path: SUPER_ADMIN_HOME, title: "Organizations", access: SUPER_ADMIN_ONLY },
    NavEntry { path: ADMIN_HOME, title: "Admin Dashboard", access: ADMIN_ONLY },
    NavEntry { path: EMPLOYEE_HOME, title: "My Dashboard", access: EVERYONE },
    NavEntry { path: "/attendance", title: "Attendance", access: STAFF },
    NavEntry { path: "/leaves", title: "Leave Requests", access: EVERYONE },
    NavEntry { path: "/documents", title: "Documents", access: EVERYONE },
];

/// Fixed fallback map from role to landing route.
pub fn role_home(role: Role) -> &'static str {
    if role == Role::SuperAdmin {
        SUPER_ADMIN_HOME
    } else if role.is_admin_like() {
        ADMIN_HOME
    } else {
        EMPLOYEE_HOME
    }
}

/// Resolve the header title for `path`.
pub fn page_title(path: &str) -> &'static str {
    NAV_ENTRIES
        .iter()
        .find(|entry| entry.path == path)
        .map_or(APP_TITLE, |entry| entry.title)
}

/// Entries the given role may see in the sidebar.
pub fn visible_entries(role: Role) -> Vec<NavEntry> {
    NAV_ENTRIES.iter().copied().filter(|entry| has_access(role, entry.access)).collect()
}

/// Authenticated application chrome: sidebar, header, content.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let auth = auth::use_auth();
    let location = use_location();
    let navigate = use_navigate();

    let role = move || normalize_role(auth.get().user.as_ref());
    let title = move || page_title(&location.pathname.get());
    let identity = move || auth.get().user.map_or_else(String::new, |user| user.full_name());

    let on_logout = move |_| {
        auth::logout(auth);
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <div class="shell">
            <aside class="shell__sidebar">
                <span class="shell__brand">{APP_TITLE}</span>
                <nav class="shell__menu">
                    {move || {
                        visible_entries(role())
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <a class="shell__menu-link" href=entry.path>
                                        {entry.title}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </nav>
            </aside>
            <div class="shell__main">
                <header class="shell__header">
                    <h1 class="shell__title">{title}</h1>
                    <span class="shell__spacer"></span>
                    <NotificationBell/>
                    <span class="shell__identity">{identity}</span>
                    <button class="btn shell__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </header>
                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}
