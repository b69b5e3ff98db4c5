//! Root application component with routing, contexts, and session bootstrap.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::error_boundary::AppErrorBoundary;
use crate::components::guards::{RequireAuth, RequireRole};
use crate::components::nav::{ADMIN_ONLY, EVERYONE, STAFF, SUPER_ADMIN_ONLY, role_home};
use crate::components::toast::ToastHost;
use crate::net::api::LOGIN_ROUTE;
use crate::pages::attendance::AttendancePage;
use crate::pages::dashboard_admin::AdminDashboardPage;
use crate::pages::dashboard_employee::EmployeeDashboardPage;
use crate::pages::dashboard_super_admin::SuperAdminDashboardPage;
use crate::pages::documents::DocumentsPage;
use crate::pages::leaves::LeavesPage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::state::auth;
use crate::state::ui::UiState;
use crate::util::role::normalize_role;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and UI contexts, kicks off session bootstrap, and
/// sets up client-side routing behind the guards.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = auth::provide_auth();
    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Seed synchronously from storage, then verify in the background.
    // `loading` only drops once verification settles.
    auth::hydrate_from_storage(auth);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        auth::bootstrap(auth).await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/hrm-client.css"/>
        <Title text="HR Portal"/>

        <Router>
            <AppErrorBoundary>
                <ToastHost/>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("") view=HomeRedirect/>
                    <Route
                        path=StaticSegment("super-admin")
                        view=|| {
                            view! {
                                <RequireRole allowed=SUPER_ADMIN_ONLY>
                                    <SuperAdminDashboardPage/>
                                </RequireRole>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| {
                            view! {
                                <RequireRole allowed=ADMIN_ONLY>
                                    <AdminDashboardPage/>
                                </RequireRole>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("employee")
                        view=|| {
                            view! {
                                <RequireRole allowed=EVERYONE>
                                    <EmployeeDashboardPage/>
                                </RequireRole>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("attendance")
                        view=|| {
                            view! {
                                <RequireRole allowed=STAFF>
                                    <AttendancePage/>
                                </RequireRole>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("leaves")
                        view=|| {
                            view! {
                                <RequireRole allowed=EVERYONE>
                                    <LeavesPage/>
                                </RequireRole>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("documents")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <DocumentsPage/>
                                </RequireAuth>
                            }
                        }
                    />
                </Routes>
            </AppErrorBoundary>
        </Router>
    }
}

/// Routes `/` to the signed-in user's landing page, or to login.
#[component]
fn HomeRedirect() -> impl IntoView {
    let auth = auth::use_auth();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        let target = match state.user.as_ref() {
            Some(user) => role_home(normalize_role(Some(user))),
            None => LOGIN_ROUTE,
        };
        navigate(target, NavigateOptions::default());
    });

    view! {
        <div class="guard-screen">
            <p>"Loading..."</p>
        </div>
    }
}
