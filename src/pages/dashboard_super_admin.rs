//! Super admin dashboard: tenant organizations and their subscriptions.

use leptos::prelude::*;

use crate::components::nav::Shell;
use crate::net::types::Organization;

#[component]
pub fn SuperAdminDashboardPage() -> impl IntoView {
    let organizations = RwSignal::new(Vec::<Organization>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match fetch_organizations().await {
            Ok(items) => organizations.set(items),
            Err(fetch_error) => error.set(Some(fetch_error.to_string())),
        }
        loading.set(false);
    });

    view! {
        <Shell>
            <div class="org-list">
                <Show when=move || error.get().is_some()>
                    <p class="org-list__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading organizations..."</p> }>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Organization"</th>
                                <th>"Plan"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                organizations
                                    .get()
                                    .into_iter()
                                    .map(|org| {
                                        view! {
                                            <tr>
                                                <td>{org.name}</td>
                                                <td>{org.subscription_plan.unwrap_or_else(|| "-".to_owned())}</td>
                                                <td>{org.subscription_status.unwrap_or_else(|| "-".to_owned())}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </div>
        </Shell>
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_organizations() -> Result<Vec<Organization>, crate::net::error::ApiError> {
    let envelope = crate::net::api::get("/organizations").await?;
    crate::net::api::data_from(&envelope)
}
