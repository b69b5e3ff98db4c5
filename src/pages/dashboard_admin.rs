//! Admin dashboard: organization-wide headcount and workflow stats.

use leptos::prelude::*;

use crate::components::nav::Shell;
use crate::components::stat_card::StatCard;
use crate::net::types::AdminSummary;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let summary = RwSignal::new(AdminSummary::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match fetch_summary().await {
            Ok(data) => summary.set(data),
            Err(fetch_error) => error.set(Some(fetch_error.to_string())),
        }
        loading.set(false);
    });

    view! {
        <Shell>
            <div class="dashboard">
                <Show when=move || error.get().is_some()>
                    <p class="dashboard__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                    <div class="stat-grid">
                        <StatCard label="Employees" value=Signal::derive(move || summary.get().employees)/>
                        <StatCard
                            label="Present Today"
                            value=Signal::derive(move || summary.get().present_today)
                        />
                        <StatCard
                            label="Pending Leaves"
                            value=Signal::derive(move || summary.get().pending_leaves)
                        />
                        <StatCard
                            label="Open Onboardings"
                            value=Signal::derive(move || summary.get().open_onboardings)
                        />
                    </div>
                </Show>
            </div>
        </Shell>
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_summary() -> Result<AdminSummary, crate::net::error::ApiError> {
    let envelope = crate::net::api::get("/dashboard/admin").await?;
    crate::net::api::data_from(&envelope)
}
