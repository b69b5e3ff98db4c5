//! Employee dashboard: personal attendance and leave stats.

use leptos::prelude::*;

use crate::components::nav::Shell;
use crate::components::stat_card::StatCard;
use crate::net::types::EmployeeSummary;
use crate::state::auth;

#[component]
pub fn EmployeeDashboardPage() -> impl IntoView {
    let auth = auth::use_auth();
    let summary = RwSignal::new(EmployeeSummary::default());
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

    let greeting = move || {
        auth.get()
            .user
            .map_or_else(|| "Welcome".to_owned(), |user| format!("Welcome, {}", user.full_name()))
    };

    view! {
        <Shell>
            <div class="dashboard">
                <p class="dashboard__greeting">{greeting}</p>
                <Show when=move || error.get().is_some()>
                    <p class="dashboard__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                    <div class="stat-grid">
                        <StatCard
                            label="Days Present"
                            value=Signal::derive(move || summary.get().present_days)
                        />
                        <StatCard
                            label="Leave Balance"
                            value=Signal::derive(move || summary.get().leave_balance)
                        />
                        <StatCard
                            label="Pending Requests"
                            value=Signal::derive(move || summary.get().pending_requests)
                        />
                    </div>
                </Show>
            </div>
        </Shell>
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_summary() -> Result<EmployeeSummary, crate::net::error::ApiError> {
    let envelope = crate::net::api::get("/dashboard/employee").await?;
    crate::net::api::data_from(&envelope)
}
