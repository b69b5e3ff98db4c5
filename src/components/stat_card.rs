//! Single numeric stat tile used by the dashboards.

use leptos::prelude::*;

#[component]
pub fn StatCard(label: &'static str, value: Signal<i64>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{move || value.get()}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
