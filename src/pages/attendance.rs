//! Attendance log page with fixed-interval refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! The log table refreshes every thirty seconds while the page is mounted.
//! The poll loop checks a liveness flag after every suspension so tearing
//! the page down cancels the timer and late responses are dropped.

use leptos::prelude::*;

use crate::components::nav::Shell;
use crate::net::types::AttendanceLog;

/// Seconds between attendance refreshes.
#[cfg(feature = "hydrate")]
const POLL_INTERVAL_SECS: u64 = 30;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let logs = RwSignal::new(Vec::<AttendanceLog>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                let result = fetch_logs().await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                match result {
                    Ok(items) => {
                        logs.set(items);
                        error.set(None);
                    }
                    Err(fetch_error) => error.set(Some(fetch_error.to_string())),
                }
                loading.set(false);
                gloo_timers::future::sleep(std::time::Duration::from_secs(POLL_INTERVAL_SECS)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <Shell>
            <div class="attendance">
                <Show when=move || error.get().is_some()>
                    <p class="attendance__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading attendance..."</p> }>
                    <Show
                        when=move || !logs.get().is_empty()
                        fallback=|| view! { <p class="attendance__empty">"No attendance recorded yet."</p> }
                    >
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Employee"</th>
                                    <th>"Date"</th>
                                    <th>"Check In"</th>
                                    <th>"Check Out"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    logs.get()
                                        .into_iter()
                                        .map(|log| {
                                            view! {
                                                <tr>
                                                    <td>{log.employee_name}</td>
                                                    <td>{log.date}</td>
                                                    <td>{log.check_in.unwrap_or_else(|| "-".to_owned())}</td>
                                                    <td>{log.check_out.unwrap_or_else(|| "-".to_owned())}</td>
                                                    <td>{log.status}</td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </div>
        </Shell>
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_logs() -> Result<Vec<AttendanceLog>, crate::net::error::ApiError> {
    let envelope = crate::net::api::get("/attendance/logs").await?;
    crate::net::api::data_from(&envelope)
}
