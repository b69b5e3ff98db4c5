//! Notification bell with fixed-interval background refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! The poll loop holds a liveness flag checked after every suspension, so
//! tearing down the shell cancels the timer and late responses are never
//! applied to a dead view.

use leptos::prelude::*;

use crate::net::types::Notification;

/// Seconds between notification refreshes.
#[cfg(feature = "hydrate")]
const POLL_INTERVAL_SECS: u64 = 30;

/// Bell button with an unread badge and a dropdown list.
#[component]
pub fn NotificationBell() -> impl IntoView {
    let notifications = RwSignal::new(Vec::<Notification>::new());
    let open = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                refresh(notifications, &poll_alive_task).await;
                gloo_timers::future::sleep(std::time::Duration::from_secs(POLL_INTERVAL_SECS)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let unread = move || notifications.get().iter().filter(|n| !n.read).count();

    view! {
        <div class="bell">
            <button class="bell__button" on:click=move |_| open.update(|o| *o = !*o)>
                "Notifications"
                <Show when=move || { unread() > 0 }>
                    <span class="bell__badge">{unread}</span>
                </Show>
            </button>
            <Show when=move || open.get()>
                <div class="bell__dropdown">
                    <Show
                        when=move || !notifications.get().is_empty()
                        fallback=|| view! { <p class="bell__empty">"No notifications."</p> }
                    >
                        <ul class="bell__list">
                            {move || {
                                notifications
                                    .get()
                                    .into_iter()
                                    .map(|n| {
                                        let class = if n.read {
                                            "bell__item"
                                        } else {
                                            "bell__item bell__item--unread"
                                        };
                                        view! {
                                            <li class=class>
                                                <span class="bell__item-title">{n.title}</span>
                                                <span class="bell__item-message">{n.message}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[cfg(feature = "hydrate")]
async fn refresh(
    notifications: RwSignal<Vec<Notification>>,
    poll_alive: &std::sync::Arc<std::sync::atomic::AtomicBool>,
) {
    let result = crate::net::api::get("/notifications").await;
    // The owning view may have been torn down while the request was in
    // flight; a late response must not touch its signals.
    if !poll_alive.load(std::sync::atomic::Ordering::Relaxed) {
        return;
    }
    match result.and_then(|envelope| crate::net::api::data_from::<Vec<Notification>>(&envelope)) {
        Ok(items) => notifications.set(items),
        Err(error) => leptos::logging::warn!("notification refresh failed: {error}"),
    }
}
