//! Leave requests page: list plus an apply-for-leave dialog.

use leptos::prelude::*;

use crate::components::nav::Shell;
use crate::net::types::LeaveRequest;
use crate::state::ui::UiState;

#[component]
pub fn LeavesPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let leaves = RwSignal::new(Vec::<LeaveRequest>::new());
    let loading = RwSignal::new(true);
    let show_apply = RwSignal::new(false);
    // Bumped after a successful apply to trigger a refetch.
    let load_seq = RwSignal::new(0u64);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let _ = load_seq.get();
        leptos::task::spawn_local(async move {
            match fetch_leaves().await {
                Ok(items) => leaves.set(items),
                Err(error) => ui.update(|state| state.flash_error(error.to_string())),
            }
            loading.set(false);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (ui, load_seq);

    let on_apply = move |_| show_apply.set(true);
    let on_cancel = Callback::new(move |()| show_apply.set(false));

    view! {
        <Shell>
            <div class="leaves">
                <div class="leaves__actions">
                    <button class="btn btn--primary" on:click=on_apply>
                        "Apply for Leave"
                    </button>
                </div>
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading leave requests..."</p> }>
                    <Show
                        when=move || !leaves.get().is_empty()
                        fallback=|| view! { <p class="leaves__empty">"No leave requests yet."</p> }
                    >
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Type"</th>
                                    <th>"From"</th>
                                    <th>"To"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    leaves
                                        .get()
                                        .into_iter()
                                        .map(|leave| {
                                            view! {
                                                <tr>
                                                    <td>{leave.leave_type}</td>
                                                    <td>{leave.start_date}</td>
                                                    <td>{leave.end_date}</td>
                                                    <td>{leave.status}</td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </Show>
                </Show>
                <Show when=move || show_apply.get()>
                    <ApplyLeaveDialog on_cancel=on_cancel load_seq=load_seq/>
                </Show>
            </div>
        </Shell>
    }
}

/// Modal dialog collecting a new leave request.
#[component]
fn ApplyLeaveDialog(on_cancel: Callback<()>, load_seq: RwSignal<u64>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let leave_type = RwSignal::new("annual".to_owned());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let start = start_date.get();
        let end = end_date.get();
        if start.is_empty() || end.is_empty() {
            ui.update(|state| state.flash_error("Pick both start and end dates."));
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::json!({
                "leave_type": leave_type.get(),
                "start_date": start,
                "end_date": end,
                "reason": reason.get(),
            });
            leptos::task::spawn_local(async move {
                match crate::net::api::post("/leaves", &body).await {
                    Ok(envelope) if envelope.success => {
                        ui.update(|state| state.flash_success("Leave request submitted."));
                        load_seq.update(|seq| *seq += 1);
                        on_cancel.run(());
                    }
                    Ok(envelope) => {
                        let message =
                            envelope.message.unwrap_or_else(|| "Leave request was not accepted.".to_owned());
                        ui.update(|state| state.flash_error(message));
                        busy.set(false);
                    }
                    Err(error) => {
                        ui.update(|state| state.flash_error(error.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Apply for Leave"</h2>
                <label class="dialog__label">
                    "Type"
                    <select
                        class="dialog__input"
                        prop:value=move || leave_type.get()
                        on:change=move |ev| leave_type.set(event_target_value(&ev))
                    >
                        <option value="annual">"Annual"</option>
                        <option value="sick">"Sick"</option>
                        <option value="unpaid">"Unpaid"</option>
                    </select>
                </label>
                <label class="dialog__label">
                    "From"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || start_date.get()
                        on:input=move |ev| start_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "To"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || end_date.get()
                        on:input=move |ev| end_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Reason"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Optional"
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit.run(())>
                        "Submit"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_leaves() -> Result<Vec<LeaveRequest>, crate::net::error::ApiError> {
    let envelope = crate::net::api::get("/leaves").await?;
    crate::net::api::data_from(&envelope)
}
