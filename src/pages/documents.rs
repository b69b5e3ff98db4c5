//! Documents page: list, multipart upload, and save-as download.

use leptos::prelude::*;

use crate::components::nav::Shell;
use crate::net::types::DocumentRecord;
use crate::state::ui::UiState;

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let documents = RwSignal::new(Vec::<DocumentRecord>::new());
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);
    // Bumped after a successful upload to trigger a refetch.
    let load_seq = RwSignal::new(0u64);
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let _ = load_seq.get();
        leptos::task::spawn_local(async move {
            match fetch_documents().await {
                Ok(items) => documents.set(items),
                Err(error) => ui.update(|state| state.flash_error(error.to_string())),
            }
            loading.set(false);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (ui, load_seq);

    let on_upload = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_input.get_untracked() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                ui.update(|state| state.flash_error("Choose a file first."));
                return;
            };
            let Ok(form) = web_sys::FormData::new() else {
                ui.update(|state| state.flash_error("Upload is not available in this browser."));
                return;
            };
            if form.append_with_blob_and_filename("document", &file, &file.name()).is_err() {
                ui.update(|state| state.flash_error("Could not prepare the upload."));
                return;
            }
            busy.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::upload("/documents/upload", &form).await {
                    Ok(envelope) if envelope.success => {
                        ui.update(|state| state.flash_success("Document uploaded."));
                        load_seq.update(|seq| *seq += 1);
                    }
                    Ok(envelope) => {
                        let message =
                            envelope.message.unwrap_or_else(|| "Upload was not accepted.".to_owned());
                        ui.update(|state| state.flash_error(message));
                    }
                    Err(error) => ui.update(|state| state.flash_error(error.to_string())),
                }
                busy.set(false);
            });
        }
    };

    let on_download = move |id: i64, name: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let path = format!("/documents/{id}/download");
            if let Err(error) = crate::net::api::download(&path, &name).await {
                ui.update(|state| state.flash_error(error.to_string()));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, name);
        }
    };

    view! {
        <Shell>
            <div class="documents">
                <form class="documents__upload" on:submit=on_upload>
                    <input class="documents__file" type="file" node_ref=file_input/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Upload"
                    </button>
                </form>
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading documents..."</p> }>
                    <Show
                        when=move || !documents.get().is_empty()
                        fallback=|| view! { <p class="documents__empty">"No documents uploaded yet."</p> }
                    >
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Category"</th>
                                    <th>"Uploaded"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    documents
                                        .get()
                                        .into_iter()
                                        .map(|doc| {
                                            let name = doc.name.clone();
                                            let id = doc.id;
                                            view! {
                                                <tr>
                                                    <td>{doc.name}</td>
                                                    <td>{doc.category.unwrap_or_else(|| "-".to_owned())}</td>
                                                    <td>{doc.uploaded_at.unwrap_or_else(|| "-".to_owned())}</td>
                                                    <td>
                                                        <button
                                                            class="btn documents__download"
                                                            on:click=move |_| on_download(id, name.clone())
                                                        >
                                                            "Download"
                                                        </button>
                                                    </td>
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
async fn fetch_documents() -> Result<Vec<DocumentRecord>, crate::net::error::ApiError> {
    let envelope = crate::net::api::get("/documents").await?;
    crate::net::api::data_from(&envelope)
}
