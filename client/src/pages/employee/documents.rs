//! Document submission: pick a required document, attach a file, "upload".
//!
//! Uploads go through the simulated API and are appended to the local list
//! as pending review. Nothing persists across reloads.

use leptos::html::Input;
use leptos::prelude::*;

use crate::components::notice;
use crate::net::fixtures;
use crate::net::mock_api;
use crate::net::types::UploadedDocument;
use crate::state::ui::UiState;
use crate::util::delay::MOCK_LATENCY;
use crate::util::task::{component_owner, spawn_scoped};

/// Name and byte size of the file currently chosen in `input`.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn selected_file(input: NodeRef<Input>) -> Option<(String, u64)> {
    let file = input.get_untracked()?.files()?.get(0)?;
    Some((file.name(), file.size().max(0.0) as u64))
}

#[cfg(feature = "hydrate")]
fn clear_file(input: NodeRef<Input>) {
    if let Some(el) = input.get_untracked() {
        el.set_value("");
    }
}

#[cfg(not(feature = "hydrate"))]
fn selected_file(_input: NodeRef<Input>) -> Option<(String, u64)> {
    None
}

#[cfg(not(feature = "hydrate"))]
fn clear_file(_input: NodeRef<Input>) {}

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let required = StoredValue::new(fixtures::required_documents());
    let first_id = required.with_value(|docs| docs.first().map(|d| d.id.to_owned()));
    let selected_doc = RwSignal::new(first_id.unwrap_or_default());
    let uploaded = RwSignal::new(Vec::<UploadedDocument>::new());
    let busy = RwSignal::new(false);
    let file_input = NodeRef::<Input>::new();
    let owner = StoredValue::new(component_owner());

    let on_upload = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let chosen = selected_doc.get_untracked();
        let Some(document) = required.with_value(|docs| docs.iter().find(|d| d.id == chosen).cloned()) else {
            notice::show_error(ui, "Please select a document type");
            return;
        };
        let (file_name, size) = selected_file(file_input).unwrap_or_default();
        busy.set(true);
        owner.with_value(|owner| {
            spawn_scoped(owner, async move {
                match mock_api::upload_document(&document, &file_name, size, MOCK_LATENCY).await {
                    Ok(record) => {
                        let message = format!("{} has been uploaded for review.", record.kind);
                        notice::show_success(ui, "Upload Successful", &message);
                        uploaded.update(|list| list.push(record));
                        clear_file(file_input);
                    }
                    Err(e) => notice::show_error(ui, &e.to_string()),
                }
                busy.set(false);
            });
        });
    };

    view! {
        <div class="page">
            <h1 class="page__title">"Documents"</h1>
            <p class="page__subtitle">"Upload the documents HR needs to complete your onboarding."</p>

            <section class="card">
                <h2>"Required Documents"</h2>
                <ul class="doc-list">
                    {required.with_value(|docs| {
                        docs.iter()
                            .map(|doc| view! {
                                <li class="doc-list__item">
                                    <strong>{doc.name}</strong>
                                    <span>{doc.description}</span>
                                    {doc.required.then(|| view! { <span class="badge badge--danger">"Required"</span> })}
                                </li>
                            })
                            .collect_view()
                    })}
                </ul>
            </section>

            <form class="card form" on:submit=on_upload>
                <h2>"Upload Document"</h2>
                <label class="form__label" for="doc-type">"Document Type"</label>
                <select
                    id="doc-type"
                    class="select"
                    on:change=move |ev| selected_doc.set(event_target_value(&ev))
                >
                    {required.with_value(|docs| {
                        docs.iter()
                            .map(|doc| view! { <option value=doc.id>{doc.name}</option> })
                            .collect_view()
                    })}
                </select>
                <label class="form__label" for="doc-file">"File"</label>
                <input id="doc-file" class="form__input" type="file" node_ref=file_input/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Uploading..." } else { "Upload" }}
                </button>
            </form>

            <section class="card">
                <h2>"Uploaded Documents"</h2>
                {move || {
                    let list = uploaded.get();
                    if list.is_empty() {
                        view! { <p class="empty">"No documents uploaded yet."</p> }.into_any()
                    } else {
                        view! {
                            <table class="table">
                                <thead>
                                    <tr><th>"Document"</th><th>"File"</th><th>"Size"</th><th>"Status"</th></tr>
                                </thead>
                                <tbody>
                                    {list.into_iter().map(|doc| view! {
                                        <tr>
                                            <td>{doc.kind}</td>
                                            <td>{doc.file_name}</td>
                                            <td>{doc.file_size}</td>
                                            <td><span class="badge badge--info">{doc.status.label()}</span></td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }
                        .into_any()
                    }
                }}
            </section>
        </div>
    }
}
