//! Support request form.

use leptos::prelude::*;

use crate::components::notice;
use crate::net::mock_api::{self, SupportRequest, SUPPORT_CATEGORIES};
use crate::state::ui::UiState;
use crate::util::delay::MOCK_LATENCY;
use crate::util::task::{component_owner, spawn_scoped};

#[component]
pub fn SupportPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let category = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let owner = StoredValue::new(component_owner());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match SupportRequest::new(&category.get(), &subject.get(), &message.get()) {
            Ok(request) => request,
            Err(e) => {
                notice::show_error(ui, &e.to_string());
                return;
            }
        };
        busy.set(true);
        owner.with_value(|owner| {
            spawn_scoped(owner, async move {
                let receipt = mock_api::submit_support_request(&request, MOCK_LATENCY).await;
                notice::show_success(
                    ui,
                    "Request Submitted",
                    &format!("Your support request has been submitted. Reference: {}", receipt.reference),
                );
                category.set(String::new());
                subject.set(String::new());
                message.set(String::new());
                busy.set(false);
            });
        });
    };

    view! {
        <div class="page">
            <h1 class="page__title">"Help & Support"</h1>
            <p class="page__subtitle">"Questions about onboarding? Send us a request and we'll get back to you."</p>

            <form class="card form" on:submit=on_submit>
                <label class="form__label" for="support-category">"Category"</label>
                <select
                    id="support-category"
                    class="select"
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value="">"Select a category"</option>
                    {SUPPORT_CATEGORIES
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
                <label class="form__label" for="support-subject">"Subject"</label>
                <input
                    id="support-subject"
                    class="form__input"
                    type="text"
                    placeholder="Brief summary of your issue"
                    prop:value=move || subject.get()
                    on:input=move |ev| subject.set(event_target_value(&ev))
                />
                <label class="form__label" for="support-message">"Message"</label>
                <textarea
                    id="support-message"
                    class="form__input form__textarea"
                    placeholder="Describe your issue in detail"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit Request" }}
                </button>
            </form>

            <section class="card">
                <h2>"Other ways to reach us"</h2>
                <dl class="details">
                    <dt>"HR Helpdesk"</dt>
                    <dd>"hr.helpdesk@techmahindra.com"</dd>
                    <dt>"IT Service Desk"</dt>
                    <dd>"servicedesk@techmahindra.com"</dd>
                    <dt>"Hours"</dt>
                    <dd>"Monday to Friday, 9:00 to 18:00 IST"</dd>
                </dl>
            </section>
        </div>
    }
}
