//! Company policies with a category filter and per-policy acknowledgement.

use leptos::prelude::*;

use crate::components::notice;
use crate::net::fixtures;
use crate::net::types::PolicyCategory;
use crate::state::ui::UiState;

#[component]
pub fn PoliciesPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let policies = StoredValue::new(fixtures::policies());
    let category = RwSignal::new(None::<PolicyCategory>);
    let acknowledged = RwSignal::new(Vec::<&'static str>::new());

    let tab = move |value: Option<PolicyCategory>, label: &'static str| {
        let class = move || if category.get() == value { "tab tab--active" } else { "tab" };
        view! { <button class=class on:click=move |_| category.set(value)>{label}</button> }
    };

    view! {
        <div class="page">
            <h1 class="page__title">"Company Policies"</h1>
            <div class="tabs">
                {tab(None, "All")}
                {PolicyCategory::ALL.into_iter().map(|c| tab(Some(c), c.label())).collect_view()}
            </div>
            <div class="policy-list">
                {move || {
                    let selected = category.get();
                    policies
                        .with_value(|all| fixtures::policies_in_category(all, selected))
                        .into_iter()
                        .map(|policy| {
                            let id = policy.id;
                            let title = policy.title;
                            let done = move || acknowledged.with(|ids| ids.contains(&id));
                            let on_ack = move |_| {
                                acknowledged.update(|ids| {
                                    if !ids.contains(&id) {
                                        ids.push(id);
                                    }
                                });
                                notice::show_success(
                                    ui,
                                    "Policy Acknowledged",
                                    &format!("You have acknowledged the {title}."),
                                );
                            };
                            view! {
                                <article class="card policy">
                                    <header class="section-header">
                                        <h2>{policy.title}</h2>
                                        <span class="badge badge--neutral">{policy.category.label()}</span>
                                    </header>
                                    <p>{policy.summary}</p>
                                    <footer class="policy__footer">
                                        <span class="muted">{format!("Last updated {}", policy.updated)}</span>
                                        <button class="btn btn--primary" disabled=done on:click=on_ack>
                                            {move || if done() { "Acknowledged" } else { "Acknowledge" }}
                                        </button>
                                    </footer>
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
