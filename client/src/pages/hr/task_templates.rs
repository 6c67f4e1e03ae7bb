use leptos::prelude::*;

use crate::net::fixtures;

#[component]
pub fn TaskTemplatesPage() -> impl IntoView {
    let templates = fixtures::task_templates();

    view! {
        <div class="page">
            <h1 class="page__title">"Task Templates"</h1>
            <p class="page__subtitle">"Standard onboarding checklists assigned to new joiners by department."</p>
            <div class="template-grid">
                {templates
                    .into_iter()
                    .map(|tpl| view! {
                        <article class="card template">
                            <header class="section-header">
                                <h2>{tpl.name}</h2>
                                <span class="badge badge--neutral">{tpl.department}</span>
                            </header>
                            <p class="muted">{format!("{} tasks", tpl.tasks.len())}</p>
                            <ol class="template__tasks">
                                {tpl.tasks.iter().map(|task| view! { <li>{*task}</li> }).collect_view()}
                            </ol>
                        </article>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
