//! Full task list with a status filter.

use leptos::prelude::*;

use crate::components::task_card::TaskCard;
use crate::net::fixtures;
use crate::net::types::TaskStatus;

#[component]
pub fn EmployeeTasksPage() -> impl IntoView {
    let tasks = StoredValue::new(fixtures::onboarding_tasks());
    let filter = RwSignal::new(None::<TaskStatus>);

    let visible = move || {
        let status = filter.get();
        tasks.with_value(|all| fixtures::tasks_with_status(all, status))
    };

    view! {
        <div class="page">
            <div class="section-header">
                <h1 class="page__title">"My Tasks"</h1>
                <select
                    class="select"
                    on:change=move |ev| filter.set(TaskStatus::from_slug(&event_target_value(&ev)))
                >
                    <option value="all">"All Tasks"</option>
                    {TaskStatus::ALL
                        .into_iter()
                        .map(|status| view! { <option value=status.slug()>{status.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            {move || {
                let list = visible();
                if list.is_empty() {
                    view! { <p class="empty">"No tasks match this filter."</p> }.into_any()
                } else {
                    view! {
                        <div class="task-grid">
                            {list.into_iter().map(|task| view! { <TaskCard task=task/> }).collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
