//! Single task by id.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::fixtures;

#[component]
pub fn TaskDetailPage() -> impl IntoView {
    let params = use_params_map();
    let task = move || params.with(|p| p.get("task_id")).and_then(|id| fixtures::find_task(&id));

    view! {
        <div class="page">
            <a class="page__back" href="/employee/tasks">"← Back to tasks"</a>
            {move || match task() {
                None => view! {
                    <div class="card">
                        <h1 class="page__title">"Task not found"</h1>
                        <p>"The task you're looking for doesn't exist or has been removed."</p>
                    </div>
                }
                .into_any(),
                Some(task) => {
                    let action = task.link.map(|href| view! {
                        <a class="btn btn--primary" href=href>{task.status.action_label()}</a>
                    });
                    view! {
                        <div class="card">
                            <header class="task-card__header">
                                <h1 class="page__title">{task.title}</h1>
                                <span class=task.status.badge_class()>{task.status.label()}</span>
                            </header>
                            <p>{task.description}</p>
                            <dl class="details">
                                <dt>"Due date"</dt>
                                <dd>{task.due_date.unwrap_or("No due date")}</dd>
                                {task.days_overdue.map(|n| view! {
                                    <dt>"Overdue"</dt>
                                    <dd class="task-card__overdue">{format!("{n} day(s)")}</dd>
                                })}
                            </dl>
                            {action}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
