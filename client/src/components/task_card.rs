//! Card summarizing one onboarding task.

use leptos::prelude::*;

use crate::net::types::OnboardingTask;

#[component]
pub fn TaskCard(task: OnboardingTask) -> impl IntoView {
    let href = task.action_path();
    let due = task.due_date.map(|d| format!("Due {d}"));
    let overdue = task.days_overdue.map(|n| format!("{n} day(s) overdue"));

    view! {
        <article class="task-card">
            <header class="task-card__header">
                <h3 class="task-card__title">{task.title}</h3>
                <span class=task.status.badge_class()>{task.status.label()}</span>
            </header>
            <p class="task-card__description">{task.description}</p>
            <footer class="task-card__footer">
                {due.map(|text| view! { <span class="task-card__due">{text}</span> })}
                {overdue.map(|text| view! { <span class="task-card__overdue">{text}</span> })}
                <a class="btn btn--primary task-card__action" href=href>
                    {task.status.action_label()}
                </a>
            </footer>
        </article>
    }
}
