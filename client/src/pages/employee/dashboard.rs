//! Employee dashboard: greeting, overall progress, and outstanding tasks.

use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::components::task_card::TaskCard;
use crate::net::fixtures;
use crate::net::types::{TaskStats, TaskStatus};
use crate::state::auth::AuthState;

#[component]
pub fn EmployeeDashboardPage() -> impl IntoView {
    let auth = expect_context::<Signal<AuthState>>();

    let tasks = fixtures::onboarding_tasks();
    let stats = TaskStats::from_tasks(&tasks);
    let pending: Vec<_> = tasks.into_iter().filter(|t| t.status != TaskStatus::Completed).collect();

    view! {
        <div class="page">
            <h1 class="page__title">{move || format!("Welcome, {}!", auth.get().display_name())}</h1>
            <p class="page__subtitle">"Here's where you are with onboarding."</p>

            <section class="card">
                <ProgressBar value=stats.percent_complete() label="Overall Progress"/>
                <div class="stats">
                    <div class="stats__item">
                        <span class="stats__value">{stats.total}</span>
                        <span class="stats__label">"Total Tasks"</span>
                    </div>
                    <div class="stats__item">
                        <span class="stats__value">{stats.completed}</span>
                        <span class="stats__label">"Completed"</span>
                    </div>
                    <div class="stats__item">
                        <span class="stats__value">{stats.in_progress}</span>
                        <span class="stats__label">"In Progress"</span>
                    </div>
                    <div class="stats__item">
                        <span class="stats__value">{stats.pending}</span>
                        <span class="stats__label">"Pending"</span>
                    </div>
                </div>
            </section>

            <section>
                <div class="section-header">
                    <h2>"Pending Tasks"</h2>
                    <a href="/employee/tasks">"View all"</a>
                </div>
                <div class="task-grid">
                    {pending.into_iter().map(|task| view! { <TaskCard task=task/> }).collect_view()}
                </div>
            </section>
        </div>
    }
}
