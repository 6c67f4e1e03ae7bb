//! HR dashboard: onboarding counts and the most recent joiners.

use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::net::fixtures;
use crate::net::types::OnboardingReport;
use crate::state::auth::AuthState;

const RECENT_LIMIT: usize = 3;

#[component]
pub fn HrDashboardPage() -> impl IntoView {
    let auth = expect_context::<Signal<AuthState>>();

    let mut employees = fixtures::employees();
    let report = OnboardingReport::from_employees(&employees);
    // ISO dates sort lexically.
    employees.sort_by(|a, b| b.start_date.cmp(a.start_date));
    employees.truncate(RECENT_LIMIT);

    view! {
        <div class="page">
            <h1 class="page__title">{move || format!("Welcome, {}!", auth.get().display_name())}</h1>
            <p class="page__subtitle">"Onboarding at a glance."</p>

            <div class="stats">
                <div class="stats__item card">
                    <span class="stats__value">{report.total}</span>
                    <span class="stats__label">"New Joiners"</span>
                </div>
                <div class="stats__item card">
                    <span class="stats__value">{report.completed}</span>
                    <span class="stats__label">"Completed"</span>
                </div>
                <div class="stats__item card">
                    <span class="stats__value">{report.in_progress}</span>
                    <span class="stats__label">"In Progress"</span>
                </div>
                <div class="stats__item card">
                    <span class="stats__value">{report.not_started}</span>
                    <span class="stats__label">"Not Started"</span>
                </div>
            </div>

            <section class="card">
                <div class="section-header">
                    <h2>"Recent Joiners"</h2>
                    <a href="/hr/employees">"View all"</a>
                </div>
                {employees
                    .into_iter()
                    .map(|e| view! {
                        <div class="employee-row">
                            <div>
                                <strong>{e.name}</strong>
                                <span class="muted">{format!(" · {} · started {}", e.department, e.start_date)}</span>
                            </div>
                            <ProgressBar value=e.progress/>
                        </div>
                    })
                    .collect_view()}
            </section>

            <section class="quick-links">
                <a class="btn" href="/hr/task-templates">"Manage Task Templates"</a>
                <a class="btn" href="/hr/reports">"View Reports"</a>
            </section>
        </div>
    }
}
