//! Onboarding reports: overall counts and a per-department breakdown.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::net::fixtures;
use crate::net::types::{EmployeeSummary, OnboardingReport};

/// One row of the department table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DepartmentRow {
    pub department: &'static str,
    pub headcount: usize,
    pub average_progress: u32,
}

/// Group by department, sorted by name.
pub(crate) fn department_breakdown(employees: &[EmployeeSummary]) -> Vec<DepartmentRow> {
    let mut groups: BTreeMap<&'static str, Vec<EmployeeSummary>> = BTreeMap::new();
    for e in employees {
        groups.entry(e.department).or_default().push(e.clone());
    }
    groups
        .into_iter()
        .map(|(department, members)| {
            let report = OnboardingReport::from_employees(&members);
            DepartmentRow { department, headcount: report.total, average_progress: report.average_progress }
        })
        .collect()
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let employees = fixtures::employees();
    let report = OnboardingReport::from_employees(&employees);
    let rows = department_breakdown(&employees);

    view! {
        <div class="page">
            <h1 class="page__title">"Reports"</h1>

            <section class="card">
                <h2>"Overall Completion"</h2>
                <ProgressBar value=report.average_progress label="Average onboarding progress"/>
                <dl class="details">
                    <dt>"Total joiners"</dt>
                    <dd>{report.total}</dd>
                    <dt>"Completed"</dt>
                    <dd>{report.completed}</dd>
                    <dt>"In progress"</dt>
                    <dd>{report.in_progress}</dd>
                    <dt>"Not started"</dt>
                    <dd>{report.not_started}</dd>
                </dl>
            </section>

            <section class="card">
                <h2>"By Department"</h2>
                <table class="table">
                    <thead>
                        <tr><th>"Department"</th><th>"Headcount"</th><th>"Average Progress"</th></tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| view! {
                                <tr>
                                    <td>{row.department}</td>
                                    <td>{row.headcount}</td>
                                    <td>{format!("{}%", row.average_progress)}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
