//! Employee directory with a free-text search.

#[cfg(test)]
#[path = "employees_test.rs"]
mod employees_test;

use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::net::fixtures;
use crate::net::types::EmployeeSummary;

/// Case-insensitive match on name, email, or department. A blank query keeps everyone.
pub(crate) fn filter_employees(employees: &[EmployeeSummary], query: &str) -> Vec<EmployeeSummary> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return employees.to_vec();
    }
    employees
        .iter()
        .filter(|e| {
            [e.name, e.email, e.department]
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let all = StoredValue::new(fixtures::employees());
    let query = RwSignal::new(String::new());

    view! {
        <div class="page">
            <div class="section-header">
                <h1 class="page__title">"Employees"</h1>
                <input
                    class="form__input search"
                    type="search"
                    placeholder="Search employees..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </div>
            <table class="table card">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Department"</th>
                        <th>"Start Date"</th>
                        <th>"Progress"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let q = query.get();
                        all.with_value(|list| filter_employees(list, &q))
                            .into_iter()
                            .map(|e| view! {
                                <tr>
                                    <td>{e.name}</td>
                                    <td>{e.email}</td>
                                    <td>{e.department}</td>
                                    <td>{e.start_date}</td>
                                    <td><ProgressBar value=e.progress/></td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
