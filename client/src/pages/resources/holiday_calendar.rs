//! Holiday calendar, one month at a time.

#[cfg(test)]
#[path = "holiday_calendar_test.rs"]
mod holiday_calendar_test;

use leptos::prelude::*;

use crate::net::fixtures;

pub(crate) const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September", "October",
    "November", "December",
];

/// Move `month` (1-12) by `delta`, wrapping across the year boundary.
pub(crate) fn step_month(month: u32, delta: i32) -> u32 {
    let zero_based = i64::from(month.clamp(1, 12)) - 1 + i64::from(delta);
    u32::try_from(zero_based.rem_euclid(12)).unwrap_or(0) + 1
}

pub(crate) fn month_name(month: u32) -> &'static str {
    usize::try_from(month)
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|i| MONTH_NAMES.get(i))
        .copied()
        .unwrap_or("")
}

#[component]
pub fn HolidayCalendarPage() -> impl IntoView {
    let holidays = StoredValue::new(fixtures::holidays());
    let month = RwSignal::new(1_u32);

    let in_month = move || {
        let m = month.get();
        holidays.with_value(|all| fixtures::holidays_in_month(all, m))
    };

    view! {
        <div class="page">
            <h1 class="page__title">"Holiday Calendar"</h1>
            <div class="card">
                <div class="calendar__nav">
                    <button class="btn" on:click=move |_| month.update(|m| *m = step_month(*m, -1))>"‹"</button>
                    <h2>{move || month_name(month.get())}</h2>
                    <button class="btn" on:click=move |_| month.update(|m| *m = step_month(*m, 1))>"›"</button>
                </div>
                {move || {
                    let list = in_month();
                    if list.is_empty() {
                        view! { <p class="empty">"No holidays this month."</p> }.into_any()
                    } else {
                        list.into_iter()
                            .map(|h| view! {
                                <div class="holiday">
                                    <div class="holiday__date">{h.date}</div>
                                    <div>
                                        <strong>{h.name}</strong>
                                        <span class="badge badge--neutral">{h.kind.label()}</span>
                                        <p class="muted">{h.description}</p>
                                    </div>
                                </div>
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
            <section class="card">
                <h2>"All Holidays"</h2>
                <table class="table">
                    <thead><tr><th>"Date"</th><th>"Holiday"</th><th>"Type"</th></tr></thead>
                    <tbody>
                        {holidays.with_value(|all| {
                            all.iter()
                                .map(|h| view! {
                                    <tr><td>{h.date}</td><td>{h.name}</td><td>{h.kind.label()}</td></tr>
                                })
                                .collect_view()
                        })}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
