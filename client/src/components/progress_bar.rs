//! Horizontal progress bar.

#[cfg(test)]
#[path = "progress_bar_test.rs"]
mod progress_bar_test;

use leptos::prelude::*;

/// `value / max` as a rounded percentage, clamped to 100. Zero when `max` is zero.
#[must_use]
pub fn percentage(value: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    let (value, max) = (u64::from(value), u64::from(max));
    let pct = (value * 100 + max / 2) / max;
    u32::try_from(pct.min(100)).unwrap_or(100)
}

#[component]
pub fn ProgressBar(
    value: u32,
    #[prop(default = 100)] max: u32,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let pct = percentage(value, max);
    view! {
        <div class="progress">
            {label.map(|text| view! {
                <div class="progress__label">
                    <span>{text}</span>
                    <span>{format!("{pct}%")}</span>
                </div>
            })}
            <div class="progress__track">
                <div class="progress__fill" style=format!("width: {pct}%")></div>
            </div>
        </div>
    }
}
