//! Transient notice banner for validation errors and confirmations.

use std::time::Duration;

use leptos::prelude::*;

use crate::state::ui::{NoticeKind, UiState};

const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Show a success notice that dismisses itself.
pub fn show_success(ui: RwSignal<UiState>, title: &str, message: &str) {
    let seq = ui.try_update(|u| u.success(title, message)).unwrap_or_default();
    schedule_dismiss(ui, seq);
}

/// Show an error notice that dismisses itself.
pub fn show_error(ui: RwSignal<UiState>, message: &str) {
    let seq = ui.try_update(|u| u.error(message)).unwrap_or_default();
    schedule_dismiss(ui, seq);
}

// The banner lives in the app shell, above any page, so its timer is not
// page-scoped: a notice raised just before navigating still dismisses itself.
fn schedule_dismiss(ui: RwSignal<UiState>, seq: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::util::delay::simulated_latency(NOTICE_TTL).await;
        ui.update(|u| u.dismiss(seq));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ui, seq, NOTICE_TTL);
    }
}

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    move || {
        ui.get().notice.map(|notice| {
            let seq = notice.seq;
            let class = match notice.kind {
                NoticeKind::Success => "notice notice--success",
                NoticeKind::Error => "notice notice--error",
            };
            view! {
                <div class=class role="status">
                    <strong class="notice__title">{notice.title}</strong>
                    <span class="notice__message">{notice.message}</span>
                    <button class="notice__close" on:click=move |_| ui.update(|u| u.dismiss(seq))>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
