//! Top bar with page title, theme toggle, notifications, identity, and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::auth::AppAuthService;
use crate::components::notification_panel::NotificationPanel;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<Signal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let service = StoredValue::new(expect_context::<AppAuthService>());
    let pathname = use_location().pathname;

    let title = move || AppRoute::resolve(&pathname.get()).title();
    let identity = move || {
        let state = auth.get();
        let role = state.role().map(|r| r.label()).unwrap_or_default();
        (state.display_name(), role)
    };

    // The guard on the current page reacts to the cleared session and
    // redirects to /login.
    let on_logout = move |_| service.with_value(AppAuthService::logout);

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">"Onboarding Portal"</a>
            <span class="navbar__divider" aria-hidden="true"></span>
            <span class="navbar__title">{title}</span>

            <span class="navbar__spacer"></span>

            <button
                class="btn navbar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <NotificationPanel/>

            <span class="navbar__self">
                {move || identity().0}
                " ("
                <span class="navbar__self-role">{move || identity().1}</span>
                ")"
            </span>

            <button class="btn navbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
