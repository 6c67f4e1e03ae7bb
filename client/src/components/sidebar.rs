//! Role-specific navigation.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::auth::Role;
use crate::routes::{AppRoute, nav_items, resource_items};
use crate::state::auth::AuthState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<Signal<AuthState>>();
    let pathname = use_location().pathname;

    let role = move || auth.get().role().unwrap_or(Role::Employee);
    let link = move |route: AppRoute| {
        let path = route.path();
        let href = path.clone();
        let class = move || {
            if pathname.get() == path { "sidebar__link sidebar__link--active" } else { "sidebar__link" }
        };
        view! {
            <a class=class href=href>
                {route.title()}
            </a>
        }
    };

    view! {
        <aside class="sidebar">
            <nav class="sidebar__nav">
                {move || nav_items(role()).into_iter().map(link).collect::<Vec<_>>()}
            </nav>
            <Show when=move || role() == Role::Employee>
                <div class="sidebar__section">
                    <p class="sidebar__heading">"Resources"</p>
                    {resource_items().into_iter().map(link).collect::<Vec<_>>()}
                </div>
            </Show>
            <div class="sidebar__footer">
                <p class="sidebar__user">{move || auth.get().display_name()}</p>
                <p class="sidebar__email">
                    {move || auth.get().session.map(|s| s.email).unwrap_or_default()}
                </p>
            </div>
        </aside>
    }
}
