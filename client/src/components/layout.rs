//! Authenticated page chrome: navbar on top, sidebar on the left.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;

#[component]
pub fn PortalLayout(children: Children) -> impl IntoView {
    view! {
        <div class="portal">
            <Navbar/>
            <div class="portal__body">
                <Sidebar/>
                <main class="portal__main">{children()}</main>
            </div>
        </div>
    }
}
