//! Role-gated route wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every role-scoped route renders through this component. It re-runs the
//! guard whenever auth state or the location changes, so logging out on a
//! guarded page sends the user to `/login` without any page-level redirect
//! logic.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::auth::GuardDecision;
use crate::components::layout::PortalLayout;
use crate::routes::guard_path;
use crate::state::auth::AuthState;

/// Render `children` inside the portal layout only if the session's role is
/// exactly the one the route table requires for the current path; otherwise
/// redirect.
///
/// Until the browser has restored any stored session, a loading placeholder
/// is shown so server-rendered HTML never bakes in a redirect.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<Signal<AuthState>>();
    let pathname = use_location().pathname;
    let decision = Memo::new(move |_| {
        let state = auth.get();
        let path = pathname.get();
        (!state.loading).then(|| guard_path(&path, state.session.as_ref()))
    });

    move || match decision.get() {
        None => view! {
            <div class="route-loading">
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        Some(GuardDecision::Allow) => {
            let children = children.clone();
            view! { <PortalLayout>{children()}</PortalLayout> }.into_any()
        }
        Some(GuardDecision::Redirect(path)) => view! { <Redirect path=path/> }.into_any(),
    }
}
