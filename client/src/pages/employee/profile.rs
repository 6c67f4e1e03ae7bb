//! Read-only view of the signed-in identity.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<Signal<AuthState>>();

    view! {
        <div class="page">
            <h1 class="page__title">"My Profile"</h1>
            {move || auth.get().session.map(|session| {
                let initial = session.name.chars().next().unwrap_or('?').to_string();
                view! {
                    <div class="card profile">
                        <div class="profile__avatar">{initial}</div>
                        <dl class="details">
                            <dt>"Name"</dt>
                            <dd>{session.name}</dd>
                            <dt>"Email"</dt>
                            <dd>{session.email}</dd>
                            <dt>"Role"</dt>
                            <dd>{session.role.label()}</dd>
                            <dt>"Employee ID"</dt>
                            <dd>{session.id}</dd>
                        </dl>
                    </div>
                }
            })}
        </div>
    }
}
