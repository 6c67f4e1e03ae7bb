//! Navbar bell with an unread badge and a popover listing notifications.

use leptos::prelude::*;

use crate::state::notifications::NotificationsState;

#[component]
pub fn NotificationPanel() -> impl IntoView {
    let feed = expect_context::<RwSignal<NotificationsState>>();
    let unread = Memo::new(move |_| feed.with(NotificationsState::unread_count));

    view! {
        <div class="notifications">
            <button
                class="btn notifications__bell"
                title="Notifications"
                on:click=move |_| feed.update(NotificationsState::toggle_open)
            >
                "🔔"
                {move || {
                    let count = unread.get();
                    (count > 0).then(|| view! { <span class="notifications__badge">{count}</span> })
                }}
            </button>
            {move || feed.with(|f| f.open).then(|| view! {
                <div class="notifications__popover card">
                    <header class="section-header notifications__header">
                        <h3>"Notifications"</h3>
                        {move || (unread.get() > 0).then(|| view! {
                            <button class="login-link" on:click=move |_| feed.update(NotificationsState::mark_all_read)>
                                "Mark all as read"
                            </button>
                        })}
                    </header>
                    {move || {
                        let items = feed.with(|f| f.items.clone());
                        if items.is_empty() {
                            view! { <p class="empty">"No notifications"</p> }.into_any()
                        } else {
                            view! {
                                <ul class="notifications__list">
                                    {items
                                        .into_iter()
                                        .map(|n| {
                                            let id = n.id;
                                            let class = if n.read {
                                                "notifications__item"
                                            } else {
                                                "notifications__item notifications__item--unread"
                                            };
                                            view! {
                                                <li class=class on:click=move |_| {
                                                    feed.update(|f| {
                                                        f.mark_read(id);
                                                    });
                                                }>
                                                    <div class="notifications__row">
                                                        <strong>{n.title}</strong>
                                                        <span class="muted">{n.date}</span>
                                                    </div>
                                                    <p class="muted">{n.message}</p>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                            .into_any()
                        }
                    }}
                </div>
            })}
        </div>
    }
}
