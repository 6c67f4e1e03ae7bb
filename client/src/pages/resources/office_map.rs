//! Office locations with a selectable detail panel.

use leptos::prelude::*;

use crate::net::fixtures;

#[component]
pub fn OfficeMapPage() -> impl IntoView {
    let offices = StoredValue::new(fixtures::office_locations());
    let selected = RwSignal::new(offices.with_value(|list| list.first().map(|o| o.id)));

    let detail = move || {
        let id = selected.get()?;
        offices.with_value(|list| list.iter().find(|o| o.id == id).cloned())
    };

    view! {
        <div class="page">
            <h1 class="page__title">"Office Locations"</h1>
            <div class="office-map">
                <ul class="office-map__list">
                    {offices.with_value(|list| {
                        list.iter()
                            .map(|office| {
                                let id = office.id;
                                let class = move || {
                                    if selected.get() == Some(id) {
                                        "office-map__item office-map__item--active"
                                    } else {
                                        "office-map__item"
                                    }
                                };
                                view! {
                                    <li>
                                        <button class=class on:click=move |_| selected.set(Some(id))>
                                            {office.name}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    })}
                </ul>
                <div class="card office-map__detail">
                    {move || detail().map(|office| view! {
                        <h2>{office.name}</h2>
                        <p>{office.address}</p>
                        <a
                            class="btn"
                            target="_blank"
                            rel="noopener"
                            href=format!("https://maps.google.com/?q={}", office.address.replace(' ', "+"))
                        >
                            "Open in Maps"
                        </a>
                    })}
                </div>
            </div>
        </div>
    }
}
