use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;

use miaclub::{
    model::catalog::{CatalogItem, SAMPLE_CATALOG},
    state::storefront::{categories, CatalogFilter, PriceBracket, Section, ALL_CATEGORIES},
};

fn soles(amount: f64) -> String {
    format!("S/{:.2}", amount)
}

#[component]
pub fn CatalogCard(item: CatalogItem) -> Element {
    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            figure { class: "relative",
                img { class: "h-48 w-full object-cover", src: "{item.image}", alt: "{item.title}" }
                if let Some(percent) = item.discount_percent() {
                    span { class: "badge discount-badge absolute top-2 right-2", "-{percent}%" }
                }
            }
            div { class: "card-body",
                div { class: "flex gap-2",
                    span { class: "badge badge-outline", "{item.kind.label()}" }
                    span { class: "badge badge-ghost", "{item.category}" }
                }
                h2 { class: "card-title", "{item.title}" }
                p { class: "text-sm opacity-80", "{item.description}" }
                if let Some(date) = item.date {
                    p { class: "text-sm", "Fecha: {date}" }
                }
                div { class: "card-actions items-baseline gap-2",
                    if let Some(price) = item.price {
                        span { class: "text-lg font-bold brand-text", "{soles(price)}" }
                    }
                    if let Some(original) = item.original_price {
                        span { class: "line-through opacity-60", "{soles(original)}" }
                    }
                }
            }
        }
    )
}

/// Filterable grid over the sample catalog
#[component]
pub fn CatalogGrid(mut filter: Signal<CatalogFilter>) -> Element {
    let current = filter.read().clone();
    let items = current.apply(&SAMPLE_CATALOG);
    let section_label = match current.section {
        Section::Offers => "ofertas",
        Section::Events => "eventos",
    };

    rsx!(
        div { class: "flex flex-col gap-4",
            div { class: "flex flex-wrap gap-2 items-end",
                label { class: "input input-bordered flex items-center gap-2 grow",
                    Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                    input {
                        r#type: "search",
                        class: "grow",
                        placeholder: "Buscar {section_label}...",
                        value: "{current.search}",
                        oninput: move |evt| filter.write().search = evt.value(),
                    }
                }
                select {
                    class: "select select-bordered",
                    value: "{current.category}",
                    onchange: move |evt| filter.write().category = evt.value(),
                    for category in categories(&SAMPLE_CATALOG) {
                        option {
                            key: "{category}",
                            value: "{category}",
                            if category == ALL_CATEGORIES { "Todas las categorías" } else { "{category}" }
                        }
                    }
                }
                select {
                    class: "select select-bordered",
                    value: "{current.price.value()}",
                    onchange: move |evt| filter.write().price = PriceBracket::from_value(&evt.value()),
                    for bracket in PriceBracket::ALL {
                        option { key: "{bracket.value()}", value: "{bracket.value()}", "{bracket.label()}" }
                    }
                }
            }
            if items.is_empty() {
                p { class: "text-center opacity-70 py-8", "No se encontraron {section_label}." }
            } else {
                div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                    for item in items {
                        CatalogCard { key: "{item.id}", item: item.clone() }
                    }
                }
            }
        }
    )
}
