use dioxus::prelude::*;

use crate::client::components::{
    storefront::{CatalogGrid, Footer, Header, ProfileModal},
    Page,
};
use miaclub::state::{
    app::AppState,
    storefront::{CatalogFilter, Section},
};

/// Offers and events of a logged-in member
#[component]
pub fn MemberHome() -> Element {
    let app = use_context::<Signal<AppState>>();
    let mut filter = use_signal(CatalogFilter::default);
    let mut profile_open = use_signal(|| false);

    let name = app
        .read()
        .member
        .profile()
        .map(|profile| profile.display_name().to_string())
        .unwrap_or_default();
    let section = filter.read().section;

    let tab_class = move |tab: Section| {
        if tab == section {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    rsx!(
        Header { on_profile: move |_| profile_open.set(true) }
        Page { class: "max-w-6xl mx-auto flex flex-col gap-4",
            h1 { class: "text-3xl font-bold", "¡Hola, {name}!" }
            p { class: "opacity-70", "Estas son las ofertas y eventos exclusivos para ti." }
            div { role: "tablist", class: "tabs tabs-border",
                button {
                    role: "tab",
                    class: tab_class(Section::Offers),
                    onclick: move |_| filter.write().section = Section::Offers,
                    "Ofertas"
                }
                button {
                    role: "tab",
                    class: tab_class(Section::Events),
                    onclick: move |_| filter.write().section = Section::Events,
                    "Eventos"
                }
            }
            CatalogGrid { filter }
        }
        Footer {}
        if profile_open() {
            ProfileModal { on_close: move |_| profile_open.set(false) }
        }
    )
}
