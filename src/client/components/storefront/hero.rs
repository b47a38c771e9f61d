use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronLeft, FaChevronRight};
use dioxus_free_icons::Icon;

use crate::client::util::{sleep, ApiClient};
use miaclub::{
    model::banner::is_web_link,
    state::{
        app::AppState,
        storefront::{Carousel, CAROUSEL_INTERVAL},
    },
};

/// Landing page banner carousel over the active banners
#[component]
pub fn Hero() -> Element {
    let mut app = use_context::<Signal<AppState>>();
    let mut carousel = use_signal(Carousel::default);

    use_future(move || async move {
        carousel.write().begin_load();
        let result = Carousel::fetch(&ApiClient).await;
        carousel.write().apply_loaded(result);
    });

    // Dropped with the component, which stops the rotation
    use_future(move || async move {
        loop {
            sleep(CAROUSEL_INTERVAL).await;
            if carousel.peek().rotates() {
                carousel.write().tick();
            }
        }
    });

    let state = carousel.read();
    let count = state.banners().len();
    let index = state.index();

    let Some(banner) = state.current().cloned() else {
        let title = app.read().web_config.site_title.clone();

        return rsx!(
            div { class: "hero hero-slide brand-bg",
                div { class: "hero-content text-center flex-col",
                    h1 { class: "text-4xl font-bold", "Bienvenido a {title}" }
                    if let Some(error) = state.error() {
                        p { class: "opacity-80", "{error}" }
                    }
                    button {
                        class: "btn brand-accent",
                        onclick: move |_| app.write().navigate_to_register(),
                        "Únete ahora"
                    }
                }
            }
        );
    };

    let background = banner
        .image_url
        .as_deref()
        .map(|url| format!("background-image: url('{}');", url))
        .unwrap_or_default();

    rsx!(
        div { class: "relative",
            div { class: "hero hero-slide brand-bg", style: "{background}",
                div { class: "hero-overlay bg-black/40" }
                div { class: "hero-content text-center text-white flex-col",
                    h1 { class: "text-4xl font-bold", "{banner.title}" }
                    if let Some(subtitle) = &banner.subtitle {
                        p { class: "text-lg", "{subtitle}" }
                    }
                    if let Some(link) = banner.link_url.as_ref().filter(|link| is_web_link(link)) {
                        a { class: "btn brand-accent", href: "{link}", "Ver más" }
                    }
                }
            }
            if count > 1 {
                button {
                    class: "btn btn-circle btn-ghost absolute left-4 top-1/2 text-white",
                    onclick: move |_| {
                        let previous = (index + count - 1) % count;
                        carousel.write().select(previous);
                    },
                    Icon { width: 20, height: 20, icon: FaChevronLeft }
                }
                button {
                    class: "btn btn-circle btn-ghost absolute right-4 top-1/2 text-white",
                    onclick: move |_| carousel.write().tick(),
                    Icon { width: 20, height: 20, icon: FaChevronRight }
                }
                div { class: "absolute bottom-4 w-full flex justify-center gap-2",
                    for dot in 0..count {
                        button {
                            key: "{dot}",
                            class: if dot == index { "hero-dot active" } else { "hero-dot" },
                            onclick: move |_| carousel.write().select(dot),
                        }
                    }
                }
            }
        }
    )
}
