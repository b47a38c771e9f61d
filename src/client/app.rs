use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{router::Route, util::ApiClient};
use miaclub::state::{app::AppState, web_config::fetch_web_config};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let mut app = use_context_provider(|| Signal::new(AppState::default()));
    let revision = use_memo(move || app.read().config_revision());

    // Refetch the site configuration on mount and after every saved change
    use_effect(move || {
        let revision = revision();

        spawn(async move {
            tracing::debug!("Loading web config, revision {}", revision);

            let config = fetch_web_config(&ApiClient).await;
            app.write().web_config = config;
        });
    });

    let config = app.read().web_config.clone();

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Title { "{config.site_title}" }
        style { ":root {{ {config.css_variables()} }}" }

        Router::<Route> {}
    }
}
