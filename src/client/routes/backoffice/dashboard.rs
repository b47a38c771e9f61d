use chrono::Local;
use dioxus::prelude::*;

use crate::client::util::ApiClient;
use miaclub::state::dashboard::DashboardStats;

#[component]
pub fn DashboardScreen() -> Element {
    let stats = use_resource(|| async move {
        DashboardStats::load(&ApiClient, Local::now().date_naive()).await
    });

    let Some(stats) = *stats.read() else {
        return rsx!(
            div { class: "flex justify-center p-8",
                span { class: "loading loading-spinner loading-md" }
            }
        );
    };

    rsx!(
        div { class: "stats stats-vertical lg:stats-horizontal shadow w-full",
            for (title, value) in stats.cards() {
                div { key: "{title}", class: "stat",
                    div { class: "stat-title", "{title}" }
                    div { class: "stat-value brand-text", "{value}" }
                }
            }
        }
    )
}
