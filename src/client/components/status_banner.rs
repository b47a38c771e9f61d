use dioxus::prelude::*;

use miaclub::state::StatusMessage;

#[component]
pub fn StatusBanner(status: Option<StatusMessage>) -> Element {
    let Some(status) = status else {
        return rsx!();
    };

    let class = if status.is_success() {
        "alert alert-success"
    } else {
        "alert alert-error"
    };

    rsx!(
        div { role: "alert", class: "{class} my-2",
            span { "{status.text}" }
        }
    )
}
