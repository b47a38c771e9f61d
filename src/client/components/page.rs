use dioxus::prelude::*;

/// Full height page below the fixed storefront header
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-[72px] {class}",
            {children}
        }
    )
}
