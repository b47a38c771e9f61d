use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { class: "flex flex-col items-center justify-center gap-4",
            p { class: "text-2xl font-bold", "Página no encontrada" }
            p { class: "opacity-70", "/{path}" }
            Link { to: Route::Home {}, class: "btn btn-brand", "Volver al inicio" }
        }
    )
}
