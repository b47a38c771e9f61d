use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaRightFromBracket, FaUser};
use dioxus_free_icons::Icon;

use miaclub::state::app::AppState;

/// Fixed storefront header, the member's name replaces the login buttons once signed in
#[component]
pub fn Header(on_profile: Option<EventHandler<()>>) -> Element {
    let mut app = use_context::<Signal<AppState>>();

    let state = app.read();
    let config = &state.web_config;
    let member_name = state
        .member
        .profile()
        .map(|profile| profile.display_name().to_string());

    rsx!(
        div { class: "navbar brand-bg fixed top-0 z-40 shadow-md px-4",
            div { class: "navbar-start",
                button {
                    class: "flex items-center gap-2",
                    onclick: move |_| app.write().go_home(),
                    if !config.logo.url.is_empty() {
                        img {
                            class: "h-10 w-auto",
                            src: "{config.logo.url}",
                            alt: "{config.logo.alt_text}",
                        }
                    }
                    p { class: "text-xl font-bold", "{config.site_title}" }
                }
            }
            div { class: "navbar-end gap-2",
                if let Some(name) = member_name {
                    p { class: "hidden sm:block", "Hola, {name}" }
                    if let Some(on_profile) = on_profile {
                        button {
                            class: "btn btn-ghost btn-sm flex gap-2",
                            onclick: move |_| on_profile.call(()),
                            Icon { width: 16, height: 16, icon: FaUser }
                            "Mi perfil"
                        }
                    }
                    button {
                        class: "btn btn-outline btn-sm flex gap-2",
                        onclick: move |_| app.write().logout(),
                        Icon { width: 16, height: 16, icon: FaRightFromBracket }
                        "Cerrar sesión"
                    }
                } else {
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| app.write().navigate_to_login(),
                        "Iniciar sesión"
                    }
                    button {
                        class: "btn brand-accent btn-sm",
                        onclick: move |_| app.write().navigate_to_register(),
                        "Registrarse"
                    }
                }
            }
        }
    )
}
