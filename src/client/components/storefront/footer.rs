use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::{FaFacebook, FaInstagram, FaTiktok};
use dioxus_free_icons::Icon;

use miaclub::state::app::AppState;

#[component]
pub fn Footer() -> Element {
    let mut app = use_context::<Signal<AppState>>();
    let title = app.read().web_config.site_title.clone();

    rsx!(
        footer { class: "footer footer-horizontal footer-center bg-base-200 p-10 gap-4",
            nav { class: "flex gap-4",
                a { href: "https://www.facebook.com", aria_label: "Facebook",
                    Icon { width: 24, height: 24, icon: FaFacebook }
                }
                a { href: "https://www.instagram.com", aria_label: "Instagram",
                    Icon { width: 24, height: 24, icon: FaInstagram }
                }
                a { href: "https://www.tiktok.com", aria_label: "TikTok",
                    Icon { width: 24, height: 24, icon: FaTiktok }
                }
            }
            aside {
                p { "© {title}. Todos los derechos reservados." }
                button {
                    class: "link link-hover text-xs opacity-60",
                    onclick: move |_| app.write().admin_login(),
                    "Acceso BackOffice"
                }
            }
        }
    )
}
