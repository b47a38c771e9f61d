use dioxus::prelude::*;

use crate::client::{
    components::storefront::{
        CatalogCard, Footer, ForgotPasswordModal, Header, Hero, LoginModal,
    },
    routes::{Backoffice, MemberHome, Registration},
    util::ApiClient,
};
use miaclub::{
    model::{benefit::BenefitDto, catalog::SAMPLE_CATALOG},
    state::{
        app::{AppState, View},
        collection::{CollectionClient, ListQuery},
        storefront::CatalogFilter,
    },
};

/// Single page shell, switching screens on the application state
#[component]
pub fn Home() -> Element {
    let app = use_context::<Signal<AppState>>();
    let view = app.read().view();

    match view {
        View::Home => rsx!(Landing {}),
        View::Registration => rsx!(Registration {}),
        View::Member => rsx!(MemberHome {}),
        View::Backoffice => rsx!(Backoffice {}),
    }
}

#[component]
fn Landing() -> Element {
    let mut app = use_context::<Signal<AppState>>();
    let (login_open, forgot_open) = {
        let state = app.read();
        (state.login_open, state.forgot_password_open)
    };

    let featured: Vec<_> = CatalogFilter::default()
        .apply(&SAMPLE_CATALOG)
        .into_iter()
        .take(3)
        .cloned()
        .collect();

    rsx!(
        Header {}
        div { class: "pt-[64px]",
            Hero {}
            section { class: "max-w-6xl mx-auto p-6 flex flex-col gap-4",
                h2 { class: "text-2xl font-bold", "Ofertas destacadas" }
                div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                    for item in featured {
                        CatalogCard { key: "{item.id}", item }
                    }
                }
                div { class: "flex justify-center",
                    button {
                        class: "btn btn-brand",
                        onclick: move |_| app.write().navigate_to_register(),
                        "Regístrate para ver todas las ofertas"
                    }
                }
            }
            Benefits {}
        }
        Footer {}
        if login_open {
            LoginModal {}
        }
        if forgot_open {
            ForgotPasswordModal {}
        }
    )
}

/// Active membership benefits
#[component]
fn Benefits() -> Element {
    let benefits = use_resource(|| async move {
        ApiClient
            .select::<BenefitDto>(ListQuery::default())
            .await
            .map(|benefits| {
                benefits
                    .into_iter()
                    .filter(|benefit| benefit.is_active)
                    .collect::<Vec<_>>()
            })
    });

    let benefits = match &*benefits.read() {
        Some(Ok(benefits)) if !benefits.is_empty() => benefits.clone(),
        Some(Err(err)) => {
            dioxus_logger::tracing::error!("Error fetching benefits: {}", err);
            return rsx!();
        }
        _ => return rsx!(),
    };

    rsx!(
        section { class: "bg-base-200",
            div { class: "max-w-6xl mx-auto p-6 flex flex-col gap-4",
                h2 { class: "text-2xl font-bold", "Beneficios de ser miembro" }
                div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                    for benefit in benefits {
                        div { key: "{benefit.id}", class: "card bg-base-100 shadow-sm",
                            if let Some(image) = &benefit.image_url {
                                figure {
                                    img { class: "h-32 w-full object-cover", src: "{image}", alt: "{benefit.title}" }
                                }
                            }
                            div { class: "card-body",
                                h3 { class: "card-title", "{benefit.title}" }
                                p { class: "text-sm opacity-80", "{benefit.description}" }
                            }
                        }
                    }
                }
            }
        }
    )
}
