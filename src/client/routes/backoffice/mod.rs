//! Backoffice screens behind the [`BackofficeGate`].
//!
//! Every list screen owns a `Signal<ListController<_>>`. Remote calls hold no borrow of the
//! signal, only their result is applied to it once they return.

mod access;
mod banners;
mod benefits;
mod dashboard;
mod events;
mod login;
mod offers;
mod users;
mod web_config;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCalendar, FaGauge, FaGear, FaGift, FaImage, FaRightFromBracket, FaStore, FaTag, FaUserShield,
    FaUsers,
};
use dioxus_free_icons::Icon;

use crate::client::{
    components::StatusBanner,
    util::{confirm, ApiClient},
};
use miaclub::{
    model::backoffice_user::Role,
    state::{
        app::AppState,
        collection::{AuthClient, Record},
        list::{Draft, ListController, LoadState},
        session::{Admission, BackofficeGate},
        StatusMessage,
    },
};

use access::AccessScreen;
use banners::BannersScreen;
use benefits::BenefitsScreen;
use dashboard::DashboardScreen;
use events::EventsScreen;
use login::BackofficeLogin;
use offers::OffersScreen;
use users::UsersScreen;
use web_config::WebConfigScreen;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Screen {
    Dashboard,
    Offers,
    Events,
    Banners,
    Benefits,
    Users,
    Access,
    WebConfig,
}

impl Screen {
    const ALL: [Screen; 8] = [
        Screen::Dashboard,
        Screen::Offers,
        Screen::Events,
        Screen::Banners,
        Screen::Benefits,
        Screen::Users,
        Screen::Access,
        Screen::WebConfig,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Offers => "Ofertas",
            Self::Events => "Eventos",
            Self::Banners => "Banners",
            Self::Benefits => "Beneficios",
            Self::Users => "Usuarios",
            Self::Access => "Accesos",
            Self::WebConfig => "Configuración Web",
        }
    }

    fn visible_to(&self, role: Role) -> bool {
        match self {
            Self::Users | Self::Access => role.can_manage_users(),
            _ => true,
        }
    }

    fn icon(&self) -> Element {
        match self {
            Self::Dashboard => rsx!(Icon { width: 16, height: 16, icon: FaGauge }),
            Self::Offers => rsx!(Icon { width: 16, height: 16, icon: FaTag }),
            Self::Events => rsx!(Icon { width: 16, height: 16, icon: FaCalendar }),
            Self::Banners => rsx!(Icon { width: 16, height: 16, icon: FaImage }),
            Self::Benefits => rsx!(Icon { width: 16, height: 16, icon: FaGift }),
            Self::Users => rsx!(Icon { width: 16, height: 16, icon: FaUsers }),
            Self::Access => rsx!(Icon { width: 16, height: 16, icon: FaUserShield }),
            Self::WebConfig => rsx!(Icon { width: 16, height: 16, icon: FaGear }),
        }
    }
}

#[component]
pub fn Backoffice() -> Element {
    let mut gate = use_signal(BackofficeGate::default);

    use_future(move || async move {
        let admission = Admission::restore(&ApiClient).await;
        gate.write().apply(admission);
    });

    let state = gate.read();
    if state.is_loading() {
        return rsx!(
            div { class: "min-h-screen flex items-center justify-center",
                span { class: "loading loading-spinner loading-lg" }
            }
        );
    }

    match state.identity().cloned() {
        None => rsx!(BackofficeLogin { gate }),
        Some(identity) => rsx!(Layout {
            gate,
            name: identity.name,
            email: identity.email,
            role: identity.role,
        }),
    }
}

#[component]
fn Layout(mut gate: Signal<BackofficeGate>, name: String, email: String, role: Role) -> Element {
    let mut app = use_context::<Signal<AppState>>();
    let mut screen = use_signal(|| Screen::Dashboard);
    let can_edit = role.can_edit_content();

    let logout = move |_| async move {
        let result = ApiClient.sign_out().await;
        gate.write().apply_sign_out(result);
    };

    rsx!(
        div { class: "min-h-screen flex",
            aside { class: "w-64 bg-base-200 flex flex-col",
                div { class: "p-4 brand-bg",
                    p { class: "text-lg font-bold", "BackOffice" }
                    p { class: "text-sm", "{name}" }
                    p { class: "text-xs opacity-80", "{email} · {role}" }
                }
                ul { class: "menu w-full grow",
                    for item in Screen::ALL.into_iter().filter(|item| item.visible_to(role)) {
                        li { key: "{item.label()}",
                            button {
                                class: if screen() == item { "menu-active" } else { "" },
                                onclick: move |_| screen.set(item),
                                {item.icon()}
                                "{item.label()}"
                            }
                        }
                    }
                }
                ul { class: "menu w-full",
                    li {
                        button { onclick: move |_| app.write().go_home(),
                            Icon { width: 16, height: 16, icon: FaStore }
                            "Volver a la tienda"
                        }
                    }
                    li {
                        button { onclick: logout,
                            Icon { width: 16, height: 16, icon: FaRightFromBracket }
                            "Cerrar sesión"
                        }
                    }
                }
            }
            main { class: "grow p-6 overflow-x-auto",
                h1 { class: "text-2xl font-bold mb-4", "{screen().label()}" }
                {match screen() {
                    Screen::Dashboard => rsx!(DashboardScreen {}),
                    Screen::Offers => rsx!(OffersScreen { can_edit }),
                    Screen::Events => rsx!(EventsScreen { can_edit }),
                    Screen::Banners => rsx!(BannersScreen { can_edit }),
                    Screen::Benefits => rsx!(BenefitsScreen { can_edit }),
                    Screen::Users => rsx!(UsersScreen {}),
                    Screen::Access => rsx!(AccessScreen {}),
                    Screen::WebConfig => rsx!(WebConfigScreen { can_edit }),
                }}
            }
        }
    )
}

async fn load<D: Draft>(mut list: Signal<ListController<D>>) {
    let query = list.write().begin_load();
    let result = ListController::<D>::fetch(&ApiClient, query).await;
    list.write().apply_loaded(result);
}

async fn submit<D: Draft>(mut list: Signal<ListController<D>>) {
    let Some(submission) = list.write().prepare_submit() else {
        return;
    };

    let result = submission.send(&ApiClient).await;
    list.write().apply_submitted(&submission, result);
}

async fn remove<D: Draft>(mut list: Signal<ListController<D>>, id: <D::Record as Record>::Id) {
    if !confirm(D::TEXTS.confirm_delete).await {
        return;
    }

    let result = ListController::<D>::delete(&ApiClient, &id).await;
    list.write().apply_removed(&id, result);
}

async fn upload<D: Draft>(mut list: Signal<ListController<D>>, file_name: String, bytes: Vec<u8>) {
    let result = ListController::<D>::upload(&ApiClient, &file_name, bytes).await;
    list.write().apply_uploaded(result);
}

/// Load spinner or error of a list, `None` once the rows are available
fn load_state_view(state: &LoadState) -> Option<Element> {
    match state {
        LoadState::Idle | LoadState::Loading => Some(rsx!(
            div { class: "flex justify-center p-8",
                span { class: "loading loading-spinner loading-md" }
            }
        )),
        LoadState::Errored(message) => Some(rsx!(
            div { role: "alert", class: "alert alert-error", "{message}" }
        )),
        LoadState::Loaded => None,
    }
}

/// Status banner of the screen plus the read-only notice for viewers
#[component]
fn ScreenNotice(status: Option<StatusMessage>, can_edit: bool) -> Element {
    rsx!(
        StatusBanner { status }
        if !can_edit {
            div { class: "alert alert-info my-2",
                "Tu rol solo permite visualizar este contenido."
            }
        }
    )
}
