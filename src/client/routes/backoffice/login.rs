use dioxus::prelude::*;

use crate::client::{components::StatusBanner, util::ApiClient};
use miaclub::state::{
    app::AppState,
    session::{recover_backoffice_password, Admission, BackofficeGate},
    StatusMessage,
};

#[component]
pub fn BackofficeLogin(mut gate: Signal<BackofficeGate>) -> Element {
    let mut app = use_context::<Signal<AppState>>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut recovering = use_signal(|| false);
    let mut recovery_status = use_signal(|| None::<StatusMessage>);

    let login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);

        gate.write().clear_message();

        let admission = Admission::sign_in(&ApiClient, &email(), &password()).await;
        gate.write().apply(admission);

        loading.set(false);
    };

    let recover = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);

        let status = recover_backoffice_password(&ApiClient, &email()).await;
        recovery_status.set(Some(status));

        loading.set(false);
    };

    let message = gate.read().message().map(StatusMessage::error);

    rsx!(
        div { class: "min-h-screen flex items-center justify-center bg-base-200 p-4",
            div { class: "card bg-base-100 shadow-md w-full max-w-sm",
                div { class: "card-body",
                    h1 { class: "card-title text-2xl", "BackOffice" }
                    if recovering() {
                        form { class: "flex flex-col gap-3", onsubmit: recover,
                            p { class: "text-sm opacity-80",
                                "Introduce tu email para recibir un enlace de recuperación."
                            }
                            StatusBanner { status: recovery_status() }
                            input {
                                r#type: "email",
                                class: "input input-bordered w-full",
                                placeholder: "Email",
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                            }
                            button { class: "btn btn-brand", r#type: "submit", disabled: loading(),
                                "Enviar enlace"
                            }
                            button {
                                r#type: "button",
                                class: "link text-sm",
                                onclick: move |_| {
                                    recovery_status.set(None);
                                    recovering.set(false);
                                },
                                "Volver"
                            }
                        }
                    } else {
                        form { class: "flex flex-col gap-3", onsubmit: login,
                            StatusBanner { status: message }
                            input {
                                r#type: "email",
                                class: "input input-bordered w-full",
                                placeholder: "Email",
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                            }
                            input {
                                r#type: "password",
                                class: "input input-bordered w-full",
                                placeholder: "Contraseña",
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                            }
                            button { class: "btn btn-brand", r#type: "submit", disabled: loading(),
                                if loading() {
                                    span { class: "loading loading-spinner loading-sm" }
                                }
                                "Iniciar sesión"
                            }
                            div { class: "flex justify-between text-sm",
                                button {
                                    r#type: "button",
                                    class: "link",
                                    onclick: move |_| {
                                        gate.write().clear_message();
                                        recovering.set(true);
                                    },
                                    "¿Olvidaste tu contraseña?"
                                }
                                button {
                                    r#type: "button",
                                    class: "link",
                                    onclick: move |_| app.write().go_home(),
                                    "Volver a la tienda"
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
