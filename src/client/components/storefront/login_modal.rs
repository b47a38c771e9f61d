use dioxus::prelude::*;

use crate::client::{
    components::{Modal, StatusBanner},
    util::{sleep, LocalRememberStore},
};
use miaclub::state::{app::AppState, session::MemberLogin, LOGIN_DELAY};

#[component]
pub fn LoginModal() -> Element {
    let mut app = use_context::<Signal<AppState>>();
    let mut form = use_signal(MemberLogin::default);

    // Pre-fill the remembered email when the modal opens
    use_future(move || async move {
        let remembered = MemberLogin::open(&LocalRememberStore).await;

        let mut login = form.write();
        if login.email.is_empty() && remembered.remember {
            login.email = remembered.email;
            login.remember = true;
        }
    });

    let submit = move |evt: FormEvent| async move {
        evt.prevent_default();

        let Some(attempt) = form.write().begin() else {
            return;
        };
        attempt.persist(&LocalRememberStore).await;

        sleep(LOGIN_DELAY).await;
        let profile = form.write().finish();

        if let Some(profile) = profile {
            app.write().login_success(profile);
        }
    };

    let state = form.read();
    let loading = state.is_loading();

    rsx!(
        Modal {
            title: "Iniciar sesión",
            on_close: move |_| app.write().go_home(),
            form { class: "flex flex-col gap-3", onsubmit: submit,
                StatusBanner { status: state.status().cloned() }
                input {
                    r#type: "email",
                    class: "input input-bordered w-full",
                    placeholder: "Email",
                    value: "{state.email}",
                    oninput: move |evt| form.write().email = evt.value(),
                }
                input {
                    r#type: "password",
                    class: "input input-bordered w-full",
                    placeholder: "Contraseña",
                    value: "{state.password}",
                    oninput: move |evt| form.write().password = evt.value(),
                }
                label { class: "label gap-2",
                    input {
                        r#type: "checkbox",
                        class: "checkbox checkbox-sm",
                        checked: state.remember,
                        onchange: move |evt| form.write().remember = evt.checked(),
                    }
                    "Recordarme"
                }
                button { class: "btn btn-brand", r#type: "submit", disabled: loading,
                    if loading {
                        span { class: "loading loading-spinner loading-sm" }
                    }
                    "Entrar"
                }
                div { class: "flex justify-between text-sm",
                    button {
                        r#type: "button",
                        class: "link",
                        onclick: move |_| app.write().open_forgot_password(),
                        "¿Olvidaste tu contraseña?"
                    }
                    button {
                        r#type: "button",
                        class: "link",
                        onclick: move |_| app.write().navigate_to_register(),
                        "Crear cuenta"
                    }
                }
            }
        }
    )
}
