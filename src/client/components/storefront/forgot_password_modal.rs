use dioxus::prelude::*;

use crate::client::{
    components::{Modal, StatusBanner},
    util::sleep,
};
use miaclub::state::{app::AppState, session::MemberRecovery, RECOVERY_DELAY};

#[component]
pub fn ForgotPasswordModal() -> Element {
    let mut app = use_context::<Signal<AppState>>();
    let mut form = use_signal(MemberRecovery::default);

    let submit = move |evt: FormEvent| async move {
        evt.prevent_default();

        if !form.write().start() {
            return;
        }

        sleep(RECOVERY_DELAY).await;
        form.write().finish();
    };

    let state = form.read();
    let loading = state.is_loading();

    rsx!(
        Modal {
            title: "Recuperar contraseña",
            on_close: move |_| app.write().go_home(),
            form { class: "flex flex-col gap-3", onsubmit: submit,
                p { class: "text-sm opacity-80",
                    "Introduce tu email y te enviaremos un enlace para restablecer tu contraseña."
                }
                StatusBanner { status: state.status().cloned() }
                input {
                    r#type: "email",
                    class: "input input-bordered w-full",
                    placeholder: "Email",
                    value: "{state.email}",
                    oninput: move |evt| form.write().email = evt.value(),
                }
                button { class: "btn btn-brand", r#type: "submit", disabled: loading,
                    if loading {
                        span { class: "loading loading-spinner loading-sm" }
                    }
                    "Enviar enlace"
                }
                button {
                    r#type: "button",
                    class: "link text-sm",
                    onclick: move |_| {
                        let mut state = app.write();
                        state.go_home();
                        state.navigate_to_login();
                    },
                    "Volver a iniciar sesión"
                }
            }
        }
    )
}
