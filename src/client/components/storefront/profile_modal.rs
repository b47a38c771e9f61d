use dioxus::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use crate::client::{
    components::{Modal, StatusBanner},
    util::sleep,
};
use miaclub::state::{
    app::AppState, profile::ProfileEditor, registration::Field, PROFILE_CLOSE_DELAY,
    PROFILE_SAVE_DELAY,
};

#[component]
pub fn ProfileModal(on_close: EventHandler<()>) -> Element {
    let mut app = use_context::<Signal<AppState>>();
    let mut editor = use_signal(|| {
        app.peek()
            .member
            .profile()
            .map(ProfileEditor::open)
            .unwrap_or_default()
    });

    let submit = move |evt: FormEvent| async move {
        evt.prevent_default();

        if !editor.write().start() {
            return;
        }
        sleep(PROFILE_SAVE_DELAY).await;

        let mut rng = StdRng::seed_from_u64(chrono::Utc::now().timestamp_millis() as u64);
        let saved = editor.write().finish_save(&mut rng);

        if let Some(profile) = saved {
            app.write().save_profile(profile);
            sleep(PROFILE_CLOSE_DELAY).await;
            on_close.call(());
        }
    };

    let state = editor.read();
    let draft = &state.draft;
    let saving = state.is_saving();

    rsx!(
        Modal { title: "Mi perfil", on_close: move |_| on_close.call(()),
            form { class: "grid gap-3 sm:grid-cols-2", onsubmit: submit,
                div { class: "sm:col-span-2",
                    StatusBanner { status: state.status().cloned() }
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Nombre",
                    value: "{draft.first_name}",
                    oninput: move |evt| editor.write().draft.first_name = evt.value(),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "Apellido",
                    value: "{draft.last_name}",
                    oninput: move |evt| editor.write().draft.last_name = evt.value(),
                }
                input {
                    r#type: "email",
                    class: "input input-bordered sm:col-span-2",
                    value: "{draft.email}",
                    disabled: true,
                }
                input {
                    r#type: "tel",
                    class: "input input-bordered",
                    placeholder: "Teléfono",
                    value: "{draft.phone}",
                    oninput: move |evt| editor.write().draft.phone = evt.value(),
                }
                input {
                    r#type: "date",
                    class: "input input-bordered",
                    value: "{state.birth_date_input()}",
                    oninput: move |evt| editor.write().set_birth_date(&evt.value()),
                }
                input {
                    class: "input input-bordered sm:col-span-2",
                    placeholder: "Dirección",
                    value: "{draft.address}",
                    oninput: move |evt| editor.write().draft.address = evt.value(),
                }
                DocumentInput {
                    editor,
                    field: Field::Dni,
                    placeholder: "DNI",
                    value: draft.dni.clone(),
                }
                DocumentInput {
                    editor,
                    field: Field::Ruc,
                    placeholder: "RUC (opcional)",
                    value: state.ruc.clone(),
                }
                div { class: "sm:col-span-2",
                    DocumentInput {
                        editor,
                        field: Field::CompanyName,
                        placeholder: "Razón Social (opcional)",
                        value: state.company_name.clone(),
                    }
                }
                button {
                    class: "btn btn-brand sm:col-span-2",
                    r#type: "submit",
                    disabled: saving,
                    if saving {
                        span { class: "loading loading-spinner loading-sm" }
                    }
                    "Guardar cambios"
                }
            }
        }
    )
}

#[component]
fn DocumentInput(
    mut editor: Signal<ProfileEditor>,
    field: Field,
    placeholder: &'static str,
    value: String,
) -> Element {
    let error = editor.read().errors().get(field);
    let input_class = if error.is_some() {
        "input input-bordered input-error w-full"
    } else {
        "input input-bordered w-full"
    };

    rsx!(
        div {
            input {
                class: input_class,
                placeholder,
                value: "{value}",
                oninput: move |evt| editor.write().set_document(field, evt.value()),
            }
            if let Some(error) = error {
                p { class: "text-error text-sm", "{error}" }
            }
        }
    )
}
