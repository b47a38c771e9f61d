use dioxus::prelude::*;

use crate::client::{
    components::{storefront::Header, Page, StatusBanner},
    util::sleep,
};
use miaclub::state::{
    app::AppState,
    registration::{Field, RegistrationForm},
    REGISTRATION_DELAY,
};

#[component]
pub fn Registration() -> Element {
    let mut app = use_context::<Signal<AppState>>();
    let mut form = use_signal(RegistrationForm::default);

    let submit = move |evt: FormEvent| async move {
        evt.prevent_default();

        let Some(profile) = form.write().start() else {
            return;
        };

        sleep(REGISTRATION_DELAY).await;
        form.write().finish();
        app.write().registration_success(profile);
    };

    let state = form.read();
    let loading = state.is_loading();

    rsx!(
        Header {}
        Page { class: "flex justify-center p-4",
            div { class: "card bg-base-100 shadow-md w-full max-w-3xl",
                form { class: "card-body", onsubmit: submit,
                    h1 { class: "card-title text-2xl", "Crea tu cuenta" }
                    StatusBanner { status: state.status().cloned() }
                    div { class: "grid gap-3 sm:grid-cols-2",
                        FormInput { form, field: Field::FirstName, label: "Nombre", value: state.first_name.clone() }
                        FormInput { form, field: Field::LastName, label: "Apellido", value: state.last_name.clone() }
                        FormInput { form, field: Field::Email, label: "Email", kind: "email", value: state.email.clone() }
                        FormInput { form, field: Field::Phone, label: "Teléfono", kind: "tel", value: state.phone.clone() }
                        FormInput { form, field: Field::Password, label: "Contraseña", kind: "password", value: state.password.clone() }
                        FormInput { form, field: Field::ConfirmPassword, label: "Confirmar contraseña", kind: "password", value: state.confirm_password.clone() }
                        FormInput { form, field: Field::Address, label: "Dirección", value: state.address.clone() }
                        FormInput { form, field: Field::BirthDate, label: "Fecha de nacimiento", kind: "date", value: state.birth_date.clone() }
                        FormInput { form, field: Field::Dni, label: "DNI", value: state.dni.clone() }
                    }
                    div { class: "divider", "Datos de empresa (opcional)" }
                    div { class: "grid gap-3 sm:grid-cols-2",
                        FormInput { form, field: Field::Ruc, label: "RUC", value: state.ruc.clone() }
                        FormInput { form, field: Field::CompanyName, label: "Razón Social", value: state.company_name.clone() }
                    }
                    div { class: "card-actions justify-between items-center mt-4",
                        button {
                            r#type: "button",
                            class: "link",
                            onclick: move |_| app.write().navigate_to_login(),
                            "¿Ya tienes cuenta? Inicia sesión"
                        }
                        button { class: "btn btn-brand", r#type: "submit", disabled: loading,
                            if loading {
                                span { class: "loading loading-spinner loading-sm" }
                            }
                            "Registrarse"
                        }
                    }
                }
            }
        }
    )
}

/// Labelled input writing to one registration field, with its inline error
#[component]
fn FormInput(
    mut form: Signal<RegistrationForm>,
    field: Field,
    label: &'static str,
    kind: Option<&'static str>,
    value: String,
) -> Element {
    let error = form.read().errors().get(field);
    let input_class = if error.is_some() {
        "input input-bordered input-error w-full"
    } else {
        "input input-bordered w-full"
    };

    rsx!(
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            input {
                r#type: kind.unwrap_or("text"),
                class: input_class,
                value: "{value}",
                oninput: move |evt| form.write().set(field, evt.value()),
            }
            if let Some(error) = error {
                p { class: "text-error text-sm", "{error}" }
            }
        }
    )
}
