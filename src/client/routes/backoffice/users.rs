use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;

use super::{load, load_state_view, remove, submit, ScreenNotice};
use crate::client::components::{FormActions, TextField};
use miaclub::{
    model::backoffice_user::{BackofficeUserDto, Role},
    state::{
        collection::{ListOrder, ListQuery},
        list::ListController,
        users::UserDraft,
    },
};

fn created(user: &BackofficeUserDto) -> String {
    user.created_at.format("%d/%m/%Y").to_string()
}

#[component]
pub fn RoleSelect(value: Role, on_change: EventHandler<Role>) -> Element {
    rsx!(
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", "Rol" }
            select {
                class: "select select-bordered w-full",
                value: "{value}",
                onchange: move |evt| {
                    if let Ok(role) = evt.value().parse::<Role>() {
                        on_change.call(role);
                    }
                },
                for role in Role::ALL {
                    option { key: "{role}", value: "{role}", selected: role == value, "{role}" }
                }
            }
        }
    )
}

#[component]
pub fn UsersScreen() -> Element {
    let mut list = use_signal(|| {
        ListController::<UserDraft>::new(ListQuery::ordered_by(ListOrder::Email))
    });
    let mut search = use_signal(String::new);

    use_future(move || load(list));

    let state = list.read();
    let draft = &state.draft;
    let editing = state.is_editing();

    rsx!(
        ScreenNotice { status: state.status().cloned(), can_edit: true }
        form {
            class: "card bg-base-100 shadow-sm p-4 mb-6 grid gap-2 md:grid-cols-3",
            onsubmit: move |evt: FormEvent| async move {
                evt.prevent_default();
                submit(list).await;
            },
            TextField {
                label: "Email",
                kind: "email",
                value: draft.email.clone(),
                disabled: editing,
                on_input: move |value| list.write().draft.email = value,
            }
            if !editing {
                TextField {
                    label: "Contraseña",
                    kind: "password",
                    value: draft.password.clone(),
                    on_input: move |value| list.write().draft.password = value,
                }
            }
            RoleSelect {
                value: draft.role,
                on_change: move |role| list.write().draft.role = role,
            }
            div { class: "md:col-span-3",
                FormActions { editing, on_cancel: move |_| list.write().cancel_edit() }
            }
        }
        label { class: "input input-bordered flex items-center gap-2 mb-4 max-w-sm",
            Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
            input {
                r#type: "search",
                class: "grow",
                placeholder: "Buscar por email...",
                value: "{search}",
                oninput: move |evt| search.set(evt.value()),
            }
        }
        if let Some(view) = load_state_view(state.load_state()) {
            {view}
        } else {
            table { class: "table",
                thead {
                    tr {
                        th { "Email" }
                        th { "Rol" }
                        th { "Estado" }
                        th { "Creado" }
                        th { "Acciones" }
                    }
                }
                tbody {
                    for user in state.visible(&search.read()).into_iter().cloned() {
                        tr { key: "{user.id}",
                            td { "{user.email}" }
                            td { span { class: "badge badge-outline", "{user.role}" } }
                            td {
                                if user.is_active {
                                    span { class: "badge badge-success", "Activo" }
                                } else {
                                    span { class: "badge badge-ghost", "Inactivo" }
                                }
                            }
                            td { "{created(&user)}" }
                            td { class: "flex gap-2",
                                button {
                                    class: "btn btn-sm btn-outline",
                                    onclick: {
                                        let user = user.clone();
                                        move |_| list.write().begin_edit(&user)
                                    },
                                    "Editar"
                                }
                                button {
                                    class: "btn btn-sm btn-error",
                                    onclick: move |_| remove(list, user.id),
                                    "Eliminar"
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
