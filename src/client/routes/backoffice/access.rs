use dioxus::prelude::*;

use super::{load, load_state_view, remove, submit, users::RoleSelect, ScreenNotice};
use crate::client::components::{FormActions, Toggle};
use miaclub::state::{
    collection::{ListOrder, ListQuery},
    list::ListController,
    users::{AccessDraft, NO_USER_SELECTED},
};

/// Role and active flag of existing backoffice accounts
#[component]
pub fn AccessScreen() -> Element {
    let mut list = use_signal(|| {
        ListController::<AccessDraft>::new(ListQuery::ordered_by(ListOrder::CreatedAt))
    });

    use_future(move || load(list));

    let state = list.read();
    let draft = &state.draft;
    let selected = state
        .editing()
        .and_then(|id| state.items().iter().find(|user| user.id == *id))
        .map(|user| user.email.clone());

    rsx!(
        ScreenNotice { status: state.status().cloned(), can_edit: true }
        form {
            class: "card bg-base-100 shadow-sm p-4 mb-6 flex flex-col gap-2",
            onsubmit: move |evt: FormEvent| async move {
                evt.prevent_default();
                submit(list).await;
            },
            if let Some(email) = &selected {
                p { class: "font-semibold", "{email}" }
                RoleSelect {
                    value: draft.role,
                    on_change: move |role| list.write().draft.role = role,
                }
                Toggle {
                    label: "Acceso activo",
                    checked: draft.is_active,
                    on_change: move |value| list.write().draft.is_active = value,
                }
                FormActions { editing: true, on_cancel: move |_| list.write().cancel_edit() }
            } else {
                p { class: "opacity-70", "{NO_USER_SELECTED}" }
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
                        th { "Acceso" }
                        th { "Acciones" }
                    }
                }
                tbody {
                    for user in state.items().iter().cloned() {
                        tr { key: "{user.id}",
                            td { "{user.email}" }
                            td { "{user.role}" }
                            td {
                                if user.is_active {
                                    span { class: "badge badge-success", "Activo" }
                                } else {
                                    span { class: "badge badge-error", "Revocado" }
                                }
                            }
                            td { class: "flex gap-2",
                                button {
                                    class: "btn btn-sm btn-outline",
                                    onclick: {
                                        let user = user.clone();
                                        move |_| list.write().begin_edit(&user)
                                    },
                                    "Modificar"
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
