use dioxus::prelude::*;

use super::{load, load_state_view, remove, submit, upload, ScreenNotice};
use crate::client::components::{FormActions, ImageInput, TextArea, TextField, Toggle};
use miaclub::state::{content::OfferDraft, list::ListController};

#[component]
pub fn OffersScreen(can_edit: bool) -> Element {
    let mut list = use_signal(ListController::<OfferDraft>::default);

    use_future(move || load(list));

    let state = list.read();
    let draft = &state.draft;
    let editing = state.is_editing();

    rsx!(
        ScreenNotice { status: state.status().cloned(), can_edit }
        if can_edit {
            form {
                class: "card bg-base-100 shadow-sm p-4 mb-6 grid gap-2 md:grid-cols-2",
                onsubmit: move |evt: FormEvent| async move {
                    evt.prevent_default();
                    submit(list).await;
                },
                TextField {
                    label: "Título",
                    value: draft.title.clone(),
                    on_input: move |value| list.write().draft.title = value,
                }
                TextField {
                    label: "Descuento",
                    value: draft.discount.clone(),
                    on_input: move |value| list.write().draft.discount = value,
                }
                div { class: "md:col-span-2",
                    TextArea {
                        label: "Descripción",
                        value: draft.description.clone(),
                        on_input: move |value| list.write().draft.description = value,
                    }
                }
                TextField {
                    label: "Fecha de inicio",
                    kind: "date",
                    value: draft.start_date.clone(),
                    on_input: move |value| list.write().draft.start_date = value,
                }
                TextField {
                    label: "Fecha de fin",
                    kind: "date",
                    value: draft.end_date.clone(),
                    on_input: move |value| list.write().draft.end_date = value,
                }
                ImageInput {
                    label: "Imagen",
                    url: draft.image_url.clone(),
                    on_file: move |(name, bytes)| {
                        spawn(upload(list, name, bytes));
                    },
                }
                Toggle {
                    label: "Activa",
                    checked: draft.is_active,
                    on_change: move |value| list.write().draft.is_active = value,
                }
                div { class: "md:col-span-2",
                    FormActions { editing, on_cancel: move |_| list.write().cancel_edit() }
                }
            }
        }
        if let Some(view) = load_state_view(state.load_state()) {
            {view}
        } else {
            table { class: "table",
                thead {
                    tr {
                        th { "Título" }
                        th { "Descuento" }
                        th { "Vigencia" }
                        th { "Estado" }
                        if can_edit {
                            th { "Acciones" }
                        }
                    }
                }
                tbody {
                    for offer in state.items().iter().cloned() {
                        tr { key: "{offer.id}",
                            td { "{offer.title}" }
                            td { "{offer.discount}" }
                            td { "{offer.start_date} - {offer.end_date}" }
                            td {
                                if offer.is_active {
                                    span { class: "badge badge-success", "Activa" }
                                } else {
                                    span { class: "badge badge-ghost", "Inactiva" }
                                }
                            }
                            if can_edit {
                                td { class: "flex gap-2",
                                    button {
                                        class: "btn btn-sm btn-outline",
                                        onclick: {
                                            let offer = offer.clone();
                                            move |_| list.write().begin_edit(&offer)
                                        },
                                        "Editar"
                                    }
                                    button {
                                        class: "btn btn-sm btn-error",
                                        onclick: move |_| remove(list, offer.id),
                                        "Eliminar"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
