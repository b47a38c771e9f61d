use dioxus::prelude::*;

use super::{load, load_state_view, remove, submit, upload, ScreenNotice};
use crate::client::components::{FormActions, ImageInput, TextField, Toggle};
use miaclub::state::{content::BannerDraft, list::ListController};

#[component]
pub fn BannersScreen(can_edit: bool) -> Element {
    let mut list = use_signal(ListController::<BannerDraft>::default);

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
                    label: "Subtítulo",
                    value: draft.subtitle.clone(),
                    on_input: move |value| list.write().draft.subtitle = value,
                }
                TextField {
                    label: "Enlace",
                    kind: "url",
                    value: draft.link_url.clone(),
                    on_input: move |value| list.write().draft.link_url = value,
                }
                TextField {
                    label: "Orden",
                    kind: "number",
                    value: draft.order_index.clone(),
                    on_input: move |value| list.write().draft.order_index = value,
                }
                ImageInput {
                    label: "Imagen",
                    url: draft.image_url.clone(),
                    on_file: move |(name, bytes)| {
                        spawn(upload(list, name, bytes));
                    },
                }
                Toggle {
                    label: "Activo",
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
                        th { "Orden" }
                        th { "Imagen" }
                        th { "Título" }
                        th { "Estado" }
                        if can_edit {
                            th { "Acciones" }
                        }
                    }
                }
                tbody {
                    for banner in state.items().iter().cloned() {
                        tr { key: "{banner.id}",
                            td { "{banner.order_index}" }
                            td {
                                if let Some(url) = &banner.image_url {
                                    img { class: "h-12 w-20 object-cover rounded", src: "{url}", alt: "{banner.title}" }
                                }
                            }
                            td {
                                p { class: "font-semibold", "{banner.title}" }
                                if let Some(subtitle) = &banner.subtitle {
                                    p { class: "text-xs opacity-70", "{subtitle}" }
                                }
                            }
                            td {
                                if banner.is_active {
                                    span { class: "badge badge-success", "Activo" }
                                } else {
                                    span { class: "badge badge-ghost", "Inactivo" }
                                }
                            }
                            if can_edit {
                                td { class: "flex gap-2",
                                    button {
                                        class: "btn btn-sm btn-outline",
                                        onclick: {
                                            let banner = banner.clone();
                                            move |_| list.write().begin_edit(&banner)
                                        },
                                        "Editar"
                                    }
                                    button {
                                        class: "btn btn-sm btn-error",
                                        onclick: move |_| remove(list, banner.id),
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
