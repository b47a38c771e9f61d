use dioxus::prelude::*;

use super::{load, load_state_view, remove, submit, upload, ScreenNotice};
use crate::client::components::{FormActions, ImageInput, TextArea, TextField, Toggle};
use miaclub::state::{content::BenefitDraft, list::ListController};

#[component]
pub fn BenefitsScreen(can_edit: bool) -> Element {
    let mut list = use_signal(ListController::<BenefitDraft>::default);

    use_future(move || load(list));

    let state = list.read();
    let draft = &state.draft;
    let editing = state.is_editing();

    rsx!(
        ScreenNotice { status: state.status().cloned(), can_edit }
        if can_edit {
            form {
                class: "card bg-base-100 shadow-sm p-4 mb-6 flex flex-col gap-2",
                onsubmit: move |evt: FormEvent| async move {
                    evt.prevent_default();
                    submit(list).await;
                },
                TextField {
                    label: "Título",
                    value: draft.title.clone(),
                    on_input: move |value| list.write().draft.title = value,
                }
                TextArea {
                    label: "Descripción",
                    value: draft.description.clone(),
                    on_input: move |value| list.write().draft.description = value,
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
                FormActions { editing, on_cancel: move |_| list.write().cancel_edit() }
            }
        }
        if let Some(view) = load_state_view(state.load_state()) {
            {view}
        } else {
            div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                for benefit in state.items().iter().cloned() {
                    div { key: "{benefit.id}", class: "card bg-base-100 shadow-sm",
                        if let Some(url) = &benefit.image_url {
                            figure {
                                img { class: "h-32 w-full object-cover", src: "{url}", alt: "{benefit.title}" }
                            }
                        }
                        div { class: "card-body",
                            h3 { class: "card-title",
                                "{benefit.title}"
                                if !benefit.is_active {
                                    span { class: "badge badge-ghost", "Inactivo" }
                                }
                            }
                            p { class: "text-sm opacity-80", "{benefit.description}" }
                            if can_edit {
                                div { class: "card-actions justify-end",
                                    button {
                                        class: "btn btn-sm btn-outline",
                                        onclick: {
                                            let benefit = benefit.clone();
                                            move |_| list.write().begin_edit(&benefit)
                                        },
                                        "Editar"
                                    }
                                    button {
                                        class: "btn btn-sm btn-error",
                                        onclick: move |_| remove(list, benefit.id),
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
