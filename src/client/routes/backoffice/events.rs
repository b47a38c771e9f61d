use dioxus::prelude::*;

use super::{load, load_state_view, remove, submit, upload, ScreenNotice};
use crate::client::components::{FormActions, ImageInput, TextArea, TextField};
use miaclub::{
    model::event::EventDto,
    state::{content::EventDraft, list::ListController},
};

fn when(event: &EventDto) -> String {
    match event.event_time {
        Some(time) => format!("{} {}", event.event_date, time.format("%H:%M")),
        None => event.event_date.to_string(),
    }
}

#[component]
pub fn EventsScreen(can_edit: bool) -> Element {
    let mut list = use_signal(ListController::<EventDraft>::default);

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
                    label: "Ubicación",
                    value: draft.location.clone(),
                    on_input: move |value| list.write().draft.location = value,
                }
                div { class: "md:col-span-2",
                    TextArea {
                        label: "Descripción",
                        value: draft.description.clone(),
                        on_input: move |value| list.write().draft.description = value,
                    }
                }
                TextField {
                    label: "Fecha",
                    kind: "date",
                    value: draft.event_date.clone(),
                    on_input: move |value| list.write().draft.event_date = value,
                }
                TextField {
                    label: "Hora",
                    kind: "time",
                    value: draft.event_time.clone(),
                    on_input: move |value| list.write().draft.event_time = value,
                }
                ImageInput {
                    label: "Imagen",
                    url: draft.image_url.clone(),
                    on_file: move |(name, bytes)| {
                        spawn(upload(list, name, bytes));
                    },
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
                        th { "Fecha" }
                        th { "Ubicación" }
                        if can_edit {
                            th { "Acciones" }
                        }
                    }
                }
                tbody {
                    for event in state.items().iter().cloned() {
                        tr { key: "{event.id}",
                            td { "{event.title}" }
                            td { "{when(&event)}" }
                            td { "{event.location}" }
                            if can_edit {
                                td { class: "flex gap-2",
                                    button {
                                        class: "btn btn-sm btn-outline",
                                        onclick: {
                                            let event = event.clone();
                                            move |_| list.write().begin_edit(&event)
                                        },
                                        "Editar"
                                    }
                                    button {
                                        class: "btn btn-sm btn-error",
                                        onclick: move |_| remove(list, event.id),
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
