use dioxus::prelude::*;

#[component]
pub fn TextField(
    label: &'static str,
    value: String,
    kind: Option<&'static str>,
    disabled: Option<bool>,
    on_input: EventHandler<String>,
) -> Element {
    rsx!(
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            input {
                r#type: kind.unwrap_or("text"),
                class: "input input-bordered w-full",
                value: "{value}",
                disabled: disabled.unwrap_or_default(),
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    )
}

#[component]
pub fn TextArea(label: &'static str, value: String, on_input: EventHandler<String>) -> Element {
    rsx!(
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            textarea {
                class: "textarea textarea-bordered w-full",
                rows: 3,
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    )
}

#[component]
pub fn Toggle(label: &'static str, checked: bool, on_change: EventHandler<bool>) -> Element {
    rsx!(
        label { class: "label gap-2 cursor-pointer",
            input {
                r#type: "checkbox",
                class: "toggle toggle-sm",
                checked,
                onchange: move |evt| on_change.call(evt.checked()),
            }
            "{label}"
        }
    )
}

/// Submit button, plus cancel while editing an existing row
#[component]
pub fn FormActions(editing: bool, on_cancel: EventHandler<()>) -> Element {
    rsx!(
        div { class: "flex gap-2 mt-2",
            button { class: "btn btn-brand", r#type: "submit",
                if editing { "Actualizar" } else { "Añadir" }
            }
            if editing {
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancelar"
                }
            }
        }
    )
}
