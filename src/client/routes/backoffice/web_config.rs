use dioxus::prelude::*;

use super::{load_state_view, ScreenNotice};
use crate::client::{
    components::{ImageInput, TextField},
    util::ApiClient,
};
use miaclub::state::{app::AppState, collection::CollectionClient, web_config::WebConfigForm};

#[component]
pub fn WebConfigScreen(can_edit: bool) -> Element {
    let mut app = use_context::<Signal<AppState>>();
    let mut form = use_signal(WebConfigForm::default);

    use_future(move || async move {
        let result = ApiClient.select_config().await;
        form.write().apply_loaded(result);
    });

    let save = move |evt: FormEvent| async move {
        evt.prevent_default();

        let entries = form.write().begin_save();
        let result = ApiClient.upsert_config(&entries).await;

        if form.write().apply_saved(result) {
            app.write().notify_config_updated();
        }
    };

    let upload_logo = move |(name, bytes): (String, Vec<u8>)| {
        spawn(async move {
            form.write().begin_upload();
            let result = WebConfigForm::send_logo(&ApiClient, &name, bytes).await;
            form.write().apply_logo(result);
        });
    };

    let state = form.read();
    if let Some(view) = load_state_view(state.load_state()) {
        return view;
    }
    let config = &state.config;

    rsx!(
        ScreenNotice { status: state.status().cloned(), can_edit }
        form { class: "card bg-base-100 shadow-sm p-4 grid gap-2 md:grid-cols-2", onsubmit: save,
            TextField {
                label: "Título del sitio",
                value: config.site_title.clone(),
                disabled: !can_edit,
                on_input: move |value| form.write().config.site_title = value,
            }
            TextField {
                label: "Texto alternativo del logo",
                value: config.logo.alt_text.clone(),
                disabled: !can_edit,
                on_input: move |value| form.write().config.logo.alt_text = value,
            }
            TextField {
                label: "Color primario",
                kind: "color",
                value: config.primary_color.clone(),
                disabled: !can_edit,
                on_input: move |value| form.write().config.primary_color = value,
            }
            TextField {
                label: "Color secundario",
                kind: "color",
                value: config.secondary_color.clone(),
                disabled: !can_edit,
                on_input: move |value| form.write().config.secondary_color = value,
            }
            if can_edit {
                ImageInput {
                    label: "Logo",
                    url: config.logo.url.clone(),
                    uploading: state.is_uploading(),
                    on_file: upload_logo,
                }
                div { class: "md:col-span-2",
                    button { class: "btn btn-brand", r#type: "submit", "Guardar configuración" }
                }
            } else if !config.logo.url.is_empty() {
                img { class: "h-16 w-auto", src: "{config.logo.url}", alt: "{config.logo.alt_text}" }
            }
        }
    )
}
