use dioxus::prelude::*;
use dioxus_logger::tracing;

/// File picker that hands the chosen image's name and bytes to `on_file`, with a preview of `url`
#[component]
pub fn ImageInput(
    label: &'static str,
    url: String,
    uploading: Option<bool>,
    on_file: EventHandler<(String, Vec<u8>)>,
) -> Element {
    let uploading = uploading.unwrap_or_default();

    rsx!(
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            input {
                r#type: "file",
                accept: ".png,.jpg,.jpeg,.gif,.webp",
                class: "file-input file-input-bordered w-full",
                disabled: uploading,
                onchange: move |evt: FormEvent| async move {
                    let Some(file) = evt.files().into_iter().next() else {
                        return;
                    };

                    let name = file.name();
                    match file.read_bytes().await {
                        Ok(bytes) => on_file.call((name, bytes.to_vec())),
                        Err(err) => tracing::error!("Failed to read {}: {}", name, err),
                    }
                },
            }
            if uploading {
                span { class: "loading loading-spinner loading-sm" }
            }
            if !url.is_empty() {
                img { class: "mt-2 h-24 w-auto rounded object-cover", src: "{url}", alt: "{label}" }
            }
        }
    )
}
