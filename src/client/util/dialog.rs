use dioxus::document;
use dioxus_logger::tracing;

/// Blocking browser confirmation prompt, `false` when it cannot be shown
pub async fn confirm(message: &str) -> bool {
    let script = format!(
        "return window.confirm({});",
        serde_json::Value::from(message)
    );

    match document::eval(&script).join::<bool>().await {
        Ok(confirmed) => confirmed,
        Err(err) => {
            tracing::error!("Failed to show confirmation prompt: {:?}", err);
            false
        }
    }
}
