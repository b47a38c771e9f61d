use dioxus::document;
use dioxus_logger::tracing;

use miaclub::state::session::RememberStore;

/// [`RememberStore`] backed by the browser's `localStorage`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalRememberStore;

/// JSON string literal, safe to splice into a script
fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

async fn run(script: String) {
    if let Err(err) = document::eval(&script).join::<serde_json::Value>().await {
        tracing::warn!("Failed to access local storage: {:?}", err);
    }
}

impl RememberStore for LocalRememberStore {
    async fn get(&self, key: &str) -> Option<String> {
        let script = format!("return window.localStorage.getItem({});", js_string(key));

        match document::eval(&script).join::<Option<String>>().await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("Failed to read local storage: {:?}", err);
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str) {
        run(format!(
            "window.localStorage.setItem({}, {}); return null;",
            js_string(key),
            js_string(value)
        ))
        .await;
    }

    async fn remove(&self, key: &str) {
        run(format!(
            "window.localStorage.removeItem({}); return null;",
            js_string(key)
        ))
        .await;
    }
}
