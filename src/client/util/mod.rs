pub mod api;
pub mod dialog;
pub mod remember;
pub mod timer;

pub use api::ApiClient;
pub use dialog::confirm;
pub use remember::LocalRememberStore;
pub use timer::sleep;
