pub mod form;
pub mod image_input;
pub mod modal;
pub mod page;
pub mod status_banner;
pub mod storefront;

pub use form::{FormActions, TextArea, TextField, Toggle};
pub use image_input::ImageInput;
pub use modal::Modal;
pub use page::Page;
pub use status_banner::StatusBanner;
