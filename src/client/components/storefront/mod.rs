mod catalog;
mod footer;
mod forgot_password_modal;
mod header;
mod hero;
mod login_modal;
mod profile_modal;

pub use catalog::{CatalogCard, CatalogGrid};
pub use footer::Footer;
pub use forgot_password_modal::ForgotPasswordModal;
pub use header::Header;
pub use hero::Hero;
pub use login_modal::LoginModal;
pub use profile_modal::ProfileModal;
