pub mod backoffice;
pub mod home;
pub mod member;
pub mod not_found;
pub mod registration;

pub use backoffice::Backoffice;
pub use home::Home;
pub use member::MemberHome;
pub use not_found::NotFound;
pub use registration::Registration;
