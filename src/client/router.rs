use dioxus::prelude::*;

use crate::client::routes::{Home, NotFound};

/// The storefront and backoffice share one page; views switch on application state
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
