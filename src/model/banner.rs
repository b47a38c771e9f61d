use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BannerDto {
    pub id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub link_url: Option<String>,
    pub image_url: Option<String>,
    /// Position in the storefront carousel, ascending
    pub order_index: i32,
    pub is_active: bool,
}

/// Fields accepted when inserting or updating a banner
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BannerInputDto {
    pub title: String,
    pub subtitle: Option<String>,
    pub link_url: Option<String>,
    pub image_url: Option<String>,
    pub order_index: i32,
    pub is_active: bool,
}

/// `true` for absolute `http` or `https` links, the only ones a banner may point to
pub fn is_web_link(url: &str) -> bool {
    let url = url.trim().to_ascii_lowercase();

    ["http://", "https://"]
        .iter()
        .any(|scheme| url.len() > scheme.len() && url.starts_with(scheme))
}
