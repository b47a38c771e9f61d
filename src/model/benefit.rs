use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BenefitDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub is_active: bool,
}

/// Fields accepted when inserting or updating a benefit
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BenefitInputDto {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub is_active: bool,
}
