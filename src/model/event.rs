use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub event_date: NaiveDate,
    pub event_time: Option<NaiveTime>,
    pub location: String,
    pub image_url: Option<String>,
}

/// Fields accepted when inserting or updating an event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EventInputDto {
    pub title: String,
    pub description: String,
    pub event_date: NaiveDate,
    pub event_time: Option<NaiveTime>,
    pub location: String,
    pub image_url: Option<String>,
}
