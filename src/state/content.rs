//! Drafts for the storefront content collections.

use chrono::{NaiveDate, NaiveTime};

use crate::{
    model::{
        banner::{is_web_link, BannerDto, BannerInputDto},
        benefit::{BenefitDto, BenefitInputDto},
        event::{EventDto, EventInputDto},
        offer::{OfferDto, OfferInputDto},
    },
    state::{
        list::{Draft, ListTexts, MISSING_FIELDS},
        validation::non_empty,
    },
};

pub const INVALID_DATE: &str = "La fecha no es válida.";
pub const INVALID_TIME: &str = "La hora no es válida.";
pub const INVALID_ORDER: &str = "El orden debe ser un número entero.";
pub const INVALID_LINK: &str = "El enlace debe empezar por http:// o https://.";

pub const OFFER_TEXTS: ListTexts = ListTexts {
    load_error: "Error al cargar las ofertas",
    created: "Oferta añadida con éxito.",
    updated: "Oferta actualizada con éxito.",
    deleted: "Oferta eliminada con éxito.",
    save_error: "Error al guardar la oferta",
    delete_error: "Error al eliminar la oferta",
    confirm_delete: "¿Estás seguro de que quieres eliminar esta oferta?",
};

pub const EVENT_TEXTS: ListTexts = ListTexts {
    load_error: "Error al cargar los eventos",
    created: "Evento añadido con éxito.",
    updated: "Evento actualizado con éxito.",
    deleted: "Evento eliminado con éxito.",
    save_error: "Error al guardar el evento",
    delete_error: "Error al eliminar el evento",
    confirm_delete: "¿Estás seguro de que quieres eliminar este evento?",
};

pub const BANNER_TEXTS: ListTexts = ListTexts {
    load_error: "Error al cargar los banners",
    created: "Banner añadido con éxito.",
    updated: "Banner actualizado con éxito.",
    deleted: "Banner eliminado con éxito.",
    save_error: "Error al guardar el banner",
    delete_error: "Error al eliminar el banner",
    confirm_delete: "¿Estás seguro de que quieres eliminar este banner?",
};

pub const BENEFIT_TEXTS: ListTexts = ListTexts {
    load_error: "Error al cargar los beneficios",
    created: "Beneficio añadido con éxito.",
    updated: "Beneficio actualizado con éxito.",
    deleted: "Beneficio eliminado con éxito.",
    save_error: "Error al guardar el beneficio",
    delete_error: "Error al eliminar el beneficio",
    confirm_delete: "¿Estás seguro de que quieres eliminar este beneficio?",
};

fn required(values: &[&str]) -> Result<(), String> {
    if values.iter().any(|value| value.trim().is_empty()) {
        Err(MISSING_FIELDS.to_string())
    } else {
        Ok(())
    }
}

/// Parses an `<input type="date">` value
fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| INVALID_DATE.to_string())
}

/// Parses an `<input type="time">` value, with or without seconds
fn parse_time(value: &str) -> Result<NaiveTime, String> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| INVALID_TIME.to_string())
}

#[derive(Clone, Debug, PartialEq)]
pub struct OfferDraft {
    pub title: String,
    pub description: String,
    pub discount: String,
    pub image_url: String,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
}

impl Default for OfferDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            discount: String::new(),
            image_url: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            is_active: true,
        }
    }
}

impl Draft for OfferDraft {
    type Record = OfferDto;
    type Input = OfferInputDto;

    const TEXTS: &'static ListTexts = &OFFER_TEXTS;

    fn from_record(record: &OfferDto) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            discount: record.discount.clone(),
            image_url: record.image_url.clone().unwrap_or_default(),
            start_date: record.start_date.format("%Y-%m-%d").to_string(),
            end_date: record.end_date.format("%Y-%m-%d").to_string(),
            is_active: record.is_active,
        }
    }

    fn validate(&self, _editing: bool) -> Result<OfferInputDto, String> {
        required(&[
            self.title.as_str(),
            self.discount.as_str(),
            self.description.as_str(),
            self.start_date.as_str(),
            self.end_date.as_str(),
        ])?;

        Ok(OfferInputDto {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            discount: self.discount.trim().to_string(),
            image_url: non_empty(&self.image_url),
            start_date: parse_date(&self.start_date)?,
            end_date: parse_date(&self.end_date)?,
            is_active: self.is_active,
        })
    }

    fn set_image_url(&mut self, url: String) {
        self.image_url = url;
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub event_date: String,
    pub event_time: String,
    pub location: String,
    pub image_url: String,
}

impl Draft for EventDraft {
    type Record = EventDto;
    type Input = EventInputDto;

    const TEXTS: &'static ListTexts = &EVENT_TEXTS;

    fn from_record(record: &EventDto) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            event_date: record.event_date.format("%Y-%m-%d").to_string(),
            event_time: record
                .event_time
                .map(|time| time.format("%H:%M").to_string())
                .unwrap_or_default(),
            location: record.location.clone(),
            image_url: record.image_url.clone().unwrap_or_default(),
        }
    }

    fn validate(&self, _editing: bool) -> Result<EventInputDto, String> {
        required(&[
            self.title.as_str(),
            self.description.as_str(),
            self.event_date.as_str(),
            self.location.as_str(),
        ])?;

        let event_time = match non_empty(&self.event_time) {
            Some(time) => Some(parse_time(&time)?),
            None => None,
        };

        Ok(EventInputDto {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            event_date: parse_date(&self.event_date)?,
            event_time,
            location: self.location.trim().to_string(),
            image_url: non_empty(&self.image_url),
        })
    }

    fn set_image_url(&mut self, url: String) {
        self.image_url = url;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BannerDraft {
    pub title: String,
    pub subtitle: String,
    pub link_url: String,
    pub image_url: String,
    /// Raw text of the order input, parsed on submit
    pub order_index: String,
    pub is_active: bool,
}

impl Default for BannerDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            link_url: String::new(),
            image_url: String::new(),
            order_index: "0".to_string(),
            is_active: true,
        }
    }
}

impl Draft for BannerDraft {
    type Record = BannerDto;
    type Input = BannerInputDto;

    const TEXTS: &'static ListTexts = &BANNER_TEXTS;

    fn from_record(record: &BannerDto) -> Self {
        Self {
            title: record.title.clone(),
            subtitle: record.subtitle.clone().unwrap_or_default(),
            link_url: record.link_url.clone().unwrap_or_default(),
            image_url: record.image_url.clone().unwrap_or_default(),
            order_index: record.order_index.to_string(),
            is_active: record.is_active,
        }
    }

    fn validate(&self, _editing: bool) -> Result<BannerInputDto, String> {
        required(&[self.title.as_str()])?;

        let order_index = self
            .order_index
            .trim()
            .parse::<i32>()
            .map_err(|_| INVALID_ORDER.to_string())?;

        let link_url = non_empty(&self.link_url);
        if link_url.as_deref().is_some_and(|link| !is_web_link(link)) {
            return Err(INVALID_LINK.to_string());
        }

        Ok(BannerInputDto {
            title: self.title.trim().to_string(),
            subtitle: non_empty(&self.subtitle),
            link_url,
            image_url: non_empty(&self.image_url),
            order_index,
            is_active: self.is_active,
        })
    }

    fn set_image_url(&mut self, url: String) {
        self.image_url = url;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BenefitDraft {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub is_active: bool,
}

impl Default for BenefitDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            image_url: String::new(),
            is_active: true,
        }
    }
}

impl Draft for BenefitDraft {
    type Record = BenefitDto;
    type Input = BenefitInputDto;

    const TEXTS: &'static ListTexts = &BENEFIT_TEXTS;

    fn from_record(record: &BenefitDto) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            image_url: record.image_url.clone().unwrap_or_default(),
            is_active: record.is_active,
        }
    }

    fn validate(&self, _editing: bool) -> Result<BenefitInputDto, String> {
        required(&[self.title.as_str(), self.description.as_str()])?;

        Ok(BenefitInputDto {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image_url: non_empty(&self.image_url),
            is_active: self.is_active,
        })
    }

    fn set_image_url(&mut self, url: String) {
        self.image_url = url;
    }
}
