//! Offers, events, banners and benefits.
//!
//! Each collection has its own service with the same four operations. Inputs are checked for
//! blank required text fields before anything is written.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        banner::{is_web_link, BannerDto, BannerInputDto},
        benefit::{BenefitDto, BenefitInputDto},
        event::{EventDto, EventInputDto},
        offer::{OfferDto, OfferInputDto},
    },
    server::{
        data::{
            banner::BannerRepository, benefit::BenefitRepository, event::EventRepository,
            offer::OfferRepository,
        },
        error::{content::ContentError, Error},
        model::db::{BannerModel, BenefitModel, EventModel, OfferModel},
    },
};

/// Required text fields of a content input
pub trait ContentInput {
    fn validate(&self) -> Result<(), ContentError>;
}

fn require(field: &'static str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField(field));
    }

    Ok(())
}

fn not_found(collection: &'static str, id: i32) -> Error {
    Error::ContentError(ContentError::NotFound {
        collection,
        id: id.to_string(),
    })
}

impl ContentInput for OfferInputDto {
    fn validate(&self) -> Result<(), ContentError> {
        require("title", &self.title)?;
        require("discount", &self.discount)?;
        require("description", &self.description)
    }
}

impl ContentInput for EventInputDto {
    fn validate(&self) -> Result<(), ContentError> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        require("location", &self.location)
    }
}

impl ContentInput for BannerInputDto {
    fn validate(&self) -> Result<(), ContentError> {
        require("title", &self.title)?;

        match &self.link_url {
            Some(link) if !is_web_link(link) => Err(ContentError::InvalidLink(link.clone())),
            _ => Ok(()),
        }
    }
}

impl ContentInput for BenefitInputDto {
    fn validate(&self) -> Result<(), ContentError> {
        require("title", &self.title)?;
        require("description", &self.description)
    }
}

impl From<OfferModel> for OfferDto {
    fn from(offer: OfferModel) -> Self {
        Self {
            id: offer.id,
            title: offer.title,
            description: offer.description,
            discount: offer.discount,
            image_url: offer.image_url,
            start_date: offer.start_date,
            end_date: offer.end_date,
            is_active: offer.is_active,
        }
    }
}

impl From<EventModel> for EventDto {
    fn from(event: EventModel) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            event_date: event.event_date,
            event_time: event.event_time,
            location: event.location,
            image_url: event.image_url,
        }
    }
}

impl From<BannerModel> for BannerDto {
    fn from(banner: BannerModel) -> Self {
        Self {
            id: banner.id,
            title: banner.title,
            subtitle: banner.subtitle,
            link_url: banner.link_url,
            image_url: banner.image_url,
            order_index: banner.order_index,
            is_active: banner.is_active,
        }
    }
}

impl From<BenefitModel> for BenefitDto {
    fn from(benefit: BenefitModel) -> Self {
        Self {
            id: benefit.id,
            title: benefit.title,
            description: benefit.description,
            image_url: benefit.image_url,
            is_active: benefit.is_active,
        }
    }
}

pub struct OfferService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OfferService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<OfferDto>, Error> {
        let offers = OfferRepository::new(self.db).get_all().await?;

        Ok(offers.into_iter().map(OfferDto::from).collect())
    }

    pub async fn create(&self, input: OfferInputDto) -> Result<OfferDto, Error> {
        input.validate()?;

        Ok(OfferRepository::new(self.db).create(input).await?.into())
    }

    pub async fn update(&self, id: i32, input: OfferInputDto) -> Result<OfferDto, Error> {
        input.validate()?;

        OfferRepository::new(self.db)
            .update(id, input)
            .await?
            .map(OfferDto::from)
            .ok_or_else(|| not_found("offers", id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = OfferRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(not_found("offers", id));
        }

        Ok(())
    }
}

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<EventDto>, Error> {
        let events = EventRepository::new(self.db).get_all().await?;

        Ok(events.into_iter().map(EventDto::from).collect())
    }

    pub async fn create(&self, input: EventInputDto) -> Result<EventDto, Error> {
        input.validate()?;

        Ok(EventRepository::new(self.db).create(input).await?.into())
    }

    pub async fn update(&self, id: i32, input: EventInputDto) -> Result<EventDto, Error> {
        input.validate()?;

        EventRepository::new(self.db)
            .update(id, input)
            .await?
            .map(EventDto::from)
            .ok_or_else(|| not_found("events", id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = EventRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(not_found("events", id));
        }

        Ok(())
    }
}

pub struct BannerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BannerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, active_only: bool) -> Result<Vec<BannerDto>, Error> {
        let banners = BannerRepository::new(self.db).get_all(active_only).await?;

        Ok(banners.into_iter().map(BannerDto::from).collect())
    }

    pub async fn create(&self, input: BannerInputDto) -> Result<BannerDto, Error> {
        input.validate()?;

        Ok(BannerRepository::new(self.db).create(input).await?.into())
    }

    pub async fn update(&self, id: i32, input: BannerInputDto) -> Result<BannerDto, Error> {
        input.validate()?;

        BannerRepository::new(self.db)
            .update(id, input)
            .await?
            .map(BannerDto::from)
            .ok_or_else(|| not_found("banners", id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = BannerRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(not_found("banners", id));
        }

        Ok(())
    }
}

pub struct BenefitService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BenefitService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<BenefitDto>, Error> {
        let benefits = BenefitRepository::new(self.db).get_all().await?;

        Ok(benefits.into_iter().map(BenefitDto::from).collect())
    }

    pub async fn create(&self, input: BenefitInputDto) -> Result<BenefitDto, Error> {
        input.validate()?;

        Ok(BenefitRepository::new(self.db).create(input).await?.into())
    }

    pub async fn update(&self, id: i32, input: BenefitInputDto) -> Result<BenefitDto, Error> {
        input.validate()?;

        BenefitRepository::new(self.db)
            .update(id, input)
            .await?
            .map(BenefitDto::from)
            .ok_or_else(|| not_found("benefits", id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = BenefitRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(not_found("benefits", id));
        }

        Ok(())
    }
}
