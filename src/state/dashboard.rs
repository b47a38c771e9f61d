//! Backoffice landing summary.

use chrono::NaiveDate;
use dioxus_logger::tracing;

use crate::{
    model::{banner::BannerDto, benefit::BenefitDto, event::EventDto, offer::OfferDto},
    state::collection::{CollectionClient, ListQuery},
};

/// Counters shown on the dashboard cards, `None` when the collection failed to load
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    /// Active offers that have not ended
    pub active_offers: Option<usize>,
    /// Events dated today or later
    pub upcoming_events: Option<usize>,
    pub published_banners: Option<usize>,
    pub active_benefits: Option<usize>,
}

impl DashboardStats {
    pub async fn load<C: CollectionClient>(client: &C, today: NaiveDate) -> Self {
        Self {
            active_offers: count::<OfferDto, _>(client, |offer| {
                offer.is_active && offer.end_date >= today
            })
            .await,
            upcoming_events: count::<EventDto, _>(client, |event| event.event_date >= today).await,
            published_banners: count::<BannerDto, _>(client, |banner| banner.is_active).await,
            active_benefits: count::<BenefitDto, _>(client, |benefit| benefit.is_active).await,
        }
    }

    /// Card titles paired with their displayed values
    pub fn cards(&self) -> [(&'static str, String); 4] {
        let show = |value: Option<usize>| value.map_or("-".to_string(), |n| n.to_string());

        [
            ("Ofertas Activas", show(self.active_offers)),
            ("Próximos Eventos", show(self.upcoming_events)),
            ("Banners Publicados", show(self.published_banners)),
            ("Beneficios Activos", show(self.active_benefits)),
        ]
    }
}

async fn count<R, C>(client: &C, keep: impl Fn(&R) -> bool) -> Option<usize>
where
    R: crate::state::collection::Record,
    C: CollectionClient,
{
    match client.select::<R>(ListQuery::default()).await {
        Ok(rows) => Some(rows.iter().filter(|row| keep(row)).count()),
        Err(err) => {
            tracing::error!("Failed to count {:?}: {}", R::COLLECTION, err);
            None
        }
    }
}
