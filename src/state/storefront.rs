//! Storefront catalog filtering and the landing page banner carousel.

use std::{collections::BTreeSet, time::Duration};

use dioxus_logger::tracing;

use crate::{
    model::{
        banner::BannerDto,
        catalog::{CatalogItem, CatalogKind},
    },
    state::collection::{ClientError, CollectionClient, ListQuery},
};

/// Interval between automatic banner advances
pub const CAROUSEL_INTERVAL: Duration = Duration::from_secs(5);

pub const ALL_CATEGORIES: &str = "all";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriceBracket {
    #[default]
    All,
    LessThan10,
    From10To50,
    MoreThan50,
}

impl PriceBracket {
    pub const ALL: [PriceBracket; 4] = [
        PriceBracket::All,
        PriceBracket::LessThan10,
        PriceBracket::From10To50,
        PriceBracket::MoreThan50,
    ];

    /// `<select>` option value
    pub fn value(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::LessThan10 => "less-10",
            Self::From10To50 => "10-50",
            Self::MoreThan50 => "more-50",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "Todos los precios",
            Self::LessThan10 => "Menos de S/10",
            Self::From10To50 => "S/10 - S/50",
            Self::MoreThan50 => "Más de S/50",
        }
    }

    /// Unknown values fall back to [`PriceBracket::All`]
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|bracket| bracket.value() == value)
            .unwrap_or_default()
    }

    /// Items without a price only match [`PriceBracket::All`]
    pub fn contains(&self, price: Option<f64>) -> bool {
        match (self, price) {
            (Self::All, _) => true,
            (_, None) => false,
            (Self::LessThan10, Some(p)) => p < 10.0,
            (Self::From10To50, Some(p)) => (10.0..=50.0).contains(&p),
            (Self::MoreThan50, Some(p)) => p > 50.0,
        }
    }
}

/// Member page tab
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Offers,
    Events,
}

impl Section {
    pub fn includes(&self, kind: CatalogKind) -> bool {
        match self {
            Self::Offers => kind != CatalogKind::Evento,
            Self::Events => kind == CatalogKind::Evento,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogFilter {
    pub search: String,
    /// A category name or [`ALL_CATEGORIES`]
    pub category: String,
    pub price: PriceBracket,
    pub section: Section,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            price: PriceBracket::All,
            section: Section::Offers,
        }
    }
}

impl CatalogFilter {
    pub fn matches(&self, item: &CatalogItem) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = item.title.to_lowercase().contains(&needle)
            || item.description.to_lowercase().contains(&needle);
        let matches_category = self.category == ALL_CATEGORIES || item.category == self.category;

        matches_search
            && matches_category
            && self.section.includes(item.kind)
            && self.price.contains(item.price)
    }

    pub fn apply<'a>(&self, items: &'a [CatalogItem]) -> Vec<&'a CatalogItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// [`ALL_CATEGORIES`] followed by the distinct categories of `items`, sorted
pub fn categories(items: &[CatalogItem]) -> Vec<&'static str> {
    let distinct: BTreeSet<&'static str> = items.iter().map(|item| item.category).collect();

    std::iter::once(ALL_CATEGORIES).chain(distinct).collect()
}

/// Active banners of the landing page, rotated on a timer
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Carousel {
    banners: Vec<BannerDto>,
    index: usize,
    loading: bool,
    error: Option<String>,
}

impl Carousel {
    pub fn banners(&self) -> &[BannerDto] {
        &self.banners
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&BannerDto> {
        self.banners.get(self.index)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the timer should run at all
    pub fn rotates(&self) -> bool {
        self.banners.len() > 1
    }

    /// Fetches active banners ordered by `order_index`
    pub async fn load<C: CollectionClient>(&mut self, client: &C) {
        self.begin_load();

        let result = Self::fetch(client).await;
        self.apply_loaded(result);
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub async fn fetch<C: CollectionClient>(client: &C) -> Result<Vec<BannerDto>, ClientError> {
        client.select::<BannerDto>(ListQuery::active()).await
    }

    pub fn apply_loaded(&mut self, result: Result<Vec<BannerDto>, ClientError>) {
        match result {
            Ok(banners) => {
                self.banners = banners;
                self.error = None;
            }
            Err(err) => {
                tracing::error!("Error fetching banners: {}", err);

                self.banners.clear();
                self.error = Some(format!("Error al cargar los banners: {}", err));
            }
        }

        self.index = 0;
        self.loading = false;
    }

    /// Advances to the next banner, wrapping around; no-op with fewer than two banners
    pub fn tick(&mut self) {
        if self.rotates() {
            self.index = (self.index + 1) % self.banners.len();
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.banners.len() {
            self.index = index;
        }
    }
}
