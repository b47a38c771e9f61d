use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use miaclub::{
    model::{
        banner::{BannerDto, BannerInputDto},
        benefit::BenefitDto,
        event::{EventDto, EventInputDto},
        offer::{OfferDto, OfferInputDto},
    },
    server::controller::{
        banner::{get_banners, BannerQuery},
        benefit::get_benefits,
        event::{create_event, get_events},
        offer::{create_offer, delete_offer, get_offers, update_offer},
    },
};
use miaclub_test_utils::prelude::*;

use crate::util::{read_json, sign_in_staff};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn content_setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_auth_tables()
        .with_content_tables()
        .build()
        .await
}

fn offer_input(title: &str) -> OfferInputDto {
    OfferInputDto {
        title: title.to_string(),
        description: "Descuento en toda la tienda".to_string(),
        discount: "15% OFF".to_string(),
        image_url: None,
        start_date: date(2025, 6, 1),
        end_date: date(2025, 6, 30),
        is_active: true,
    }
}

mod offers {
    use super::*;

    /// Expect offers ordered by end date, latest first, without signing in
    #[tokio::test]
    async fn lists_offers_publicly() -> Result<(), TestError> {
        let test = content_setup().await?;
        test.content().insert_offer("Junio", date(2025, 6, 30)).await?;
        test.content().insert_offer("Agosto", date(2025, 8, 31)).await?;
        test.content().insert_offer("Julio", date(2025, 7, 31)).await?;

        let result = get_offers(State(test.to_app_state())).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let offers: Vec<OfferDto> = read_json(resp).await;
        let titles: Vec<&str> = offers.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, vec!["Agosto", "Julio", "Junio"]);

        Ok(())
    }

    /// Expect 201 created for an editor
    #[tokio::test]
    async fn editor_creates_offer() -> Result<(), TestError> {
        let test = content_setup().await?;
        sign_in_staff(&test, "editor@miaclub.pe", "Editor").await?;

        let result = create_offer(
            State(test.to_app_state()),
            test.session.clone(),
            Json(offer_input("Verano")),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let offer: OfferDto = read_json(resp).await;
        assert_eq!(offer.title, "Verano");
        assert_eq!(offer.discount, "15% OFF");

        Ok(())
    }

    /// Expect 403 forbidden for a viewer
    #[tokio::test]
    async fn viewer_cannot_create_offer() -> Result<(), TestError> {
        let test = content_setup().await?;
        sign_in_staff(&test, "vista@miaclub.pe", "Visualizador").await?;

        let result = create_offer(
            State(test.to_app_state()),
            test.session.clone(),
            Json(offer_input("Verano")),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Expect 401 unauthorized without a session
    #[tokio::test]
    async fn anonymous_cannot_create_offer() -> Result<(), TestError> {
        let test = content_setup().await?;

        let result = create_offer(
            State(test.to_app_state()),
            test.session.clone(),
            Json(offer_input("Verano")),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect 400 bad request when the title is blank
    #[tokio::test]
    async fn rejects_blank_title() -> Result<(), TestError> {
        let test = content_setup().await?;
        sign_in_staff(&test, "admin@miaclub.pe", "Administrador").await?;

        let result = create_offer(
            State(test.to_app_state()),
            test.session.clone(),
            Json(offer_input("   ")),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 200 success with every field replaced
    #[tokio::test]
    async fn updates_offer() -> Result<(), TestError> {
        let test = content_setup().await?;
        sign_in_staff(&test, "editor@miaclub.pe", "Editor").await?;
        let existing = test.content().insert_offer("Junio", date(2025, 6, 30)).await?;

        let mut input = offer_input("Junio extendido");
        input.is_active = false;
        let result = update_offer(
            State(test.to_app_state()),
            test.session.clone(),
            Path(existing.id),
            Json(input),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let offer: OfferDto = read_json(resp).await;
        assert_eq!(offer.id, existing.id);
        assert_eq!(offer.title, "Junio extendido");
        assert!(!offer.is_active);

        Ok(())
    }

    /// Expect 404 not found when updating an offer that does not exist
    #[tokio::test]
    async fn update_missing_offer() -> Result<(), TestError> {
        let test = content_setup().await?;
        sign_in_staff(&test, "editor@miaclub.pe", "Editor").await?;

        let result = update_offer(
            State(test.to_app_state()),
            test.session.clone(),
            Path(404),
            Json(offer_input("Nada")),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 204 no content and the offer gone from the list
    #[tokio::test]
    async fn deletes_offer() -> Result<(), TestError> {
        let test = content_setup().await?;
        sign_in_staff(&test, "editor@miaclub.pe", "Editor").await?;
        let existing = test.content().insert_offer("Junio", date(2025, 6, 30)).await?;

        let result = delete_offer(
            State(test.to_app_state()),
            test.session.clone(),
            Path(existing.id),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let listed: Vec<OfferDto> =
            read_json(get_offers(State(test.to_app_state())).await.unwrap().into_response()).await;
        assert!(listed.is_empty());

        Ok(())
    }

    /// Expect 500 internal server error when required database tables dont exist
    #[tokio::test]
    async fn error_when_tables_missing() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = get_offers(State(test.to_app_state())).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}

mod events {
    use super::*;

    /// Expect events ordered by date, latest first
    #[tokio::test]
    async fn lists_events_latest_first() -> Result<(), TestError> {
        let test = content_setup().await?;
        test.content().insert_event("Cata", date(2025, 3, 1)).await?;
        test.content().insert_event("Feria", date(2025, 9, 1)).await?;

        let result = get_events(State(test.to_app_state())).await;

        let events: Vec<EventDto> = read_json(result.unwrap().into_response()).await;
        let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Feria", "Cata"]);

        Ok(())
    }

    /// Expect 400 bad request when the location is blank
    #[tokio::test]
    async fn rejects_blank_location() -> Result<(), TestError> {
        let test = content_setup().await?;
        sign_in_staff(&test, "editor@miaclub.pe", "Editor").await?;

        let input = EventInputDto {
            title: "Feria".to_string(),
            description: "Feria gastronómica".to_string(),
            event_date: date(2025, 9, 1),
            event_time: None,
            location: String::new(),
            image_url: None,
        };
        let result = create_event(State(test.to_app_state()), test.session.clone(), Json(input)).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod banners {
    use super::*;
    use miaclub::server::controller::banner::create_banner;

    /// Expect only active banners, by ascending order index, when `active=true`
    #[tokio::test]
    async fn active_filter_and_order() -> Result<(), TestError> {
        let test = content_setup().await?;
        test.content().insert_banner("Tercero", 3, true).await?;
        test.content().insert_banner("Oculto", 2, false).await?;
        test.content().insert_banner("Primero", 1, true).await?;

        let active = get_banners(
            State(test.to_app_state()),
            Query(BannerQuery { active: true }),
        )
        .await;
        let all = get_banners(
            State(test.to_app_state()),
            Query(BannerQuery { active: false }),
        )
        .await;

        let active: Vec<BannerDto> = read_json(active.unwrap().into_response()).await;
        let all: Vec<BannerDto> = read_json(all.unwrap().into_response()).await;
        let titles = |banners: &[BannerDto]| {
            banners
                .iter()
                .map(|b| b.title.clone())
                .collect::<Vec<String>>()
        };
        assert_eq!(titles(&active), vec!["Primero", "Tercero"]);
        assert_eq!(titles(&all), vec!["Primero", "Oculto", "Tercero"]);

        Ok(())
    }

    /// Expect an administrator to pass the editor requirement
    #[tokio::test]
    async fn administrator_creates_banner() -> Result<(), TestError> {
        let test = content_setup().await?;
        sign_in_staff(&test, "admin@miaclub.pe", "Administrador").await?;

        let input = BannerInputDto {
            title: "Bienvenida".to_string(),
            subtitle: Some("Únete al club".to_string()),
            link_url: None,
            image_url: None,
            order_index: 0,
            is_active: true,
        };
        let result = create_banner(State(test.to_app_state()), test.session.clone(), Json(input)).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        Ok(())
    }
}

mod benefits {
    use super::*;

    /// Expect benefits ordered by title
    #[tokio::test]
    async fn lists_benefits_by_title() -> Result<(), TestError> {
        let test = content_setup().await?;
        test.content().insert_benefit("Regalo de cumpleaños", true).await?;
        test.content().insert_benefit("Envío gratis", true).await?;

        let result = get_benefits(State(test.to_app_state())).await;

        let benefits: Vec<BenefitDto> = read_json(result.unwrap().into_response()).await;
        let titles: Vec<&str> = benefits.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Envío gratis", "Regalo de cumpleaños"]);

        Ok(())
    }
}
