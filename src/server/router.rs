//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every JSON endpoint is registered through utoipa so it shows up in the OpenAPI document
//! served with Swagger UI at `/api/docs`. Public object downloads live outside of `/api` and
//! are plain axum routes.

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Largest accepted upload body
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Builds the API router with Swagger UI and the object download route.
///
/// # Registered Endpoints
/// - `/api/auth/*` - sign up, sign in, sign out, session lookup and password recovery
/// - `/api/offers`, `/api/events`, `/api/banners`, `/api/benefits` - storefront content CRUD
/// - `/api/web-config` - site branding entries
/// - `/api/backoffice-users` - backoffice accounts and roles
/// - `/api/storage/{bucket}` - object upload
/// - `/storage/{bucket}/{*path}` - public object download
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Mia Club", description = "Mia Club API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::offer::OFFER_TAG, description = "Member offer routes"),
        (name = controller::event::EVENT_TAG, description = "Member event routes"),
        (name = controller::banner::BANNER_TAG, description = "Landing page banner routes"),
        (name = controller::benefit::BENEFIT_TAG, description = "Membership benefit routes"),
        (name = controller::web_config::WEB_CONFIG_TAG, description = "Site configuration routes"),
        (name = controller::backoffice_user::BACKOFFICE_USER_TAG, description = "Backoffice account routes"),
        (name = controller::storage::STORAGE_TAG, description = "Object storage routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::signup))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_session))
        .routes(routes!(controller::auth::recover))
        .routes(routes!(
            controller::offer::get_offers,
            controller::offer::create_offer
        ))
        .routes(routes!(
            controller::offer::update_offer,
            controller::offer::delete_offer
        ))
        .routes(routes!(
            controller::event::get_events,
            controller::event::create_event
        ))
        .routes(routes!(
            controller::event::update_event,
            controller::event::delete_event
        ))
        .routes(routes!(
            controller::banner::get_banners,
            controller::banner::create_banner
        ))
        .routes(routes!(
            controller::banner::update_banner,
            controller::banner::delete_banner
        ))
        .routes(routes!(
            controller::benefit::get_benefits,
            controller::benefit::create_benefit
        ))
        .routes(routes!(
            controller::benefit::update_benefit,
            controller::benefit::delete_benefit
        ))
        .routes(routes!(
            controller::web_config::get_web_config,
            controller::web_config::upsert_web_config
        ))
        .routes(routes!(
            controller::backoffice_user::get_backoffice_users,
            controller::backoffice_user::create_backoffice_user
        ))
        .routes(routes!(controller::backoffice_user::get_backoffice_user_by_email))
        .routes(routes!(
            controller::backoffice_user::get_backoffice_user,
            controller::backoffice_user::update_backoffice_user,
            controller::backoffice_user::delete_backoffice_user
        ))
        .routes(routes!(controller::storage::upload))
        .split_for_parts();

    routes
        .route(
            "/storage/{bucket}/{*path}",
            get(controller::storage::download),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
