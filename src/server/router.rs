//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered through utoipa-axum so the OpenAPI document is collected from
//! the handlers' `#[utoipa::path]` annotations. Swagger UI is served at `/docs`.

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Declares the `bearer` scheme referenced by protected endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /health` - Liveness probe
/// - `GET /runtime/resolve` - Resolve the tenant serving a host
/// - `POST /runtime/events` - Record a site telemetry event
/// - `POST /runtime/contact` - Send a contact request to an artist
/// - `GET|POST /artists`, `GET /artists/{artist_id}` - Artists
/// - `GET|POST /artists/{artist_id}/pages` - Pages of an artist
/// - `GET|PUT|PATCH /artists/{artist_id}/pages/{page_id}` - One page
/// - `PATCH /pages/{page_id}` - Patch a page by id
/// - `GET /accounts/current`, `GET /accounts/{account_id}/artists` - Account overview (bearer)
/// - `GET /auth/profile` - Caller profile (bearer)
/// - `GET /plans` - Plan catalog
///
/// The OpenAPI specification is available at `/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Folio", description = "Folio artist portfolio API"),
        modifiers(&BearerAuth),
        tags(
            (name = controller::runtime::RUNTIME_TAG, description = "Public runtime of artist sites"),
            (name = controller::artist::ARTIST_TAG, description = "Artists"),
            (name = controller::page::PAGE_TAG, description = "Page builder"),
            (name = controller::account::ACCOUNT_TAG, description = "Back-office accounts"),
            (name = controller::auth::AUTH_TAG, description = "Authenticated user"),
            (name = controller::plan::PLAN_TAG, description = "Plan catalog"),
            (name = controller::health::HEALTH_TAG, description = "Health check"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .routes(routes!(controller::runtime::resolve_host))
        .routes(routes!(controller::runtime::record_event))
        .routes(routes!(controller::runtime::submit_contact))
        .routes(routes!(
            controller::artist::list_artists,
            controller::artist::create_artist
        ))
        .routes(routes!(controller::artist::get_artist))
        .routes(routes!(
            controller::page::list_pages,
            controller::page::create_page
        ))
        .routes(routes!(
            controller::page::get_page,
            controller::page::update_page,
            controller::page::patch_page
        ))
        .routes(routes!(controller::page::patch_page_by_id))
        .routes(routes!(controller::account::get_current_account))
        .routes(routes!(controller::account::get_account_artists))
        .routes(routes!(controller::auth::get_profile))
        .routes(routes!(controller::plan::list_plans))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
}
