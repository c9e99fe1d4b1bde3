use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    response::Redirect,
    routing::get,
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, DocsInfoModifier};
use crate::features::tickets::{routes as tickets_routes, TicketService};
use crate::shared::types::OkResponse;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// Liveness probe
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is up", body = OkResponse),
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<OkResponse> {
    Json(OkResponse::ok())
}

async fn root() -> Redirect {
    Redirect::temporary(SWAGGER_UI_PATH)
}

fn docs_routes(config: &Config) -> Router {
    let mut openapi = ApiDoc::openapi();
    DocsInfoModifier {
        title: config.docs.title.clone(),
        version: config.docs.version.clone(),
        description: config.docs.description.clone(),
    }
    .modify(&mut openapi);

    let router = Router::new().merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, openapi));

    match config.docs.credentials() {
        Some(credentials) => {
            tracing::info!("Swagger UI basic auth enabled");
            router.layer(from_fn_with_state(
                Arc::new(credentials),
                middleware::basic_auth_middleware,
            ))
        }
        None => {
            tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
            router
        }
    }
}

/// Assemble the application router around an existing ticket store
pub fn build_app(config: &Config, ticket_service: Arc<TicketService>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/healthz", get(health_check))
        .merge(docs_routes(config))
        .merge(tickets_routes::routes(ticket_service))
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(middleware::cors_layer(&config.app.cors_allowed_origins)),
        )
}
