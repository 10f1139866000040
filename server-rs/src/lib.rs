use axum::{
    extract::Request,
    http::HeaderValue,
    middleware as axum_mw,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;

use config::Config;
use error::AppError;
use middleware::request_id::RequestId;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}

fn request_span(req: &Request) -> tracing::Span {
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.as_str())
        .unwrap_or("-");
    tracing::info_span!(
        "request",
        method = %req.method(),
        uri = %req.uri(),
        request_id,
    )
}

async fn not_found() -> AppError {
    AppError::NotFound
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let player_routes = Router::new().route("/", post(routes::players::create_player));

    let match_routes = Router::new()
        .route(
            "/",
            post(routes::matches::create_match).get(routes::matches::list_matches),
        )
        .route("/:id/membership", post(routes::matches::request_membership))
        .route(
            "/:id/membership/:player_id",
            put(routes::matches::review_membership),
        )
        .route("/:id/withdrawal", delete(routes::matches::withdraw))
        .route("/:id/close", put(routes::matches::close_match))
        .route("/:id/rating", post(routes::matches::rate_match))
        .route("/:id/player_rating", post(routes::matches::rate_player));

    let ranking_routes =
        Router::new().route("/organizers", get(routes::rankings::organizer_ranking));

    let invitation_routes = Router::new()
        .route("/", post(routes::invitations::send_invitation))
        .route("/:token/accept", post(routes::invitations::accept_invitation));

    Router::new()
        .route("/", get(routes::home::home))
        .route("/health", get(routes::health::health))
        .route("/openapi.json", get(openapi::openapi_json))
        .nest("/players", player_routes)
        .nest("/matches", match_routes)
        .nest("/rankings", ranking_routes)
        .nest("/invitations", invitation_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(axum_mw::from_fn(middleware::request_id::assign_request_id))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
