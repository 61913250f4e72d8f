use axum::{response::IntoResponse, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Pong;
use service::RestaurantService;

use crate::metrics::encode_metrics;
use crate::openapi::ApiDoc;

pub mod restaurants;

/// Shared handler state. Cloned per request; the service is a cheap `Arc` handle.
#[derive(Clone)]
pub struct AppState {
    pub restaurants: RestaurantService,
}

impl AppState {
    pub fn new(restaurants: RestaurantService) -> Self {
        Self { restaurants }
    }
}

#[utoipa::path(
    get, path = "/ping", tag = "health",
    responses((status = 200, description = "Liveness probe", body = crate::openapi::PongDoc))
)]
pub async fn ping() -> Json<Pong> {
    Json(Pong::default())
}

async fn metrics() -> impl IntoResponse {
    encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: liveness, metrics, API docs and the restaurant resource.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let v1 = Router::new()
        .route("/restaurants", get(restaurants::list).post(restaurants::create))
        .route(
            "/restaurants/:id",
            get(restaurants::get)
                .patch(restaurants::update)
                .delete(restaurants::delete),
        );

    Router::new()
        .route("/ping", get(ping))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/v1", v1)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
