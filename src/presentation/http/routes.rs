// src/presentation/http/routes.rs
use crate::config::RateLimitSettings;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{authors, documents},
    middleware::{rate_limit_layer, require_basic_auth},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    middleware,
    routing::{delete, get},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Router with default CORS origins and rate limiting.
pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// Same as [`build_router`] with the limiter switched on or off. In-process
/// tests have no peer address, so they run without it.
pub fn build_router_with_rate_limiter(state: HttpState, enabled: bool) -> Router {
    let settings = RateLimitSettings {
        enabled,
        ..RateLimitSettings::default()
    };
    build_router_with_options(state, &["http://localhost:3000".to_string()], settings)
}

pub fn build_router_with_options(
    state: HttpState,
    allowed_origins: &[String],
    rate_limit: RateLimitSettings,
) -> Router {
    let api = Router::new()
        .route(
            "/api/authors",
            get(authors::list_authors).post(authors::create_author),
        )
        .route(
            "/api/authors/{id}",
            get(authors::get_author)
                .put(authors::update_author)
                .delete(authors::delete_author),
        )
        .route(
            "/api/authors/{id}/documents/delete",
            delete(authors::request_documents_deletion),
        )
        .route(
            "/api/documents",
            get(documents::list_documents).post(documents::create_document),
        )
        .route(
            "/api/documents/{id}",
            get(documents::get_document)
                .put(documents::update_document)
                .delete(documents::delete_document),
        )
        .route_layer(middleware::from_fn(require_basic_auth));

    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(allowed_origins));

    if rate_limit.enabled {
        match rate_limit_layer(rate_limit) {
            Some(layer) => router = router.layer(layer),
            None => tracing::warn!(
                per_second = rate_limit.per_second,
                burst = rate_limit.burst,
                "invalid rate limit settings; limiter disabled"
            ),
        }
    }

    router.layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
