//! Application router and middleware stack.

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use http::header::{self, HeaderName, HeaderValue, InvalidHeaderValue};
use http::Method;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::ports::SessionRepository;

use super::health::{health_routes, HealthState};
use super::session::{session_routes, SessionHandlers};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the full application: workout and health routes behind the
/// tracing, request-id, timeout, compression and CORS layers.
///
/// # Errors
///
/// Fails if a configured CORS origin is not a valid header value.
pub fn build_router(
    repository: Arc<dyn SessionRepository>,
    config: &ServerConfig,
) -> Result<Router, InvalidHeaderValue> {
    let cors = cors_layer(&config.cors_origins_list())?;
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let router = Router::new()
        .merge(session_routes(SessionHandlers::from_repository(repository)))
        .merge(health_routes(HealthState::new(Instant::now())))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(TimeoutLayer::new(config.request_timeout()))
                .layer(CompressionLayer::new())
                .layer(cors),
        );

    Ok(router)
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer, InvalidHeaderValue> {
    let origins = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}
