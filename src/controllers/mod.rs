//! The edge layer: HTTP routing, identity extraction, and the mapping of
//! orchestrator/composition outcomes onto HTTP responses (§4, §6.1).

mod health;
mod hotels;
pub mod identity;
mod loyalty;
mod me;
mod reservations;

use axum::http::Request;
use axum::Router;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::composition::CompositionService;
use crate::saga::SagaOrchestrator;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
pub struct AppState {
    pub composition: CompositionService,
    pub saga: SagaOrchestrator,
}

/// Every inbound request gets a request id (from `x-request-id` if the
/// caller supplied one, otherwise a fresh UUID), attached to its tracing
/// span and echoed back on the response for cross-log correlation.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(hotels::routes())
        .merge(loyalty::routes())
        .merge(reservations::routes())
        .merge(me::routes())
        .with_state(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let request_id = request
                    .extensions()
                    .get::<RequestId>()
                    .and_then(|id| id.header_value().to_str().ok())
                    .unwrap_or("-")
                    .to_string();
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id,
                )
            }),
        )
        .layer(SetRequestIdLayer::new(
            axum::http::HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
}
