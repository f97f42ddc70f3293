//! HTTP routing for the SOAP endpoint.

use std::time::Duration;

use axum::extract::{RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::{SoapConfig, SERVICE_PATH};
use crate::envelope::{parse_request, response_envelope};
use crate::error::SoapError;
use crate::operations::SoapCall;
use crate::state::SoapState;
use crate::wsdl;

const XML_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Build the SOAP application router with tracing, timeout and panic
/// recovery layers.
pub fn build_soap_router(state: SoapState, config: &SoapConfig) -> Router {
    Router::new()
        .route(SERVICE_PATH, get(describe).post(invoke))
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// GET /product_service?wsdl
async fn describe(State(state): State<SoapState>, RawQuery(query): RawQuery) -> Response {
    let wants_wsdl = query
        .as_deref()
        .is_some_and(|q| q.split('&').any(|p| p.eq_ignore_ascii_case("wsdl")));

    if !wants_wsdl {
        return (
            StatusCode::BAD_REQUEST,
            "Append ?wsdl to fetch the service description.",
        )
            .into_response();
    }

    (
        [(header::CONTENT_TYPE, XML_CONTENT_TYPE)],
        wsdl::document(&state.config),
    )
        .into_response()
}

/// POST /product_service
async fn invoke(State(state): State<SoapState>, body: String) -> Result<Response, SoapError> {
    let request = parse_request(&body)?;
    let call = SoapCall::from_request(&request)?;
    let operation = call.operation();

    tracing::info!(operation, "SOAP call");
    let result = call.execute(&state.gateway).await;

    let envelope = response_envelope(&state.config.namespace, operation, &result);
    Ok(([(header::CONTENT_TYPE, XML_CONTENT_TYPE)], envelope).into_response())
}
