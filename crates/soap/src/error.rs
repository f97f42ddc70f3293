use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::envelope::fault_envelope;

/// A request the service could not turn into an operation call.
///
/// Rendered as a SOAP 1.1 `Client` fault. Gateway outcomes never become
/// faults; they are returned as status text instead.
#[derive(Debug, thiserror::Error)]
pub enum SoapError {
    #[error("Malformed SOAP envelope: {0}")]
    Malformed(String),

    #[error("Unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("Missing required parameter '{0}'")]
    MissingParameter(&'static str),

    #[error("Parameter '{name}' has an invalid value: '{value}'")]
    InvalidParameter { name: &'static str, value: String },
}

impl From<quick_xml::Error> for SoapError {
    fn from(err: quick_xml::Error) -> Self {
        SoapError::Malformed(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for SoapError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        SoapError::Malformed(err.to_string())
    }
}

impl IntoResponse for SoapError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "Rejected SOAP request");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/xml; charset=utf-8")],
            fault_envelope("Client", &self.to_string()),
        )
            .into_response()
    }
}
