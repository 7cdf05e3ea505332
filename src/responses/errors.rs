use crate::errors::ServerError;
use astra::{Body, Response};
use http::header::CONTENT_TYPE;
use http::{HeaderValue, StatusCode};
use serde::Serialize;
use serde_json::json;

pub type ResultResp = Result<Response, ServerError>;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Convert a ServerError into a JSON error response
pub fn error_to_response(err: ServerError) -> Response {
    if let ServerError::Upstream(_) | ServerError::Internal(_) = &err {
        tracing::error!(error = %err, "request failed");
    }

    let body = ErrorBody {
        error: err.to_string(),
        message: err.message(),
    };
    json_error_response(err.status(), &body)
}

/// Error shape of the listings endpoint: the front end always gets empty
/// lists to render, never a partial set.
pub fn catalog_error_response(err: ServerError) -> Response {
    tracing::error!(error = %err, "listings unavailable");

    let mut body = json!({
        "error": err.to_string(),
        "biens": [],
        "filtres": { "villes": [], "types": [], "transactions": [] },
    });
    if let Some(message) = err.message() {
        body["message"] = json!(message);
    }
    json_error_response(err.status(), &body)
}

fn json_error_response<T: Serialize>(status: u16, body: &T) -> Response {
    let bytes = serde_json::to_vec(body)
        .unwrap_or_else(|_| br#"{"error":"Internal Server Error"}"#.to_vec());

    let mut resp = Response::new(Body::from(bytes));
    *resp.status_mut() = StatusCode::from_u16(status)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    resp.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    resp
}
