// responses/json.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde::Serialize;

/// Serialize `payload` as a JSON response, publicly cacheable for `max_age` seconds.
pub fn json_response<T: Serialize>(payload: &T, max_age: u32) -> ResultResp {
    let body = serde_json::to_vec(payload).map_err(|e| ServerError::Internal(e.to_string()))?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Cache-Control", format!("public, max-age={max_age}"))
        .body(Body::from(body))
        .map_err(|e| ServerError::Internal(e.to_string()))
}
