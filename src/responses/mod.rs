pub mod errors;
pub mod json;

pub use errors::{catalog_error_response, error_to_response, ResultResp};

// Normal JSON response
pub use json::json_response;
