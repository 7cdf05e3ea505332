mod apimo_error;
mod client;
pub mod models;

pub use apimo_error::ApimoError;
pub use client::{basic_auth_header, decode_properties, ApimoClient, ListingSource};
pub use models::RawListing;
