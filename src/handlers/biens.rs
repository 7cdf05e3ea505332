// handlers/biens.rs
use crate::app::App;
use crate::domain::Catalog;
use crate::errors::ServerError;
use crate::responses::{catalog_error_response, json_response};
use astra::Response;
use chrono::{SecondsFormat, Utc};

/// Listings are refreshed at most every five minutes by clients.
const CACHE_MAX_AGE: u32 = 300;

/// GET /api/biens
pub fn list_biens(app: &App) -> Response {
    match load_catalog(app).and_then(|catalog| json_response(&catalog, CACHE_MAX_AGE)) {
        Ok(resp) => resp,
        Err(err) => catalog_error_response(err),
    }
}

pub fn load_catalog(app: &App) -> Result<Catalog, ServerError> {
    let source = app.source()?;
    let raw = source.fetch_properties()?;

    let catalog = Catalog::build(&raw, now_iso());
    tracing::info!(
        fetched = raw.len(),
        published = catalog.total,
        "listings catalog built"
    );
    Ok(catalog)
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
