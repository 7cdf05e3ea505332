// handlers/bien.rs
use crate::app::App;
use crate::errors::ServerError;
use crate::responses::{json_response, ResultResp};
use astra::Request;
use percent_encoding::percent_decode_str;

const CACHE_MAX_AGE: u32 = 60;

/// GET /api/bien?id=… or /api/bien/{id}
///
/// Returns the provider's record untouched.
pub fn get_bien(req: &Request, prefix: &str, app: &App) -> ResultResp {
    let id = listing_id(req, prefix)
        .ok_or_else(|| ServerError::BadRequest("ID manquant".into()))?;

    let source = app.source()?;
    let bien = source.fetch_property(&id)?;

    json_response(&bien, CACHE_MAX_AGE)
}

/// `id` query parameter first, then the path segment after `prefix`.
pub fn listing_id(req: &Request, prefix: &str) -> Option<String> {
    let from_query = req.uri().query().and_then(|q| {
        url::form_urlencoded::parse(q.as_bytes())
            .find(|(k, _)| k == "id")
            .map(|(_, v)| v.trim().to_string())
    });

    let from_path = || {
        let tail = req.uri().path().strip_prefix(prefix)?;
        let segment = tail.trim_matches('/').rsplit('/').next()?;
        percent_decode_str(segment)
            .decode_utf8()
            .ok()
            .map(|id| id.trim().to_string())
    };

    from_query
        .filter(|id| !id.is_empty())
        .or_else(from_path)
        .filter(|id| !id.is_empty())
}
