use crate::app::App;
use crate::errors::ServerError;
use crate::handlers::{bien, biens};
use crate::responses::ResultResp;
use astra::Request;

const LISTINGS_PATHS: [&str; 2] = ["/api/biens", "/.netlify/functions/get-biens"];
const DETAIL_PREFIXES: [&str; 2] = ["/api/bien", "/.netlify/functions/get-bien"];

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path().trim_end_matches('/');

    tracing::debug!(method, path, "incoming request");

    match method {
        "GET" if LISTINGS_PATHS.contains(&path) => Ok(biens::list_biens(app)),
        "GET" => match detail_prefix(path) {
            Some(prefix) => bien::get_bien(&req, prefix, app),
            None => Err(ServerError::NotFound("Not Found".into())),
        },
        _ => Err(ServerError::NotFound("Not Found".into())),
    }
}

/// `/api/bien` and `/api/bien/{id}` but not `/api/biens`.
fn detail_prefix(path: &str) -> Option<&'static str> {
    DETAIL_PREFIXES.into_iter().find(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}
