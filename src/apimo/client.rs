// client.rs
use crate::apimo::models::{PropertiesEnvelope, RawListing};
use crate::apimo::ApimoError;
use crate::config::ApimoConfig;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

/// Where listings come from. The handlers only see this trait so the
/// provider can be swapped out in tests.
pub trait ListingSource {
    /// Every property of the configured agency, decoded.
    fn fetch_properties(&self) -> Result<Vec<RawListing>, ApimoError>;

    /// One property, exactly as the provider returned it.
    fn fetch_property(&self, id: &str) -> Result<Value, ApimoError>;
}

pub struct ApimoClient {
    client: Client,
    config: ApimoConfig,
}

impl ApimoClient {
    pub fn new(config: ApimoConfig) -> Result<Self, ApimoError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApimoError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn properties_url(&self) -> Result<Url, ApimoError> {
        self.agency_url(&["properties"])
    }

    pub fn property_url(&self, id: &str) -> Result<Url, ApimoError> {
        self.agency_url(&["properties", id])
    }

    fn agency_url(&self, tail: &[&str]) -> Result<Url, ApimoError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| ApimoError::Network(format!("invalid base url: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| ApimoError::Network("base url cannot take a path".into()))?
            .pop_if_empty()
            .push("agencies")
            .push(&self.config.agency_id)
            .extend(tail);

        Ok(url)
    }

    fn get(&self, url: Url) -> Result<Response, ApimoError> {
        tracing::debug!(%url, "calling APIMO");

        self.client
            .get(url)
            .header(
                AUTHORIZATION,
                basic_auth_header(&self.config.provider_id, &self.config.api_token),
            )
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| self.transport_error(e, ApimoError::Network))
    }

    /// Timeouts are reported as such whether they hit while connecting or
    /// while the body is still being read.
    fn transport_error(
        &self,
        err: reqwest::Error,
        otherwise: fn(String) -> ApimoError,
    ) -> ApimoError {
        if err.is_timeout() {
            ApimoError::Timeout(self.config.timeout.as_secs())
        } else {
            otherwise(err.to_string())
        }
    }
}

impl ListingSource for ApimoClient {
    fn fetch_properties(&self) -> Result<Vec<RawListing>, ApimoError> {
        let resp = self.get(self.properties_url()?)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        let body: Value = resp
            .json()
            .map_err(|e| self.transport_error(e, ApimoError::JsonParse))?;

        let listings = decode_properties(body)?;
        tracing::info!(count = listings.len(), "fetched APIMO properties");
        Ok(listings)
    }

    fn fetch_property(&self, id: &str) -> Result<Value, ApimoError> {
        let resp = self.get(self.property_url(id)?)?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApimoError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            return Err(status_error(status));
        }

        resp.json()
            .map_err(|e| self.transport_error(e, ApimoError::JsonParse))
    }
}

/// `Basic base64(provider:token)`.
pub fn basic_auth_header(provider_id: &str, api_token: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{provider_id}:{api_token}")))
}

fn status_error(status: StatusCode) -> ApimoError {
    ApimoError::Status {
        status: status.as_u16(),
        message: status.canonical_reason().unwrap_or("").to_string(),
    }
}

/// Accept a bare list, `{ properties: [...] }` or `{ items: [...] }`, then
/// decode every entry.
pub fn decode_properties(body: Value) -> Result<Vec<RawListing>, ApimoError> {
    let envelope: PropertiesEnvelope = serde_json::from_value(body).map_err(|_| {
        ApimoError::UnexpectedShape(
            "expected a list, or an object with `properties` or `items`".to_string(),
        )
    })?;

    envelope
        .into_entries()
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            serde_json::from_value(entry)
                .map_err(|e| ApimoError::JsonParse(format!("property #{i}: {e}")))
        })
        .collect()
}
