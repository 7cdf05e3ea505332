// app.rs
use crate::apimo::{ApimoClient, ListingSource};
use crate::config::{ApimoConfig, ConfigError};
use crate::errors::ServerError;

/// Everything a handler needs. Built once at startup and shared
/// read-only by every request.
pub struct App {
    source: Result<Box<dyn ListingSource + Send + Sync>, ServerError>,
}

impl App {
    /// Wire up the real APIMO client, or remember why it can't be used.
    pub fn from_config(config: Result<ApimoConfig, ConfigError>) -> Self {
        let source = config
            .map_err(ServerError::from)
            .and_then(|cfg| ApimoClient::new(cfg).map_err(ServerError::from))
            .map(|client| Box::new(client) as Box<dyn ListingSource + Send + Sync>);

        if let Err(e) = &source {
            tracing::warn!(error = %e, detail = ?e, "APIMO client unavailable, handlers will answer 500");
        }

        Self { source }
    }

    pub fn with_source<S>(source: S) -> Self
    where
        S: ListingSource + Send + Sync + 'static,
    {
        Self {
            source: Ok(Box::new(source)),
        }
    }

    /// The upstream source, or the configuration error that prevents
    /// calling it.
    pub fn source(&self) -> Result<&dyn ListingSource, ServerError> {
        match &self.source {
            Ok(source) => Ok(source.as_ref()),
            Err(ServerError::Configuration(e)) => Err(ServerError::Configuration(e.clone())),
            Err(e) => Err(ServerError::Internal(e.to_string())),
        }
    }
}
