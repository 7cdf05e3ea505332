// errors.rs
use crate::apimo::ApimoError;
use crate::config::ConfigError;
use thiserror::Error;

/// Errors surfaced by the handlers, either from request validation
/// or from the upstream provider.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Configuration APIMO manquante")]
    Configuration(#[from] ConfigError),

    #[error("{0}")]
    Upstream(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound(_) => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Configuration(_) | ServerError::Upstream(_) | ServerError::Internal(_) => {
                500
            }
        }
    }

    /// Longer explanation shown next to `error`, when there is one.
    pub fn message(&self) -> Option<String> {
        match self {
            ServerError::Configuration(ConfigError::Missing(_)) => Some(
                "Veuillez configurer APIMO_PROVIDER_ID, APIMO_API_TOKEN et APIMO_AGENCY_ID \
                 dans les variables d'environnement."
                    .to_string(),
            ),
            ServerError::Configuration(err) => Some(err.to_string()),
            _ => None,
        }
    }
}

impl From<ApimoError> for ServerError {
    fn from(err: ApimoError) -> Self {
        match err {
            ApimoError::NotFound(id) => ServerError::NotFound(format!("Bien introuvable: {id}")),
            other => ServerError::Upstream(other.to_string()),
        }
    }
}
