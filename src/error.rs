use serde_json::Value;
use thiserror::Error;

/// Main error type for the travel planner pipeline
#[derive(Error, Debug)]
pub enum TravelError {
    #[error("{0}")]
    MissingFields(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network or API error: {0}")]
    Transport(String),

    #[error("{provider} returned HTTP {status}: {message}")]
    ProviderStatus {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("{0} returned no candidates")]
    NoCandidates(&'static str),

    #[error("Invalid JSON response from {provider}: {message}")]
    MalformedProviderJson {
        provider: &'static str,
        message: String,
        raw: Value,
    },

    #[error("{0}")]
    SchemaViolation(String),

    #[error("{0}")]
    Provider(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TravelError>;

impl TravelError {
    /// Client input problems; everything else is a server-side failure
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            TravelError::MissingFields(_) | TravelError::InvalidRequest(_)
        )
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            TravelError::MissingFields(_) => "MISSING_FIELDS",
            TravelError::InvalidRequest(_) => "INVALID_REQUEST",
            TravelError::Config(_) => "CONFIG_ERROR",
            TravelError::Transport(_) => "TRANSPORT_ERROR",
            TravelError::ProviderStatus { .. } => "PROVIDER_HTTP_ERROR",
            TravelError::NoCandidates(_) => "NO_CANDIDATES",
            TravelError::MalformedProviderJson { .. } => "MALFORMED_PROVIDER_JSON",
            TravelError::SchemaViolation(_) => "SCHEMA_VIOLATION",
            TravelError::Provider(_) => "PROVIDER_ERROR",
            TravelError::Serialization(_) => "SERIALIZATION_ERROR",
            TravelError::Unknown(_) => "UNKNOWN_ERROR",
        }
    }

    /// Raw provider payload kept for diagnostics, if any
    pub fn raw_payload(&self) -> Option<&Value> {
        match self {
            TravelError::MalformedProviderJson { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> Value {
        serde_json::json!({
            "status": "failed",
            "error": {
                "code": self.error_code(),
                "message": self.to_string()
            }
        })
    }
}
