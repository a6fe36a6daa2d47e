//! Application error types

use serde::Serialize;
use thiserror::Error;

/// The four remote resources the dashboard reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Insights,
    Metrics,
    Sleep,
    Journal,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Resource::Insights => "insights",
            Resource::Metrics => "metrics",
            Resource::Sleep => "sleep",
            Resource::Journal => "journal",
        };
        f.write_str(name)
    }
}

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Fetch failed for {resource}: {source}")]
    Fetch {
        resource: Resource,
        #[source]
        source: Box<AppError>,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Tag an error with the remote resource whose read produced it
    pub fn for_resource(self, resource: Resource) -> AppError {
        AppError::Fetch {
            resource,
            source: Box::new(self),
        }
    }

    /// The failed resource, if this is a fetch failure
    pub fn failed_resource(&self) -> Option<Resource> {
        match self {
            AppError::Fetch { resource, .. } => Some(*resource),
            _ => None,
        }
    }
}

/// Serializable error response for frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let code = match err {
            AppError::Http(_) => "HTTP_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Api { .. } => "API_ERROR",
            AppError::Fetch { .. } => "FETCH_FAILED",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        };

        ErrorResponse {
            code: code.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        ErrorResponse::from(&err)
    }
}

// Allow AppError to be returned from Tauri commands
impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        ErrorResponse::from(self).serialize(serializer)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
