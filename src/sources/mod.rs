mod http;

pub use http::HttpSource;

use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a [`RecipeSource`].
///
/// `status` is the HTTP status code when the backend answered, `None` when
/// the request failed before a response arrived.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SourceError {
    pub status: Option<u16>,
    pub message: String,
}

impl SourceError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

/// Request client for the recipe backend; returns raw response bodies
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name (e.g., "http")
    fn source_name(&self) -> &str;

    /// Issue a GET request for `path` (e.g., "/recipes/1")
    async fn get(&self, path: &str) -> Result<String, SourceError>;

    /// Issue a POST request with a JSON body
    async fn post(&self, path: &str, _body: String) -> Result<String, SourceError> {
        Err(SourceError::transport(format!(
            "{} does not support POST {}",
            self.source_name(),
            path
        )))
    }

    /// Issue a PUT request with a JSON body
    async fn put(&self, path: &str, _body: String) -> Result<String, SourceError> {
        Err(SourceError::transport(format!(
            "{} does not support PUT {}",
            self.source_name(),
            path
        )))
    }
}
