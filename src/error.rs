use thiserror::Error;

use crate::model::RecipeId;
use crate::views::{FETCH_ERROR, RECIPE_NOT_FOUND};

/// Failures that leave the user looking at a generic error message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The backend answered with a non-success status code
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a status code (connection, timeout, ...)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body did not have the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Malformed(err.to_string())
    }
}

/// Errors that can occur while working with the recipe catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The requested recipe does not exist on the backend
    #[error("Recipe not found: {0}")]
    NotFound(RecipeId),

    /// Network, server or payload failure
    #[error("Failed to fetch recipes: {0}")]
    FetchError(#[from] FetchError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// The HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),
}

impl CatalogError {
    /// Text a view shows for this error
    pub fn user_message(&self) -> &'static str {
        match self {
            CatalogError::NotFound(_) => RECIPE_NOT_FOUND,
            _ => FETCH_ERROR,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}
