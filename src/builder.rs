use std::sync::Arc;
use std::time::Duration;

use crate::{
    collection::{aggregate, recipes_in_category, select_favorites, CategoryCount},
    CatalogConfig, CatalogError, HttpSource, Recipe, RecipeDetailResolver, RecipeRepository,
    RecipeSource,
};

/// Builder for configuring a [`RecipeCatalog`]
#[derive(Default)]
pub struct RecipeCatalogBuilder {
    config: Option<CatalogConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    source: Option<Arc<dyn RecipeSource>>,
}

impl RecipeCatalogBuilder {
    /// Start from a loaded configuration; individual setters still win
    ///
    /// # Example
    /// ```no_run
    /// use recipe_catalog::{CatalogConfig, RecipeCatalog};
    ///
    /// let config = CatalogConfig::load().unwrap();
    /// let builder = RecipeCatalog::builder().config(config);
    /// ```
    pub fn config(mut self, config: CatalogConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the base URL of the recipe API
    ///
    /// # Example
    /// ```
    /// use recipe_catalog::RecipeCatalog;
    ///
    /// let builder = RecipeCatalog::builder()
    ///     .base_url("http://localhost:3000");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom request client instead of HTTP.
    ///
    /// Cannot be combined with `base_url`, `timeout` or `user_agent`.
    pub fn source(mut self, source: impl RecipeSource + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Build the catalog
    ///
    /// # Errors
    /// Returns `CatalogError` if:
    /// - HTTP settings are combined with a custom source
    /// - The HTTP client cannot be constructed
    pub fn build(self) -> Result<RecipeCatalog, CatalogError> {
        if let Some(source) = self.source {
            if self.base_url.is_some() || self.timeout.is_some() || self.user_agent.is_some() {
                return Err(CatalogError::BuilderError(
                    "HTTP settings cannot be combined with a custom source".to_string(),
                ));
            }
            return Ok(RecipeCatalog {
                repository: RecipeRepository::from_shared(source),
            });
        }

        let mut config = self.config.unwrap_or_default();
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }
        let timeout = self.timeout.unwrap_or_else(|| config.request_timeout());

        let source = HttpSource::new(
            config.base_url,
            Some(timeout),
            Some(config.user_agent.as_str()),
        )?;
        Ok(RecipeCatalog {
            repository: RecipeRepository::new(source),
        })
    }
}

/// Entry point tying the repository to the collection views
pub struct RecipeCatalog {
    repository: RecipeRepository,
}

impl RecipeCatalog {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use recipe_catalog::RecipeCatalog;
    ///
    /// let builder = RecipeCatalog::builder();
    /// ```
    pub fn builder() -> RecipeCatalogBuilder {
        RecipeCatalogBuilder::default()
    }

    pub fn repository(&self) -> &RecipeRepository {
        &self.repository
    }

    /// Every recipe
    pub async fn recipes(&self) -> Result<Vec<Recipe>, CatalogError> {
        self.repository.list_all().await
    }

    /// Favorite recipes
    pub async fn favorites(&self) -> Result<Vec<Recipe>, CatalogError> {
        let recipes = self.repository.list_all().await?;
        Ok(select_favorites(&recipes))
    }

    /// Recipe count per category, in order of first appearance
    pub async fn categories(&self) -> Result<Vec<CategoryCount>, CatalogError> {
        let recipes = self.repository.list_all().await?;
        Ok(aggregate(&recipes))
    }

    /// Recipes of one category
    pub async fn recipes_in_category(&self, category: &str) -> Result<Vec<Recipe>, CatalogError> {
        let recipes = self.repository.list_all().await?;
        Ok(recipes_in_category(&recipes, category))
    }

    /// A fresh resolver for a detail view
    pub fn detail_resolver(&self) -> RecipeDetailResolver {
        RecipeDetailResolver::new(self.repository.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_defaults() {
        assert!(RecipeCatalog::builder().build().is_ok());
    }

    #[test]
    fn test_source_with_http_settings_is_rejected() {
        let source = HttpSource::new("http://localhost:3000", None, None).unwrap();
        let result = RecipeCatalog::builder()
            .source(source)
            .timeout(Duration::from_secs(5))
            .build();

        match result {
            Err(CatalogError::BuilderError(msg)) => assert!(msg.contains("custom source")),
            _ => panic!("Expected BuilderError"),
        }
    }
}
