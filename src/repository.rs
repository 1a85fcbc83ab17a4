use crate::error::{CatalogError, FetchError};
use crate::model::{Recipe, RecipeDraft, RecipeId};
use crate::sources::{RecipeSource, SourceError};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Status code the backend uses for a missing resource
const NOT_FOUND: u16 = 404;

/// Typed access to the recipe backend.
///
/// Each call issues exactly one request; nothing is cached or retried. This is
/// the only place where [`SourceError`]s are translated into [`CatalogError`]s.
#[derive(Clone)]
pub struct RecipeRepository {
    source: Arc<dyn RecipeSource>,
}

impl RecipeRepository {
    pub fn new(source: impl RecipeSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    pub fn from_shared(source: Arc<dyn RecipeSource>) -> Self {
        Self { source }
    }

    /// Fetch every recipe, in backend order. An empty catalog is `Ok(vec![])`.
    pub async fn list_all(&self) -> Result<Vec<Recipe>, CatalogError> {
        debug!("Fetching all recipes from {}", self.source.source_name());
        let body = self.source.get("/recipes").await.map_err(|e| {
            warn!("Fetching recipes failed: {}", e);
            fetch_error(e)
        })?;

        let recipes: Vec<Recipe> = parse(&body)?;
        debug!("Fetched {} recipes", recipes.len());
        Ok(recipes)
    }

    /// Fetch one recipe; a 404 becomes [`CatalogError::NotFound`]
    pub async fn get_by_id(&self, id: RecipeId) -> Result<Recipe, CatalogError> {
        debug!("Fetching recipe {}", id);
        let body = self
            .source
            .get(&recipe_path(id))
            .await
            .map_err(|e| classify(id, e))?;

        Ok(parse(&body)?)
    }

    /// Store a new recipe and return it with the id the backend assigned
    pub async fn create(&self, draft: &RecipeDraft) -> Result<Recipe, CatalogError> {
        let body = serde_json::to_string(draft).map_err(FetchError::from)?;
        let response = self
            .source
            .post("/recipes", body)
            .await
            .map_err(fetch_error)?;

        let created: Recipe = parse(&response)?;
        debug!("Created recipe {} ({})", created.id, created.name);
        Ok(created)
    }

    /// Replace a stored recipe
    pub async fn update(&self, recipe: &Recipe) -> Result<Recipe, CatalogError> {
        let body = serde_json::to_string(recipe).map_err(FetchError::from)?;
        let response = self
            .source
            .put(&recipe_path(recipe.id), body)
            .await
            .map_err(|e| classify(recipe.id, e))?;

        Ok(parse(&response)?)
    }
}

fn recipe_path(id: RecipeId) -> String {
    format!("/recipes/{}", id)
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| {
        warn!("Malformed recipe payload: {}", e);
        FetchError::from(e)
    })
}

/// Failures without a status code are transport failures, never "not found"
fn fetch_error(err: SourceError) -> CatalogError {
    let fetch = match err.status {
        Some(status) => FetchError::Status {
            status,
            message: err.message,
        },
        None => FetchError::Transport(err.message),
    };
    CatalogError::FetchError(fetch)
}

fn classify(id: RecipeId, err: SourceError) -> CatalogError {
    if err.status == Some(NOT_FOUND) {
        debug!("Recipe {} not found", id);
        return CatalogError::NotFound(id);
    }
    warn!("Fetching recipe {} failed: {}", id, err);
    fetch_error(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_not_found() {
        let err = classify(4, SourceError::status(404, "Not Found"));
        assert!(matches!(err, CatalogError::NotFound(4)));
    }

    #[test]
    fn test_classify_other_status() {
        let err = classify(4, SourceError::status(500, "Internal Server Error"));
        assert!(matches!(
            err,
            CatalogError::FetchError(FetchError::Status { status: 500, .. })
        ));
    }

    #[test]
    fn test_classify_missing_status_is_transport() {
        let err = classify(4, SourceError::transport("connection reset"));
        assert!(matches!(
            err,
            CatalogError::FetchError(FetchError::Transport(_))
        ));
    }

    #[test]
    fn test_list_404_is_not_a_missing_recipe() {
        let err = fetch_error(SourceError::status(404, "Not Found"));
        assert!(!err.is_not_found());
    }
}
