pub mod builder;
pub mod collection;
pub mod config;
pub mod detail;
pub mod error;
pub mod model;
pub mod navigation;
pub mod repository;
pub mod sources;
pub mod views;

pub use builder::{RecipeCatalog, RecipeCatalogBuilder};
pub use collection::{aggregate, recipes_in_category, select_favorites, CategoryCount};
pub use config::{load_config, CatalogConfig};
pub use detail::{category_of, DetailState, RecipeDetailResolver};
pub use error::{CatalogError, FetchError};
pub use model::{Recipe, RecipeDraft, RecipeId};
pub use navigation::{browse_by_category, NavigationTarget};
pub use repository::RecipeRepository;
pub use sources::{HttpSource, RecipeSource, SourceError};

/// Fetch every recipe from the API at `base_url`
pub async fn fetch_recipes(base_url: &str) -> Result<Vec<Recipe>, CatalogError> {
    RecipeCatalog::builder()
        .base_url(base_url)
        .build()?
        .recipes()
        .await
}

/// Fetch one recipe from the API at `base_url`
pub async fn fetch_recipe(base_url: &str, id: RecipeId) -> Result<Recipe, CatalogError> {
    RecipeCatalog::builder()
        .base_url(base_url)
        .build()?
        .repository()
        .get_by_id(id)
        .await
}
