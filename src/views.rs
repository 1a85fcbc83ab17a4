//! What a view shows for empty, missing and failed data.

use crate::collection::{aggregate, select_favorites, CategoryCount};
use crate::error::CatalogError;
use crate::model::Recipe;

pub const NO_RECIPES_FOUND: &str = "No recipes found!";
pub const NO_FAVORITES_FOUND: &str = "No favorite recipes found!";
pub const RECIPE_NOT_FOUND: &str = "Recipe not found";
pub const FETCH_ERROR: &str = "Error fetching recipes";

/// Renderable outcome of a collection fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionView<T> {
    /// At least one item to show
    Items(Vec<T>),
    /// The fetch succeeded but there is nothing to show
    Empty(&'static str),
    /// The fetch failed
    Failed(&'static str),
}

impl<T> CollectionView<T> {
    fn from_items(items: Vec<T>, empty_message: &'static str) -> Self {
        if items.is_empty() {
            CollectionView::Empty(empty_message)
        } else {
            CollectionView::Items(items)
        }
    }

    /// Message to show instead of items, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            CollectionView::Items(_) => None,
            CollectionView::Empty(message) | CollectionView::Failed(message) => Some(*message),
        }
    }

    /// One line per item, or the message when there are no items
    pub fn lines(&self, line: impl Fn(&T) -> String) -> Vec<String> {
        match self {
            CollectionView::Items(items) => items.iter().map(line).collect(),
            CollectionView::Empty(message) | CollectionView::Failed(message) => {
                vec![message.to_string()]
            }
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            CollectionView::Items(items) => items,
            _ => &[],
        }
    }
}

/// The full recipe list
pub fn recipe_list(result: Result<Vec<Recipe>, CatalogError>) -> CollectionView<Recipe> {
    match result {
        Ok(recipes) => CollectionView::from_items(recipes, NO_RECIPES_FOUND),
        Err(e) => CollectionView::Failed(e.user_message()),
    }
}

/// The favorites subset of a fetched collection
pub fn favorites(result: Result<Vec<Recipe>, CatalogError>) -> CollectionView<Recipe> {
    match result {
        Ok(recipes) => CollectionView::from_items(select_favorites(&recipes), NO_FAVORITES_FOUND),
        Err(e) => CollectionView::Failed(e.user_message()),
    }
}

/// The category breakdown of a fetched collection
pub fn categories(result: Result<Vec<Recipe>, CatalogError>) -> CollectionView<CategoryCount> {
    match result {
        Ok(recipes) => CollectionView::from_items(aggregate(&recipes), NO_RECIPES_FOUND),
        Err(e) => CollectionView::Failed(e.user_message()),
    }
}
