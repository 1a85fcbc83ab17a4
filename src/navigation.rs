use crate::model::RecipeId;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside one path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Where a view wants to go next.
///
/// The catalog only describes destinations; performing the navigation is up
/// to whatever router the caller uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    Recipes,
    Favorites,
    Categories,
    RecipeDetail(RecipeId),
    RecipesByCategory(String),
    EditRecipe(RecipeId),
    CreateRecipe,
}

impl NavigationTarget {
    /// Route name of the destination
    pub fn name(&self) -> &'static str {
        match self {
            NavigationTarget::Recipes => "recipes-composition-api",
            NavigationTarget::Favorites => "favorites",
            NavigationTarget::Categories => "category",
            NavigationTarget::RecipeDetail(_) => "recipe-detail",
            NavigationTarget::RecipesByCategory(_) => "RecipesByCategory",
            NavigationTarget::EditRecipe(_) => "edit-recipe",
            NavigationTarget::CreateRecipe => "create-recipe",
        }
    }

    /// Path of the destination with every segment percent-encoded
    pub fn path(&self) -> String {
        let id;
        let segments: Vec<&str> = match self {
            NavigationTarget::Recipes => vec!["recipes-composition-api"],
            NavigationTarget::Favorites => vec!["favorites"],
            NavigationTarget::Categories => vec!["category"],
            NavigationTarget::RecipeDetail(recipe_id) => {
                id = recipe_id.to_string();
                vec!["recipes", id.as_str()]
            }
            NavigationTarget::RecipesByCategory(category) => {
                vec!["recipes", "category", category.as_str()]
            }
            NavigationTarget::EditRecipe(recipe_id) => {
                id = recipe_id.to_string();
                vec!["recipes", id.as_str(), "edit"]
            }
            NavigationTarget::CreateRecipe => vec!["create-recipe"],
        };
        encode_path(&segments)
    }
}

/// Destination for "browse recipes in this category"
pub fn browse_by_category(category: &str) -> NavigationTarget {
    NavigationTarget::RecipesByCategory(category.to_string())
}

fn encode_path(segments: &[&str]) -> String {
    segments.iter().map(|segment| format!("/{}", encode_segment(segment))).collect()
}

/// Dot-only segments are escaped too, so "." and ".." stay a category
fn encode_segment(segment: &str) -> String {
    if !segment.is_empty() && segment.bytes().all(|b| b == b'.') {
        return "%2E".repeat(segment.len());
    }
    utf8_percent_encode(segment, SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_by_category() {
        let target = browse_by_category("Dessert");
        assert_eq!(target.name(), "RecipesByCategory");
        assert_eq!(target.path(), "/recipes/category/Dessert");
    }

    #[test]
    fn test_category_segment_is_encoded() {
        assert_eq!(
            browse_by_category("Main Course").path(),
            "/recipes/category/Main%20Course"
        );
        assert_eq!(
            browse_by_category("Soup/Stew").path(),
            "/recipes/category/Soup%2FStew"
        );
        assert_eq!(
            browse_by_category("Crème brûlée").path(),
            "/recipes/category/Cr%C3%A8me%20br%C3%BBl%C3%A9e"
        );
    }

    #[test]
    fn test_dot_only_category_keeps_its_segment() {
        assert_eq!(browse_by_category(".").path(), "/recipes/category/%2E");
        assert_eq!(browse_by_category("..").path(), "/recipes/category/%2E%2E");
        assert_eq!(browse_by_category("v1.2").path(), "/recipes/category/v1.2");
    }

    #[test]
    fn test_recipe_paths() {
        assert_eq!(NavigationTarget::RecipeDetail(12).path(), "/recipes/12");
        assert_eq!(NavigationTarget::EditRecipe(12).path(), "/recipes/12/edit");
        assert_eq!(NavigationTarget::Favorites.path(), "/favorites");
        assert_eq!(NavigationTarget::Categories.name(), "category");
    }
}
