use crate::model::Recipe;

/// Recipes flagged as favorite, in their original order
pub fn select_favorites(recipes: &[Recipe]) -> Vec<Recipe> {
    recipes.iter().filter(|r| r.favorite).cloned().collect()
}

/// Recipes whose category equals `category` exactly, in their original order
pub fn recipes_in_category(recipes: &[Recipe], category: &str) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|r| r.category == category)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecipeDraft;

    fn recipe(id: u64, category: &str, favorite: bool) -> Recipe {
        RecipeDraft {
            favorite,
            ..RecipeDraft::new(format!("Recipe {}", id), category)
        }
        .with_id(id)
    }

    #[test]
    fn test_favorites_keep_order() {
        let input = vec![
            recipe(1, "Main Course", true),
            recipe(2, "Dessert", false),
            recipe(3, "Dessert", true),
            recipe(4, "Soup", false),
        ];
        let favorites = select_favorites(&input);
        let ids: Vec<u64> = favorites.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(favorites.iter().all(|r| r.favorite));
        // input untouched
        assert_eq!(input.len(), 4);
    }

    #[test]
    fn test_no_favorites() {
        assert!(select_favorites(&[]).is_empty());
        assert!(select_favorites(&[recipe(1, "Soup", false)]).is_empty());
    }

    #[test]
    fn test_recipes_in_category() {
        let input = vec![
            recipe(1, "Dessert", false),
            recipe(2, "dessert", false),
            recipe(3, "Main Course", true),
            recipe(4, "Dessert", true),
        ];
        let ids: Vec<u64> = recipes_in_category(&input, "Dessert")
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 4]);
        assert!(recipes_in_category(&input, "Breakfast").is_empty());
    }
}
