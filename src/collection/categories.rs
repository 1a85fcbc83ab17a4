use crate::model::Recipe;
use serde::Serialize;
use std::collections::HashMap;

/// Number of recipes sharing one category label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

impl CategoryCount {
    /// "1 recipe" / "2 recipes"
    pub fn label(&self) -> String {
        if self.count == 1 {
            "1 recipe".to_string()
        } else {
            format!("{} recipes", self.count)
        }
    }
}

/// Count recipes per category in order of first appearance.
///
/// Categories are compared byte for byte: "dessert" and "Dessert" are two
/// categories, and "" is a category like any other.
pub fn aggregate(recipes: &[Recipe]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for recipe in recipes {
        match index.get(recipe.category.as_str()) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(&recipe.category, counts.len());
                counts.push(CategoryCount {
                    category: recipe.category.clone(),
                    count: 1,
                });
            }
        }
    }

    counts
}
