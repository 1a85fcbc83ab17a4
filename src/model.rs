use serde::{Deserialize, Serialize};

/// Backend-assigned recipe identifier
pub type RecipeId = u64;

/// One catalog entry as served by the backend.
///
/// Text fields a record leaves out deserialize as empty strings and a missing
/// `favorite` flag as `false`; the `id` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    /// Formatted text, not a structured list
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub favorite: bool,
}

/// A recipe that has not been stored yet; the backend assigns the id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub name: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub ingredients: String,
    pub instructions: String,
    pub author: String,
    pub favorite: bool,
}

impl Recipe {
    /// Editable copy of this recipe without its identity
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            category: self.category.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            author: self.author.clone(),
            favorite: self.favorite,
        }
    }
}

impl RecipeDraft {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    /// Attach the identity the backend handed out
    pub fn with_id(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            name: self.name,
            description: self.description,
            image: self.image,
            category: self.category,
            ingredients: self.ingredients,
            instructions: self.instructions,
            author: self.author,
            favorite: self.favorite,
        }
    }
}
