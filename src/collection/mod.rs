//! Synchronous derivations over an already fetched recipe collection.
//!
//! Nothing here fails or mutates its input; an empty collection yields an
//! empty result.

mod categories;
mod filters;

pub use categories::{aggregate, CategoryCount};
pub use filters::{recipes_in_category, select_favorites};
