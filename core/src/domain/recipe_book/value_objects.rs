use crate::domain::recipe_book::entities::SavedRecipe;

/// Outcome of toggling a recipe in the favorites collection.
#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteToggle {
    Added(SavedRecipe),
    Removed,
}
