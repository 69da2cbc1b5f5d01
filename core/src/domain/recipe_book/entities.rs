use std::{fmt, str::FromStr};

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::{
    common::{generate_public_id, generate_timestamp, generate_uuid_v7},
    generation::entities::Recipe,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeCollection {
    Saved,
    Favorite,
}

impl RecipeCollection {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeCollection::Saved => "SAVED",
            RecipeCollection::Favorite => "FAVORITE",
        }
    }

    /// Document key carrying the moment the recipe entered the collection.
    pub fn timestamp_field(&self) -> &'static str {
        match self {
            RecipeCollection::Saved => "savedAt",
            RecipeCollection::Favorite => "favoritedAt",
        }
    }
}

impl FromStr for RecipeCollection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SAVED" => Ok(RecipeCollection::Saved),
            "FAVORITE" => Ok(RecipeCollection::Favorite),
            other => Err(format!("unknown recipe collection: {other}")),
        }
    }
}

impl fmt::Display for RecipeCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recipe kept in one of a user's collections.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedRecipe {
    pub id: Uuid,
    pub recipe_id: String,
    pub user_id: Uuid,
    pub collection: RecipeCollection,
    pub name: String,
    pub recipe: Recipe,
    pub saved_at: DateTime<Utc>,
}

impl SavedRecipe {
    pub fn new(user_id: Uuid, collection: RecipeCollection, recipe: Recipe) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_uuid_v7(),
            recipe_id: generate_public_id(),
            user_id,
            collection,
            name: recipe.name().unwrap_or_default().to_string(),
            recipe,
            saved_at: now,
        }
    }

    /// The recipe fields followed by `recipeId` and the collection timestamp.
    /// Stored identifiers win over same-named keys in the recipe itself.
    pub fn into_document(self) -> Value {
        let mut document = match self.recipe.into_value() {
            Value::Object(fields) => fields,
            _ => Default::default(),
        };

        document.insert("recipeId".to_string(), Value::String(self.recipe_id));
        document.insert(
            self.collection.timestamp_field().to_string(),
            Value::String(self.saved_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );

        Value::Object(document)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_collection_round_trips_through_column_value() {
        for collection in [RecipeCollection::Saved, RecipeCollection::Favorite] {
            assert_eq!(collection.as_str().parse::<RecipeCollection>(), Ok(collection));
        }
        assert!("BOOKMARK".parse::<RecipeCollection>().is_err());
    }

    #[test]
    fn test_saved_recipe_takes_name_from_recipe() {
        let saved = SavedRecipe::new(
            Uuid::new_v4(),
            RecipeCollection::Saved,
            Recipe::new(json!({"name": "Shakshuka"})),
        );

        assert_eq!(saved.name, "Shakshuka");
        assert!(saved.recipe_id.contains('_'));
    }

    #[test]
    fn test_document_merges_identifiers_into_recipe() {
        let saved = SavedRecipe::new(
            Uuid::new_v4(),
            RecipeCollection::Favorite,
            Recipe::new(json!({"name": "Pho", "recipeId": "from-model", "servings": 4})),
        );
        let recipe_id = saved.recipe_id.clone();

        let document = saved.into_document();

        assert_eq!(document["name"], json!("Pho"));
        assert_eq!(document["servings"], json!(4));
        assert_eq!(document["recipeId"], json!(recipe_id));
        assert!(document["favoritedAt"].as_str().unwrap().ends_with('Z'));
        assert!(document.get("savedAt").is_none());
    }
}
