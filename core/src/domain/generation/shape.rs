use serde_json::Value;
use tracing::debug;

use crate::domain::generation::{
    entities::{MealPlan, Recipe},
    errors::GenerationError,
};

/// Recipe lists longer than this are truncated, never rejected.
pub const MAX_RECIPES: usize = 5;

pub fn validate_recipes(value: Value) -> Result<Vec<Recipe>, GenerationError> {
    let Value::Array(items) = value else {
        return Err(GenerationError::Shape(
            "Response is not an array of recipes".to_string(),
        ));
    };

    if items.len() > MAX_RECIPES {
        debug!("Truncating {} recipes to {}", items.len(), MAX_RECIPES);
    }

    Ok(items
        .into_iter()
        .take(MAX_RECIPES)
        .map(Recipe::new)
        .collect())
}

pub fn validate_meal_plan(value: Value) -> Result<MealPlan, GenerationError> {
    MealPlan::try_from(value)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_recipes_are_truncated_to_five() {
        let items: Vec<Value> = (0..8).map(|i| json!({"name": format!("R{i}")})).collect();
        let recipes = validate_recipes(Value::Array(items)).unwrap();

        assert_eq!(recipes.len(), MAX_RECIPES);
        assert_eq!(recipes[0].name(), Some("R0"));
        assert_eq!(recipes[4].name(), Some("R4"));
    }

    #[test]
    fn test_short_and_empty_lists_pass_through() {
        assert_eq!(validate_recipes(json!([{"name": "A"}])).unwrap().len(), 1);
        assert!(validate_recipes(json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_non_array_is_rejected() {
        let err = validate_recipes(json!({"recipes": []})).unwrap_err();
        assert_eq!(
            err,
            GenerationError::Shape("Response is not an array of recipes".to_string())
        );
    }

    #[test]
    fn test_meal_plan_shape() {
        assert!(validate_meal_plan(json!({"mealPlan": [{"day": 1}]})).is_ok());

        let err = validate_meal_plan(json!({"days": []})).unwrap_err();
        assert_eq!(
            err,
            GenerationError::Shape("Invalid meal plan structure received".to_string())
        );
    }
}
