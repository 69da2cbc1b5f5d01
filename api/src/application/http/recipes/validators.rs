use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

pub const MAX_INGREDIENTS: usize = 50;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipesValidator {
    #[validate(custom(function = "validate_ingredients"))]
    pub ingredients: Vec<String>,
}

fn validate_ingredients(ingredients: &[String]) -> Result<(), ValidationError> {
    let count = ingredients.iter().filter(|i| !i.trim().is_empty()).count();

    if count == 0 {
        return Err(ValidationError::new("ingredients")
            .with_message(Cow::from("Please provide at least one ingredient")));
    }

    if count > MAX_INGREDIENTS {
        return Err(ValidationError::new("ingredients").with_message(Cow::from(format!(
            "No more than {MAX_INGREDIENTS} ingredients are allowed"
        ))));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator(ingredients: Vec<&str>) -> GenerateRecipesValidator {
        GenerateRecipesValidator {
            ingredients: ingredients.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn test_blank_entries_do_not_count() {
        assert!(validator(vec!["  ", ""]).validate().is_err());
        assert!(validator(vec!["  ", "eggs"]).validate().is_ok());
    }

    #[test]
    fn test_ingredient_limit() {
        assert!(validator(vec!["salt"; MAX_INGREDIENTS]).validate().is_ok());
        assert!(
            validator(vec!["salt"; MAX_INGREDIENTS + 1])
                .validate()
                .is_err()
        );
    }
}
