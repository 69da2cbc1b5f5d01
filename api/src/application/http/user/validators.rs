use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileValidator {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub avatar: Option<String>,

    #[serde(default)]
    pub dark_mode: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordValidator {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,

    #[validate(length(min = 6, message = "New password must be at least 6 characters"))]
    pub new_password: String,
}

/// `recipe` is kept as sent; the service rejects anything but an object.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecipeBodyValidator {
    #[serde(default)]
    #[schema(value_type = Object)]
    pub recipe: Value,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveMealPlanValidator {
    #[serde(default)]
    #[schema(value_type = Object)]
    pub meal_plan: Value,

    #[serde(default)]
    pub title: Option<String>,
}
