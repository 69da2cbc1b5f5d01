use chefai_core::domain::generation::value_objects::{DEFAULT_CUISINE, MealPlanPreferences};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

fn default_cuisine() -> String {
    DEFAULT_CUISINE.to_string()
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMealPlanValidator {
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,

    #[validate(
        required(message = "Daily calorie goal must be a number between 500 and 10000"),
        range(
            min = 500,
            max = 10000,
            message = "Daily calorie goal must be a number between 500 and 10000"
        )
    )]
    pub daily_calorie_goal: Option<i64>,

    #[validate(
        required(message = "Number of days must be between 1 and 30"),
        range(min = 1, max = 30, message = "Number of days must be between 1 and 30")
    )]
    pub number_of_days: Option<i64>,

    #[validate(
        required(message = "Meals per day must be between 1 and 6"),
        range(min = 1, max = 6, message = "Meals per day must be between 1 and 6")
    )]
    pub meals_per_day: Option<i64>,

    #[serde(default = "default_cuisine")]
    pub cuisine_preference: String,
}

/// Only called after `validate`, which guarantees a present, in-range value.
fn bounded(value: Option<i64>) -> u32 {
    value
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or_default()
}

impl TryFrom<GenerateMealPlanValidator> for MealPlanPreferences {
    type Error = ApiError;

    fn try_from(payload: GenerateMealPlanValidator) -> Result<Self, Self::Error> {
        payload.validate()?;

        Ok(MealPlanPreferences {
            dietary_restrictions: payload.dietary_restrictions,
            daily_calorie_goal: bounded(payload.daily_calorie_goal),
            number_of_days: bounded(payload.number_of_days),
            meals_per_day: bounded(payload.meals_per_day),
            cuisine_preference: payload.cuisine_preference,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload(value: serde_json::Value) -> GenerateMealPlanValidator {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_optional_fields_default() {
        let payload = payload(json!({
            "dailyCalorieGoal": 2000,
            "numberOfDays": 7,
            "mealsPerDay": 3
        }));

        assert!(payload.validate().is_ok());

        let preferences = MealPlanPreferences::try_from(payload).unwrap();
        assert!(preferences.dietary_restrictions.is_empty());
        assert_eq!(preferences.cuisine_preference, "Any");
        assert_eq!(preferences.number_of_days, 7);
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let errors = payload(json!({
            "dailyCalorieGoal": 200,
            "numberOfDays": 31,
            "mealsPerDay": 0
        }))
        .validate()
        .unwrap_err();

        let fields = errors.field_errors();
        assert!(fields.contains_key("daily_calorie_goal"));
        assert!(fields.contains_key("number_of_days"));
        assert!(fields.contains_key("meals_per_day"));
    }

    #[test]
    fn test_missing_value_is_rejected() {
        let errors = payload(json!({"dailyCalorieGoal": 2000, "mealsPerDay": 3}))
            .validate()
            .unwrap_err();

        let message = errors.field_errors()["number_of_days"][0]
            .message
            .clone()
            .unwrap();
        assert_eq!(message, "Number of days must be between 1 and 30");
    }

    #[test]
    fn test_conversion_reports_the_validation_message() {
        let err = MealPlanPreferences::try_from(payload(json!({
            "dailyCalorieGoal": 2000,
            "numberOfDays": 7,
            "mealsPerDay": 9
        })))
        .unwrap_err();

        assert!(
            matches!(err, ApiError::BadRequest(message) if message == "Meals per day must be between 1 and 6")
        );
    }
}
