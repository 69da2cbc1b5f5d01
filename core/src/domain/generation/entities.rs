use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::generation::errors::GenerationError;

/// A recipe exactly as the provider returned it.
///
/// The document is not deep-validated: missing or oddly typed fields are
/// passed through untouched and the accessors below return `None` for them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipe(Value);

impl Recipe {
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.0.get("description").and_then(Value::as_str)
    }

    pub fn ingredients(&self) -> Vec<&str> {
        string_items(self.0.get("ingredients"))
    }

    pub fn instructions(&self) -> Vec<&str> {
        string_items(self.0.get("instructions"))
    }

    pub fn prep_time(&self) -> Option<&str> {
        self.0.get("prepTime").and_then(Value::as_str)
    }

    pub fn cook_time(&self) -> Option<&str> {
        self.0.get("cookTime").and_then(Value::as_str)
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.0
            .get("difficulty")
            .and_then(Value::as_str)
            .and_then(|d| d.parse().ok())
    }

    pub fn servings(&self) -> Option<u32> {
        self.0
            .get("servings")
            .and_then(Value::as_u64)
            .filter(|s| *s > 0)
            .and_then(|s| u32::try_from(s).ok())
    }

    pub fn is_object(&self) -> bool {
        self.0.is_object()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

/// A generated meal plan: an object whose `mealPlan` field is an array.
///
/// Only obtainable through [`TryFrom<Value>`], so holding one means the
/// top-level shape has been checked. Everything below the top level is kept
/// as returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Value", try_from = "Value")]
pub struct MealPlan(Value);

impl MealPlan {
    /// The echoed preferences, when present and well formed.
    pub fn summary(&self) -> Option<MealPlanSummary> {
        self.0
            .get("summary")
            .cloned()
            .and_then(|s| serde_json::from_value(s).ok())
    }

    pub fn days(&self) -> Vec<DayPlan<'_>> {
        self.0
            .get("mealPlan")
            .and_then(Value::as_array)
            .map(|days| days.iter().map(DayPlan).collect())
            .unwrap_or_default()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl TryFrom<Value> for MealPlan {
    type Error = GenerationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let has_days = value
            .get("mealPlan")
            .map(Value::is_array)
            .unwrap_or(false);

        if !has_days {
            return Err(GenerationError::Shape(
                "Invalid meal plan structure received".to_string(),
            ));
        }

        Ok(Self(value))
    }
}

impl From<MealPlan> for Value {
    fn from(plan: MealPlan) -> Self {
        plan.0
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanSummary {
    pub total_days: Option<u32>,
    pub meals_per_day: Option<u32>,
    pub daily_calorie_goal: Option<u32>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    pub cuisine_preference: Option<String>,
}

/// Borrowed view over one day of a [`MealPlan`].
#[derive(Debug, Clone, Copy)]
pub struct DayPlan<'a>(&'a Value);

impl<'a> DayPlan<'a> {
    pub fn day(&self) -> Option<u64> {
        self.0.get("day").and_then(Value::as_u64)
    }

    pub fn date(&self) -> Option<&'a str> {
        self.0.get("date").and_then(Value::as_str)
    }

    pub fn meals(&self) -> Vec<Meal<'a>> {
        self.0
            .get("meals")
            .and_then(Value::as_array)
            .map(|meals| meals.iter().map(Meal).collect())
            .unwrap_or_default()
    }

    pub fn daily_total(&self) -> DailyTotal {
        self.0
            .get("dailyTotal")
            .cloned()
            .and_then(|t| serde_json::from_value(t).ok())
            .unwrap_or_default()
    }
}

/// Borrowed view over one meal of a [`DayPlan`].
#[derive(Debug, Clone, Copy)]
pub struct Meal<'a>(&'a Value);

impl<'a> Meal<'a> {
    pub fn meal_type(&self) -> Option<&'a str> {
        self.0.get("mealType").and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&'a str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&'a str> {
        self.0.get("description").and_then(Value::as_str)
    }

    pub fn ingredients(&self) -> Vec<&'a str> {
        string_items(self.0.get("ingredients"))
    }

    pub fn instructions(&self) -> Vec<&'a str> {
        string_items(self.0.get("instructions"))
    }

    pub fn calories(&self) -> Option<f64> {
        self.0.get("calories").and_then(Value::as_f64)
    }

    pub fn macros(&self) -> Macros {
        self.0
            .get("macros")
            .cloned()
            .and_then(|m| serde_json::from_value(m).ok())
            .unwrap_or_default()
    }

    pub fn prep_time(&self) -> Option<&'a str> {
        self.0.get("prepTime").and_then(Value::as_str)
    }

    pub fn cook_time(&self) -> Option<&'a str> {
        self.0.get("cookTime").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Macros {
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fats: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyTotal {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fats: Option<f64>,
}

fn string_items(value: Option<&Value>) -> Vec<&str> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn recipe_accessors_tolerate_missing_and_mistyped_fields() {
        let recipe = Recipe::new(json!({
            "name": "Tomato Soup",
            "ingredients": ["2 tomatoes", 3, "1 onion"],
            "difficulty": "mEdIuM",
            "servings": "four"
        }));

        assert_eq!(recipe.name(), Some("Tomato Soup"));
        assert_eq!(recipe.description(), None);
        assert_eq!(recipe.ingredients(), vec!["2 tomatoes", "1 onion"]);
        assert!(recipe.instructions().is_empty());
        assert_eq!(recipe.difficulty(), Some(Difficulty::Medium));
        assert_eq!(recipe.servings(), None);
    }

    #[test]
    fn recipe_serializes_unknown_fields_unchanged() {
        let document = json!({"name": "A", "chefNotes": {"spicy": true}});
        let recipe: Recipe = serde_json::from_value(document.clone()).unwrap();

        assert_eq!(serde_json::to_value(&recipe).unwrap(), document);
    }

    #[test]
    fn meal_plan_requires_meal_plan_array() {
        assert!(MealPlan::try_from(json!({"mealPlan": []})).is_ok());
        assert!(matches!(
            MealPlan::try_from(json!({"mealPlan": {"day": 1}})),
            Err(GenerationError::Shape(_))
        ));
        assert!(matches!(
            MealPlan::try_from(json!([])),
            Err(GenerationError::Shape(_))
        ));
    }

    #[test]
    fn meal_plan_views_read_nested_documents() {
        let plan = MealPlan::try_from(json!({
            "summary": {"totalDays": 1, "mealsPerDay": 1, "dietaryRestrictions": ["Vegan"]},
            "mealPlan": [{
                "day": 1,
                "date": "Day 1",
                "meals": [{
                    "mealType": "Breakfast",
                    "name": "Oats",
                    "calories": 350,
                    "macros": {"protein": 12, "carbs": 60.5, "fats": 7}
                }],
                "dailyTotal": {"calories": 350}
            }]
        }))
        .unwrap();

        let summary = plan.summary().unwrap();
        assert_eq!(summary.total_days, Some(1));
        assert_eq!(summary.dietary_restrictions, vec!["Vegan".to_string()]);

        let days = plan.days();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date(), Some("Day 1"));
        assert_eq!(days[0].daily_total().calories, Some(350.0));
        assert_eq!(days[0].daily_total().protein, None);

        let meals = days[0].meals();
        assert_eq!(meals[0].meal_type(), Some("Breakfast"));
        assert_eq!(meals[0].calories(), Some(350.0));
        assert_eq!(meals[0].macros().carbs, Some(60.5));
    }

    #[test]
    fn meal_plan_deserialization_runs_shape_check() {
        let err = serde_json::from_value::<MealPlan>(json!({"summary": {}}));
        assert!(err.is_err());
    }
}
