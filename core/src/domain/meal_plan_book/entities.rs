use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::domain::{
    common::{generate_public_id, generate_timestamp, generate_uuid_v7},
    generation::entities::MealPlan,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SavedMealPlan {
    pub id: Uuid,
    pub meal_plan_id: String,
    pub user_id: Uuid,
    pub title: String,
    pub meal_plan: MealPlan,
    pub saved_at: DateTime<Utc>,
}

impl SavedMealPlan {
    /// A blank or missing title falls back to [`default_title`].
    pub fn new(user_id: Uuid, meal_plan: MealPlan, title: Option<String>) -> Self {
        let (now, _) = generate_timestamp();
        let title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| default_title(&meal_plan));

        Self {
            id: generate_uuid_v7(),
            meal_plan_id: generate_public_id(),
            user_id,
            title,
            meal_plan,
            saved_at: now,
        }
    }

    pub fn into_document(self) -> Value {
        json!({
            "mealPlanId": self.meal_plan_id,
            "title": self.title,
            "mealPlan": Value::from(self.meal_plan),
            "savedAt": self.saved_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}

pub fn default_title(meal_plan: &MealPlan) -> String {
    match meal_plan.summary().and_then(|s| s.total_days) {
        Some(days) => format!("Meal Plan - {days} Days"),
        None => "Meal Plan".to_string(),
    }
}
