//! Prompt construction for recipe and meal-plan generation.
//!
//! Both prompts embed a literal example of the JSON the model must return,
//! because providers follow an example far more reliably than a description.

use crate::domain::generation::value_objects::{
    DEFAULT_CUISINE, IngredientSet, MealPlanPreferences,
};

pub fn build_recipe_prompt(ingredients: &IngredientSet) -> String {
    let ingredient_list = ingredients.joined();

    format!(
        r#"You are a professional chef assistant. Given these ingredients: {ingredient_list}

Generate exactly 4-5 different creative recipes that can be made using these ingredients. You can assume basic pantry staples like salt, pepper, oil, and water are available.

For each recipe, provide:
1. Recipe name
2. Brief description (1-2 sentences)
3. Complete ingredient list with quantities
4. Step-by-step cooking instructions (numbered)
5. Preparation time
6. Cooking time
7. Difficulty level (Easy/Medium/Hard)
8. Number of servings

Format your response as a JSON array of recipe objects with this exact structure:
[
  {{
    "name": "Recipe Name",
    "description": "Brief description",
    "ingredients": [
      "1 cup ingredient1",
      "2 tbsp ingredient2"
    ],
    "instructions": [
      "Step 1 instruction",
      "Step 2 instruction"
    ],
    "prepTime": "15 minutes",
    "cookTime": "30 minutes",
    "difficulty": "Easy",
    "servings": 4
  }}
]

Return ONLY the JSON array, no additional text. Do not include markdown formatting."#
    )
}

pub fn build_meal_plan_prompt(preferences: &MealPlanPreferences) -> String {
    let days = preferences.number_of_days;
    let meals = preferences.meals_per_day;
    let calories = preferences.daily_calorie_goal;

    let restrictions_text = if preferences.dietary_restrictions.is_empty() {
        "No specific dietary restrictions. ".to_string()
    } else {
        format!(
            "Dietary Restrictions: {}. ",
            preferences.dietary_restrictions.join(", ")
        )
    };

    let cuisine_text = if preferences.has_cuisine_preference() {
        format!("Cuisine Preference: {}. ", preferences.cuisine_preference)
    } else {
        "Any cuisine type is acceptable. ".to_string()
    };

    // Vec<String> always serializes.
    let restrictions_json =
        serde_json::to_string(&preferences.dietary_restrictions).unwrap_or_else(|_| "[]".into());

    let cuisine_label = if preferences.cuisine_preference.trim().is_empty() {
        DEFAULT_CUISINE
    } else {
        preferences.cuisine_preference.as_str()
    };

    format!(
        r#"You are a professional nutritionist and meal planning expert. Create a detailed {days}-day meal plan with {meals} meals per day.

Requirements:
- Daily Calorie Goal: {calories} calories per day
- {restrictions_text}
- {cuisine_text}
- Each day should have exactly {meals} meals
- Meals should be balanced and nutritious
- Include variety across the {days} days

For each meal, provide:
1. Meal name
2. Description (1-2 sentences)
3. Ingredients list with quantities
4. Preparation instructions (step-by-step)
5. Calories per serving
6. Macros breakdown (protein, carbs, fats in grams)
7. Prep time
8. Cook time (if applicable)

Format your response as a JSON object with this exact structure:
{{
  "summary": {{
    "totalDays": {days},
    "mealsPerDay": {meals},
    "dailyCalorieGoal": {calories},
    "dietaryRestrictions": {restrictions_json},
    "cuisinePreference": "{cuisine_label}"
  }},
  "mealPlan": [
    {{
      "day": 1,
      "date": "Day 1",
      "meals": [
        {{
          "mealType": "Breakfast",
          "name": "Meal Name",
          "description": "Brief description",
          "ingredients": [
            "1 cup ingredient1",
            "2 tbsp ingredient2"
          ],
          "instructions": [
            "Step 1 instruction",
            "Step 2 instruction"
          ],
          "calories": 500,
          "macros": {{
            "protein": 30,
            "carbs": 50,
            "fats": 20
          }},
          "prepTime": "10 minutes",
          "cookTime": "20 minutes"
        }}
      ],
      "dailyTotal": {{
        "calories": {calories},
        "protein": 0,
        "carbs": 0,
        "fats": 0
      }}
    }}
  ]
}}

Return ONLY the JSON object, no additional text. Do not include markdown formatting like ```json."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preferences() -> MealPlanPreferences {
        MealPlanPreferences {
            dietary_restrictions: vec![],
            daily_calorie_goal: 1800,
            number_of_days: 3,
            meals_per_day: 4,
            cuisine_preference: "Any".to_string(),
        }
    }

    #[test]
    fn recipe_prompt_embeds_ingredients_and_shape() {
        let ingredients =
            IngredientSet::new(vec!["chicken".to_string(), "rice".to_string()]).unwrap();
        let prompt = build_recipe_prompt(&ingredients);

        assert!(prompt.starts_with("You are a professional chef assistant."));
        assert!(prompt.contains("Given these ingredients: chicken, rice"));
        assert!(prompt.contains("exactly 4-5 different creative recipes"));
        assert!(prompt.contains("8. Number of servings"));
        assert!(prompt.contains("\"prepTime\": \"15 minutes\""));
        assert!(prompt.contains("Return ONLY the JSON array"));
    }

    #[test]
    fn recipe_prompt_is_deterministic() {
        let ingredients = IngredientSet::new(vec!["tofu".to_string()]).unwrap();
        assert_eq!(
            build_recipe_prompt(&ingredients),
            build_recipe_prompt(&ingredients)
        );
    }

    #[test]
    fn meal_plan_prompt_without_restrictions_or_cuisine() {
        let prompt = build_meal_plan_prompt(&preferences());

        assert!(prompt.contains("Create a detailed 3-day meal plan with 4 meals per day."));
        assert!(prompt.contains("- Daily Calorie Goal: 1800 calories per day"));
        assert!(prompt.contains("- No specific dietary restrictions. "));
        assert!(prompt.contains("- Any cuisine type is acceptable. "));
        assert!(prompt.contains("\"dietaryRestrictions\": []"));
        assert!(prompt.contains("\"cuisinePreference\": \"Any\""));
        assert!(prompt.contains("Return ONLY the JSON object"));
    }

    #[test]
    fn meal_plan_prompt_with_restrictions_and_cuisine() {
        let mut preferences = preferences();
        preferences.dietary_restrictions = vec!["Vegetarian".to_string(), "Gluten-Free".to_string()];
        preferences.cuisine_preference = "Italian".to_string();

        let prompt = build_meal_plan_prompt(&preferences);

        assert!(prompt.contains("- Dietary Restrictions: Vegetarian, Gluten-Free. "));
        assert!(prompt.contains("- Cuisine Preference: Italian. "));
        assert!(prompt.contains("\"dietaryRestrictions\": [\"Vegetarian\",\"Gluten-Free\"]"));
        assert!(prompt.contains("\"cuisinePreference\": \"Italian\""));
        assert!(prompt.contains("\"calories\": 1800,"));
    }
}
