use crate::application::http::{
    authentication::router::AuthenticationApiDoc, health::router::HealthApiDoc,
    meal_planner::router::MealPlannerApiDoc, recipes::router::RecipesApiDoc,
    user::router::UserApiDoc,
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ChefAI Companion API"
    ),
    modifiers(&BearerAuth),
    nest(
        (path = "/health", api = HealthApiDoc),
        (path = "/auth", api = AuthenticationApiDoc),
        (path = "/recipes", api = RecipesApiDoc),
        (path = "/meal-planner", api = MealPlannerApiDoc),
        (path = "/user", api = UserApiDoc),
    )
)]
pub struct ApiDoc;
