use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterValidator {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Names are stored trimmed, so the length bounds apply to the trimmed value.
fn validate_name(name: &str) -> Result<(), ValidationError> {
    let length = name.trim().chars().count();

    if !(1..=100).contains(&length) {
        return Err(ValidationError::new("name").with_message(Cow::from(
            "Name must be between 1 and 100 characters",
        )));
    }

    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginValidator {
    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
