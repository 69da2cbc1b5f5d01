use thiserror::Error;

use crate::domain::generation::errors::GenerationError;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Internal server error")]
    InternalServerError,
}
