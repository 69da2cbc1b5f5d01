use crate::domain::{
    common::entities::app_errors::CoreError, jwt::entities::JwtClaim, user::entities::User,
};

/// Issues and verifies the bearer tokens handed to clients.
#[cfg_attr(test, mockall::automock)]
pub trait JwtCodec: Send + Sync {
    fn issue(&self, user: &User) -> Result<String, CoreError>;

    /// Fails with [`CoreError::Unauthorized`] on a bad signature or an expired token.
    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError>;
}
