use crate::domain::{
    authentication::value_objects::{AuthSession, Identity, LoginInput, RegisterInput},
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn register(
        &self,
        input: RegisterInput,
    ) -> impl Future<Output = Result<AuthSession, CoreError>> + Send;

    fn login(&self, input: LoginInput)
    -> impl Future<Output = Result<AuthSession, CoreError>> + Send;

    /// Resolves a bearer token into the identity of an existing user.
    fn authorize(&self, token: String)
    -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
