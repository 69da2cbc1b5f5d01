use tracing::{info, instrument, warn};

use crate::domain::{
    authentication::{
        ports::AuthService,
        value_objects::{AuthSession, Identity, LoginInput, RegisterInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    generation::ports::LLMClient,
    health::ports::HealthCheckRepository,
    jwt::ports::JwtCodec,
    meal_plan_book::ports::SavedMealPlanRepository,
    recipe_book::ports::SavedRecipeRepository,
    user::{
        entities::{User, normalize_email},
        ports::UserRepository,
    },
};

impl<U, SR, MP, H, J, HC, LLM> AuthService for Service<U, SR, MP, H, J, HC, LLM>
where
    U: UserRepository,
    SR: SavedRecipeRepository,
    MP: SavedMealPlanRepository,
    H: HasherRepository,
    J: JwtCodec,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self, input))]
    async fn register(&self, input: RegisterInput) -> Result<AuthSession, CoreError> {
        let email = normalize_email(&input.email);

        if self
            .user_repository
            .get_by_email(email.clone())
            .await?
            .is_some()
        {
            warn!("Registration rejected: email already in use");
            return Err(CoreError::Conflict(
                "User already exists with this email".to_string(),
            ));
        }

        let password_hash = self.hasher_repository.hash_password(input.password).await?;
        let user = self
            .user_repository
            .create_user(User::new(input.name, email, password_hash))
            .await?;

        let token = self.jwt_codec.issue(&user)?;
        info!(user_id = %user.id, "User registered");

        Ok(AuthSession { token, user })
    }

    #[instrument(skip(self, input))]
    async fn login(&self, input: LoginInput) -> Result<AuthSession, CoreError> {
        let user = self
            .user_repository
            .get_by_email(normalize_email(&input.email))
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let matches = self
            .hasher_repository
            .verify_password(input.password, user.password_hash.clone())
            .await?;

        if !matches {
            warn!(user_id = %user.id, "Login rejected: wrong password");
            return Err(CoreError::InvalidCredentials);
        }

        let token = self.jwt_codec.issue(&user)?;
        info!(user_id = %user.id, "User logged in");

        Ok(AuthSession { token, user })
    }

    async fn authorize(&self, token: String) -> Result<Identity, CoreError> {
        let claims = self.jwt_codec.verify(&token)?;

        let user = self
            .user_repository
            .get_by_id(claims.sub)
            .await?
            .ok_or(CoreError::Unauthorized)?;

        Ok(Identity::new(user))
    }
}
