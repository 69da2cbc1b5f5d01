use tracing::{info, instrument, warn};

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, generate_timestamp, services::Service},
    crypto::ports::HasherRepository,
    generation::ports::LLMClient,
    health::ports::HealthCheckRepository,
    jwt::ports::JwtCodec,
    meal_plan_book::ports::SavedMealPlanRepository,
    recipe_book::ports::SavedRecipeRepository,
    user::{
        entities::User,
        ports::{UserRepository, UserService},
        value_objects::{ChangePasswordInput, UpdateProfileInput},
    },
};

impl<U, SR, MP, H, J, HC, LLM> UserService for Service<U, SR, MP, H, J, HC, LLM>
where
    U: UserRepository,
    SR: SavedRecipeRepository,
    MP: SavedMealPlanRepository,
    H: HasherRepository,
    J: JwtCodec,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn get_profile(&self, identity: Identity) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(identity.id())
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, identity, input), fields(user_id = %identity.id()))]
    async fn update_profile(
        &self,
        identity: Identity,
        input: UpdateProfileInput,
    ) -> Result<User, CoreError> {
        let mut user = self.get_profile(identity).await?;

        if let Some(name) = input.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(CoreError::Invalid("Name cannot be empty".to_string()));
            }
            user.name = name;
        }

        if let Some(avatar) = input.avatar {
            user.avatar = Some(avatar).filter(|a| !a.trim().is_empty());
        }

        if let Some(dark_mode) = input.dark_mode {
            user.dark_mode = dark_mode;
        }

        let (now, _) = generate_timestamp();
        user.updated_at = now;

        let user = self.user_repository.update_user(user).await?;
        info!("Profile updated");

        Ok(user)
    }

    #[instrument(skip(self, identity, input), fields(user_id = %identity.id()))]
    async fn change_password(
        &self,
        identity: Identity,
        input: ChangePasswordInput,
    ) -> Result<(), CoreError> {
        let mut user = self.get_profile(identity).await?;

        let matches = self
            .hasher_repository
            .verify_password(input.current_password, user.password_hash.clone())
            .await?;

        if !matches {
            warn!("Password change rejected: current password does not match");
            return Err(CoreError::InvalidCredentials);
        }

        user.password_hash = self
            .hasher_repository
            .hash_password(input.new_password)
            .await?;

        let (now, _) = generate_timestamp();
        user.updated_at = now;

        self.user_repository.update_user(user).await?;
        info!("Password changed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::common::services::mocks::Mocks;

    fn stored_user() -> User {
        User::new("Ada".into(), "ada@example.com".into(), "old-hash".into())
    }

    fn mocks_with_user(user: User) -> Mocks {
        let mut mocks = Mocks::new();
        let id = user.id;
        mocks
            .user_repository
            .expect_get_by_id()
            .with(eq(id))
            .returning(move |_| {
                let user = user.clone();
                Box::pin(async move { Ok(Some(user)) })
            });
        mocks
    }

    #[tokio::test]
    async fn test_get_profile_missing_user_is_not_found() {
        let user = stored_user();
        let mut mocks = Mocks::new();
        mocks
            .user_repository
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let err = mocks
            .into_service()
            .get_profile(Identity::new(user))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_update_profile_applies_only_given_fields() {
        let user = stored_user();
        let identity = Identity::new(user.clone());
        let mut mocks = mocks_with_user(user);
        mocks
            .user_repository
            .expect_update_user()
            .withf(|u| u.name == "Ada" && u.dark_mode && u.avatar.as_deref() == Some("chef.png"))
            .times(1)
            .returning(|u| Box::pin(async move { Ok(u) }));

        let updated = mocks
            .into_service()
            .update_profile(
                identity,
                UpdateProfileInput {
                    name: None,
                    avatar: Some("chef.png".to_string()),
                    dark_mode: Some(true),
                },
            )
            .await
            .unwrap();

        assert!(updated.dark_mode);
    }

    #[tokio::test]
    async fn test_update_profile_rejects_blank_name() {
        let user = stored_user();
        let identity = Identity::new(user.clone());
        let mut mocks = mocks_with_user(user);
        mocks.user_repository.expect_update_user().never();

        let err = mocks
            .into_service()
            .update_profile(
                identity,
                UpdateProfileInput {
                    name: Some("   ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_change_password_checks_current_password() {
        let user = stored_user();
        let identity = Identity::new(user.clone());
        let mut mocks = mocks_with_user(user);
        mocks
            .hasher_repository
            .expect_verify_password()
            .with(eq("wrong".to_string()), eq("old-hash".to_string()))
            .returning(|_, _| Box::pin(async { Ok(false) }));
        mocks.hasher_repository.expect_hash_password().never();
        mocks.user_repository.expect_update_user().never();

        let err = mocks
            .into_service()
            .change_password(
                identity,
                ChangePasswordInput {
                    current_password: "wrong".to_string(),
                    new_password: "new-secret".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_change_password_stores_new_hash() {
        let user = stored_user();
        let identity = Identity::new(user.clone());
        let mut mocks = mocks_with_user(user);
        mocks
            .hasher_repository
            .expect_verify_password()
            .returning(|_, _| Box::pin(async { Ok(true) }));
        mocks
            .hasher_repository
            .expect_hash_password()
            .with(eq("new-secret".to_string()))
            .returning(|_| Box::pin(async { Ok("new-hash".to_string()) }));
        mocks
            .user_repository
            .expect_update_user()
            .withf(|u| u.password_hash == "new-hash")
            .times(1)
            .returning(|u| Box::pin(async move { Ok(u) }));

        mocks
            .into_service()
            .change_password(
                identity,
                ChangePasswordInput {
                    current_password: "old".to_string(),
                    new_password: "new-secret".to_string(),
                },
            )
            .await
            .unwrap();
    }
}
