use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{entities::User, ports::UserRepository},
};
use crate::entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(user: User) -> UserActiveModel {
    UserActiveModel {
        id: Set(user.id),
        name: Set(user.name),
        email: Set(user.email),
        password_hash: Set(user.password_hash),
        avatar: Set(user.avatar),
        dark_mode: Set(user.dark_mode),
        created_at: Set(user.created_at.naive_utc()),
        updated_at: Set(user.updated_at.naive_utc()),
    }
}

/// A concurrent registration can pass the email lookup and still lose the
/// insert on `users.email UNIQUE`.
fn create_error(e: DbErr) -> CoreError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
        return CoreError::Conflict("User already exists with this email".to_string());
    }

    error!("Failed to create user: {}", e);
    CoreError::InternalServerError
}

impl UserRepository for PostgresUserRepository {
    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by email: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn create_user(&self, user: User) -> Result<User, CoreError> {
        let created_user = UserEntity::insert(active_model(user))
            .exec_with_returning(&self.db)
            .await
            .map(User::from)
            .map_err(create_error)?;

        Ok(created_user)
    }

    async fn update_user(&self, user: User) -> Result<User, CoreError> {
        let updated_user = UserEntity::update(active_model(user))
            .exec(&self.db)
            .await
            .map(User::from)
            .map_err(|e| {
                error!("Failed to update user: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(updated_user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_error_without_constraint_is_internal() {
        let err = create_error(DbErr::Custom("connection reset".to_string()));

        assert!(matches!(err, CoreError::InternalServerError));
    }

    #[tokio::test]
    async fn test_create_user_on_disconnected_db_is_internal() {
        let repository = PostgresUserRepository::new(DatabaseConnection::Disconnected);

        let err = repository
            .create_user(User::new("Ada".into(), "ada@example.com".into(), "h".into()))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InternalServerError));
    }
}
