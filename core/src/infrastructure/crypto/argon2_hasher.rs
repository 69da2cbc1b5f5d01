use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use tracing::error;

use crate::domain::{common::entities::app_errors::CoreError, crypto::ports::HasherRepository};

/// Argon2id with default parameters. Hashing runs on the blocking pool.
#[derive(Debug, Clone, Default)]
pub struct Argon2HasherRepository;

impl Argon2HasherRepository {
    pub fn new() -> Self {
        Self
    }
}

fn hash(password: &str) -> Result<String, CoreError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            error!("Failed to hash password: {}", e);
            CoreError::InternalServerError
        })
}

fn verify(password: &str, password_hash: &str) -> Result<bool, CoreError> {
    let parsed = PasswordHash::new(password_hash).map_err(|e| {
        error!("Stored password hash is not a PHC string: {}", e);
        CoreError::InternalServerError
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

impl HasherRepository for Argon2HasherRepository {
    async fn hash_password(&self, password: String) -> Result<String, CoreError> {
        tokio::task::spawn_blocking(move || hash(&password))
            .await
            .map_err(|e| {
                error!("Password hashing task failed: {}", e);
                CoreError::InternalServerError
            })?
    }

    async fn verify_password(
        &self,
        password: String,
        password_hash: String,
    ) -> Result<bool, CoreError> {
        tokio::task::spawn_blocking(move || verify(&password, &password_hash))
            .await
            .map_err(|e| {
                error!("Password verification task failed: {}", e);
                CoreError::InternalServerError
            })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_then_verify() {
        let hasher = Argon2HasherRepository::new();
        let hashed = hasher.hash_password("secret1".to_string()).await.unwrap();

        assert!(hashed.starts_with("$argon2"));
        assert!(
            hasher
                .verify_password("secret1".to_string(), hashed.clone())
                .await
                .unwrap()
        );
        assert!(
            !hasher
                .verify_password("secret2".to_string(), hashed)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_salts_differ_between_hashes() {
        let hasher = Argon2HasherRepository::new();
        let first = hasher.hash_password("secret1".to_string()).await.unwrap();
        let second = hasher.hash_password("secret1".to_string()).await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_garbage_hash_is_an_error() {
        let hasher = Argon2HasherRepository::new();
        assert!(
            hasher
                .verify_password("secret1".to_string(), "not-a-hash".to_string())
                .await
                .is_err()
        );
    }
}
