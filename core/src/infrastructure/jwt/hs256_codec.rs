use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::{debug, error};

use crate::domain::{
    common::{AuthConfig, entities::app_errors::CoreError},
    jwt::{entities::JwtClaim, ports::JwtCodec},
    user::entities::User,
};

/// HS256 tokens signed with the shared secret from [`AuthConfig`].
#[derive(Clone)]
pub struct Hs256JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration: Duration,
}

impl Hs256JwtCodec {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            expiration: Duration::days(config.jwt_expiration_days),
        }
    }
}

impl JwtCodec for Hs256JwtCodec {
    fn issue(&self, user: &User) -> Result<String, CoreError> {
        let now = Utc::now();
        let claims = JwtClaim {
            sub: user.id,
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: (now + self.expiration).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            error!("Failed to sign token: {}", e);
            CoreError::InternalServerError
        })
    }

    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError> {
        decode::<JwtClaim>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Rejected token: {}", e);
                CoreError::Unauthorized
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec(secret: &str, days: i64) -> Hs256JwtCodec {
        Hs256JwtCodec::new(&AuthConfig {
            jwt_secret: secret.to_string(),
            jwt_expiration_days: days,
        })
    }

    fn user() -> User {
        User::new("Ada".into(), "ada@example.com".into(), "h".into())
    }

    #[test]
    fn test_issued_token_verifies() {
        let codec = codec("test-secret", 7);
        let user = user();

        let claims = codec.verify(&codec.issue(&user).unwrap()).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let token = codec("secret-a", 7).issue(&user()).unwrap();

        assert!(matches!(
            codec("secret-b", 7).verify(&token),
            Err(CoreError::Unauthorized)
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let codec = codec("test-secret", -1);
        let token = codec.issue(&user()).unwrap();

        assert!(matches!(codec.verify(&token), Err(CoreError::Unauthorized)));
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(codec("test-secret", 7).verify("not.a.jwt").is_err());
    }
}
