use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Token claims: the admin username plus the validity window
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // admin username
    pub exp: i64,    // expiration timestamp
    pub iat: i64,    // issued at timestamp
}

pub struct AuthService;

impl AuthService {
    /// Hash a password using Argon2
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

        Ok(hash.to_string())
    }

    /// Verify a password against a hash
    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(format!("Invalid password hash: {}", e)))?;

        let result = Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok();

        Ok(result)
    }

    /// Generate a token bound to `username`, valid for `expires_in` seconds
    pub fn generate_token(username: &str, expires_in: i64, config: &Config) -> AppResult<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now
            .checked_add(Duration::seconds(expires_in))
            .ok_or_else(|| {
                AppError::Internal(format!("Token lifetime out of range: {}s", expires_in))
            })?;

        let claims = Claims {
            sub: username.to_string(),
            exp: exp.unix_timestamp(),
            iat: now.unix_timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))?;

        Ok(token)
    }

    /// Check that `token` is well formed, unexpired and issued for `username`
    pub fn certify_token(username: &str, token: &str, config: &Config) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            &Validation::default(),
        )?;

        if token_data.claims.sub != username {
            tracing::debug!(
                expected = username,
                actual = %token_data.claims.sub,
                "Token issued for another username"
            );
            return Err(AppError::TokenCheckFailed);
        }

        Ok(token_data.claims)
    }
}
