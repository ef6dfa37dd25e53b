pub mod claims;
pub mod extractors;

pub use claims::{Claims, CurrentInstructor};

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::rngs::OsRng;

use crate::config::AuthConfig;
use crate::error::AppError;

pub const TOKEN_TYPE: &str = "bearer";

/// Hashes a password into PHC string format with a fresh salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("password hashing failed: {}", e)))
}

/// A stored hash that does not parse never verifies.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let parsed = match PasswordHash::new(password_hash) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Signs an HS256 token for `username`, valid for the configured lifetime.
pub fn generate_jwt(config: &AuthConfig, username: &str, now: DateTime<Utc>) -> Result<String, AppError> {
    let expiry = now
        .checked_add_signed(config.token_ttl)
        .ok_or_else(|| AppError::Internal("token expiry out of range".to_string()))?;
    let claims = Claims {
        sub: username.to_string(),
        exp: expiry.timestamp().max(0) as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("token encoding failed: {}", e)))
}

/// Checks signature and expiry, yielding the instructor the token was issued to.
pub fn decode_jwt(config: &AuthConfig, token: &str) -> Result<CurrentInstructor, AppError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|_| AppError::Unauthorized)?;

    if token_data.claims.sub.is_empty() {
        return Err(AppError::Unauthorized);
    }

    Ok(CurrentInstructor(token_data.claims.sub))
}
