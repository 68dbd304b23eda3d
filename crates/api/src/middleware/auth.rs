//! # Authentication Module
//!
//! This module provides authentication utilities for the OfficeHours API:
//! password hashing and verification for user accounts, and issuing and
//! verifying the signed identity tokens presented on protected requests.
//!
//! Passwords are hashed with Argon2, a secure password hashing algorithm
//! that protects stored credentials from rainbow tables and brute force
//! attempts. Identity tokens are HS256-signed JWTs embedding the user's id
//! and role, with a configurable expiry (1 hour by default).

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use chrono::Utc;
use eyre::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use officehours_core::{errors::BookingError, models::user::Role};

use crate::{middleware::error_handling::AppError, ApiState};

/// Claims embedded in every issued identity token
///
/// The subject is the user's id; the role is checked by handlers for
/// role-gated operations. Expiry is enforced on verification, so a stolen
/// token stops working after the configured TTL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id the token was issued for
    pub sub: Uuid,
    /// Role fixed at registration
    pub role: Role,
    /// Issued-at, seconds since the epoch
    pub iat: i64,
    /// Expiry, seconds since the epoch
    pub exp: i64,
}

/// Hashes a password using the Argon2 algorithm
///
/// This function securely hashes passwords before storage in the database,
/// automatically generating a random salt and using industry-standard
/// parameters for Argon2.
///
/// # Arguments
///
/// * `password` - The plain text password to hash
///
/// # Returns
///
/// * `Result<String>` - The hashed password in PHC string format, or an error
///
/// # Security Notes
///
/// - Uses a random salt for each password
/// - Uses default Argon2 parameters (memory: 19MiB, iterations: 3, parallelism: 4)
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    // Create default Argon2 instance
    let argon2 = Argon2::default();

    // Hash the password with salt
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verifies a plain text password against a stored Argon2 hash
///
/// # Arguments
///
/// * `password` - The plain text password supplied at login
/// * `hash` - The PHC-format hash stored for the account
///
/// # Returns
///
/// * `Result<bool>` - True if the password matches, false otherwise
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = argon2::PasswordHash::new(hash)
        .map_err(|e| eyre::eyre!("Invalid password hash: {}", e))?;

    let is_valid = Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok();

    Ok(is_valid)
}

/// Issues a signed identity token for the given user
///
/// The token embeds the user's id and role and expires `ttl_seconds` after
/// issue. It is signed with the shared secret loaded from configuration at
/// startup.
pub fn issue_token(secret: &str, ttl_seconds: u64, user_id: Uuid, role: Role) -> Result<String> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        role,
        iat: now,
        exp: now + ttl_seconds as i64,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| eyre::eyre!("Error signing token: {}", e))?;

    Ok(token)
}

/// Verifies a token's signature and expiry and returns its claims
///
/// Any failure mode (malformed token, bad signature, expired) maps to an
/// authentication error so protected endpoints uniformly answer 401.
pub fn decode_token(secret: &str, token: &str) -> Result<Claims, BookingError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| BookingError::Authentication(format!("Invalid token: {}", e)))?;

    Ok(data.claims)
}

/// The authenticated caller, extracted from the `Authorization` header
///
/// Adding `AuthUser` as a handler argument makes the endpoint require a
/// valid token: requests with a missing, malformed, or expired token are
/// rejected with 401 before the handler body runs.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: Uuid,
    pub role: Role,
}

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError(BookingError::Authentication(
                    "Missing Authorization header".to_string(),
                ))
            })?;

        // Accept both "Bearer <token>" and a bare token
        let token = header.strip_prefix("Bearer ").unwrap_or(header);

        let claims = decode_token(&state.jwt_secret, token)?;

        Ok(AuthUser {
            id: claims.sub,
            role: claims.role,
        })
    }
}
