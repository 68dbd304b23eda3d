use argon2::PasswordVerifier;
use chrono::Utc;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use officehours_api::middleware::auth::{self, Claims};
use officehours_core::{errors::BookingError, models::user::Role};

use crate::test_utils::TEST_SECRET;

#[tokio::test]
async fn test_error_handling_not_found() {
    // Create a not found error
    let error = BookingError::NotFound("Resource not found".to_string());

    // Map the error to a response
    let response = officehours_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    // Create a validation error
    let error = BookingError::Validation("Invalid input".to_string());

    // Map the error to a response
    let response = officehours_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_authentication() {
    // Create an authentication error
    let error = BookingError::Authentication("Invalid password".to_string());

    // Map the error to a response
    let response = officehours_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_error_handling_authorization() {
    // Create an authorization error
    let error = BookingError::Authorization("Not authorized".to_string());

    // Map the error to a response
    let response = officehours_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_error_handling_database() {
    // Create a database error
    let error = BookingError::Database(eyre::eyre!("Database error"));

    // Map the error to a response
    let response = officehours_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_hash_password() {
    // Test that password hashing works
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    // Verify the hash is different from the original password
    assert_ne!(hashed, password);

    // Verify the hash starts with the argon2 prefix
    assert!(hashed.starts_with("$argon2"));
}

#[tokio::test]
async fn test_verify_password() {
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    // Verify a correct password
    assert!(auth::verify_password(password, &hashed).unwrap());

    // Verify an incorrect password
    assert!(!auth::verify_password("wrong_password", &hashed).unwrap());

    // Cross-check against argon2 directly
    let argon2 = argon2::Argon2::default();
    let parsed_hash = argon2::PasswordHash::new(&hashed).unwrap();
    assert!(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok());
}

#[tokio::test]
async fn test_token_round_trip() {
    let user_id = Uuid::new_v4();

    // Issue a token and decode it back
    let token = auth::issue_token(TEST_SECRET, 3600, user_id, Role::Professor).unwrap();
    let claims = auth::decode_token(TEST_SECRET, &token).unwrap();

    // The identity and role supplied at issue come back out
    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.role, Role::Professor);
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn test_token_rejects_wrong_secret() {
    let token = auth::issue_token(TEST_SECRET, 3600, Uuid::new_v4(), Role::Student).unwrap();

    let result = auth::decode_token("another-secret", &token);

    assert!(matches!(result, Err(BookingError::Authentication(_))));
}

#[tokio::test]
async fn test_token_rejects_garbage() {
    let result = auth::decode_token(TEST_SECRET, "not-a-token");

    assert!(matches!(result, Err(BookingError::Authentication(_))));
}

#[tokio::test]
async fn test_token_rejects_expired() {
    // Sign a token whose expiry is well in the past (beyond decode leeway)
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: Uuid::new_v4(),
        role: Role::Student,
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let result = auth::decode_token(TEST_SECRET, &token);

    assert!(matches!(result, Err(BookingError::Authentication(_))));
}
