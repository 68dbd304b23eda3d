use chrono::Utc;
use uuid::Uuid;

use officehours_api::middleware::{auth, error_handling::AppError};
use officehours_core::{
    errors::BookingError,
    models::user::{LoginResponse, RegisterRequest, Role, UserResponse},
};
use officehours_db::models::DbUser;

use crate::test_utils::{TestContext, TEST_SECRET};

// Wrapper replicating the register handler's logic against repository mocks
async fn test_register_wrapper(
    ctx: &mut TestContext,
    payload: RegisterRequest,
) -> Result<UserResponse, AppError> {
    // Unrecognized roles are rejected before any database access
    let role: Role = payload.role.parse()?;

    // Create static strs for the mocks
    let username: &'static str = Box::leak(payload.username.clone().into_boxed_str());

    if ctx.user_repo.get_user_by_username(username).await?.is_some() {
        return Err(AppError(BookingError::Validation(format!(
            "Username '{}' is already taken",
            payload.username
        ))));
    }

    let password_hash: &'static str =
        Box::leak(auth::hash_password(&payload.password)?.into_boxed_str());

    let db_user = ctx
        .user_repo
        .create_user(username, password_hash, role.as_str())
        .await?;

    Ok(UserResponse {
        id: db_user.id,
        username: db_user.username,
        role,
        created_at: db_user.created_at,
    })
}

// Wrapper replicating the login handler's logic against repository mocks
async fn test_login_wrapper(
    ctx: &mut TestContext,
    username: &'static str,
    password: &str,
) -> Result<LoginResponse, AppError> {
    let db_user = ctx
        .user_repo
        .get_user_by_username(username)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("User '{}' not found", username)))?;

    if !auth::verify_password(password, &db_user.password_hash)? {
        return Err(AppError(BookingError::Authentication(
            "Invalid password".to_string(),
        )));
    }

    let role: Role = db_user.role.parse()?;
    let token = auth::issue_token(TEST_SECRET, 3600, db_user.id, role)?;

    Ok(LoginResponse { token })
}

fn professor_row(id: Uuid, username: &str, password_hash: &str) -> DbUser {
    DbUser {
        id,
        username: username.to_string(),
        password_hash: password_hash.to_string(),
        role: "professor".to_string(),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_register_success() {
    let mut ctx = TestContext::new();
    let now = Utc::now();
    let user_id = Uuid::new_v4();

    // No existing user with that name
    ctx.user_repo
        .expect_get_user_by_username()
        .returning(|_| Ok(None));

    ctx.user_repo
        .expect_create_user()
        .returning(move |username, password_hash, role| {
            Ok(DbUser {
                id: user_id,
                username: username.to_string(),
                password_hash: password_hash.to_string(),
                role: role.to_string(),
                created_at: now,
            })
        });

    let payload = RegisterRequest {
        username: "profP1".to_string(),
        password: "hunter2".to_string(),
        role: "professor".to_string(),
    };

    let result = test_register_wrapper(&mut ctx, payload).await;

    let response = result.unwrap();
    assert_eq!(response.id, user_id);
    assert_eq!(response.username, "profP1");
    assert_eq!(response.role, Role::Professor);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let mut ctx = TestContext::new();
    let existing_id = Uuid::new_v4();

    // The username is already taken
    ctx.user_repo
        .expect_get_user_by_username()
        .returning(move |username| Ok(Some(professor_row(existing_id, username, "$argon2id$x"))));

    let payload = RegisterRequest {
        username: "profP1".to_string(),
        password: "hunter2".to_string(),
        role: "professor".to_string(),
    };

    let result = test_register_wrapper(&mut ctx, payload).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::Validation(_) => {} // Expected
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_register_unknown_role() {
    let mut ctx = TestContext::new();

    let payload = RegisterRequest {
        username: "someone".to_string(),
        password: "hunter2".to_string(),
        role: "dean".to_string(),
    };

    let result = test_register_wrapper(&mut ctx, payload).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::Validation(_) => {} // Expected
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_login_unknown_user() {
    let mut ctx = TestContext::new();

    ctx.user_repo
        .expect_get_user_by_username()
        .returning(|_| Ok(None));

    let result = test_login_wrapper(&mut ctx, "ghost", "hunter2").await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::NotFound(_) => {} // Expected
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_login_wrong_password() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let hash = auth::hash_password("correct-password").unwrap();

    ctx.user_repo
        .expect_get_user_by_username()
        .returning(move |username| Ok(Some(professor_row(user_id, username, &hash))));

    let result = test_login_wrapper(&mut ctx, "profP1", "wrong-password").await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::Authentication(_) => {} // Expected
        e => panic!("Expected Authentication error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_login_issues_token_with_identity_and_role() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let hash = auth::hash_password("hunter2").unwrap();

    ctx.user_repo
        .expect_get_user_by_username()
        .returning(move |username| Ok(Some(professor_row(user_id, username, &hash))));

    let response = test_login_wrapper(&mut ctx, "profP1", "hunter2").await.unwrap();

    // The token embeds the identity and role supplied at registration
    let claims = auth::decode_token(TEST_SECRET, &response.token).unwrap();
    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.role, Role::Professor);
}
