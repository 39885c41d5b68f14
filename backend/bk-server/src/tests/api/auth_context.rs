use crate::{ApiError, AppState, AuthContext};

use bk_auth::JwtValidator;

use std::sync::Arc;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;
use sqlx::SqlitePool;
use uuid::Uuid;

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

fn test_state(auth_enabled: bool) -> AppState {
    let pool = SqlitePool::connect_lazy("sqlite::memory:").expect("Failed to create test pool");
    let validator =
        auth_enabled.then(|| Arc::new(JwtValidator::with_hs256(SECRET, Some("authenticated"))));
    AppState::new(pool, validator)
}

fn token_for(user_id: Uuid) -> String {
    let claims = json!({
        "sub": user_id.to_string(),
        "aud": "authenticated",
        "exp": chrono::Utc::now().timestamp() + 3600,
        "iat": chrono::Utc::now().timestamp(),
        "role": "authenticated"
    });
    encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET)).unwrap()
}

async fn extract(state: &AppState, authorization: Option<&str>) -> Result<AuthContext, ApiError> {
    let mut builder = Request::builder();
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    let (mut parts, _body) = builder.body(Body::empty()).unwrap().into_parts();
    AuthContext::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_extractor_without_validator_is_anonymous() {
    let state = test_state(false);

    let context = extract(&state, None).await.unwrap();

    assert_eq!(context, AuthContext(None));
}

#[tokio::test]
async fn test_extractor_with_valid_token_yields_subject() {
    let state = test_state(true);
    let user_id = Uuid::new_v4();

    let context = extract(&state, Some(&format!("Bearer {}", token_for(user_id))))
        .await
        .unwrap();

    assert_eq!(context, AuthContext(Some(user_id)));
}

#[tokio::test]
async fn test_extractor_missing_header_is_unauthorized() {
    let state = test_state(true);

    let result = extract(&state, None).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_wrong_scheme_is_unauthorized() {
    let state = test_state(true);

    let result = extract(&state, Some("Basic dXNlcjpwYXNz")).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_token_signed_with_other_secret_is_unauthorized() {
    let state = test_state(true);
    let claims = json!({
        "sub": Uuid::new_v4().to_string(),
        "aud": "authenticated",
        "exp": chrono::Utc::now().timestamp() + 3600
    });
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"another-secret-that-is-32-bytes!!"),
    )
    .unwrap();

    let result = extract(&state, Some(&format!("Bearer {}", token))).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_authorize_rejects_other_owner() {
    let context = AuthContext(Some(Uuid::new_v4()));

    assert!(matches!(
        context.authorize(Uuid::new_v4()),
        Err(ApiError::Forbidden { .. })
    ));
}

#[test]
fn test_authorize_allows_owner_and_anonymous_mode() {
    let owner = Uuid::new_v4();

    assert!(AuthContext(Some(owner)).authorize(owner).is_ok());
    assert!(AuthContext(None).authorize(owner).is_ok());
}
