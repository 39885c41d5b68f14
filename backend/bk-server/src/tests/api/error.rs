use crate::ApiError;

use bk_auth::AuthError;
use bk_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Settings not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Settings not found");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("user_id is required", Some("user_id"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "user_id");
}

#[tokio::test]
async fn test_validation_error_without_field_omits_it() {
    let error = ApiError::validation("bad input", None);

    let (_, json) = body_json(error).await;

    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let error = ApiError::Forbidden {
        message: "not yours".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database connection failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_auth_error_converts_to_401() {
    let error = ApiError::from(AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("MISSING_AUTH_HEADER")
    );
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
    let api_err: ApiError = uuid_err.into();

    assert!(matches!(api_err, ApiError::Validation { .. }));
}

#[test]
fn test_invalid_record_converts_to_validation() {
    let db_err = DbError::InvalidRecord {
        message: "user_settings.user_id is required".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = db_err.into();

    assert!(matches!(api_err, ApiError::Validation { .. }));
}

#[test]
fn test_sqlx_error_hides_details() {
    let db_err = DbError::from(sqlx::Error::PoolTimedOut);
    let api_err: ApiError = db_err.into();

    match api_err {
        ApiError::Internal { message, .. } => assert_eq!(message, "Database operation failed"),
        other => panic!("expected internal error, got {:?}", other),
    }
}
