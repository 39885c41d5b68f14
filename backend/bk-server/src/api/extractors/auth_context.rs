//! Axum extractor for bearer-token authentication

use crate::{ApiError, AppState};

use bk_auth::bearer_token;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Caller identity of a request
///
/// Holds the token subject when authentication is enabled; `None` when the
/// service runs without it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext(pub Option<Uuid>);

impl AuthContext {
    /// Only the owner may touch a record
    #[track_caller]
    pub fn authorize(&self, owner: Uuid) -> Result<(), ApiError> {
        match self.0 {
            Some(subject) if subject != owner => Err(ApiError::Forbidden {
                message: format!("Settings of {} belong to another user", owner),
                location: ErrorLocation::from(Location::caller()),
            }),
            _ => Ok(()),
        }
    }
}

impl FromRequestParts<AppState> for AuthContext {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(ref validator) = state.jwt_validator else {
                return Ok(AuthContext(None));
            };

            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let token = bearer_token(header)?;
            let claims = validator.validate(token)?;
            let user_id = claims.user_id()?;

            log::debug!("Authenticated request for user {}", user_id);
            Ok(AuthContext(Some(user_id)))
        }
    }
}
