//! Operator Authentication
//!
//! Registry mutations (registering, removing, switching regtest) need an HS256
//! bearer token signed with the configured secret. Lookups stay public.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::driven_adapters::config::AppConfig;
use crate::shared::errors::ErrorResponse;

const LEEWAY_SECS: u64 = 60;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Operator id
    pub sub: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Operator behind a verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: String,
    pub role: String,
}

/// Extractor rejecting requests without a valid bearer token
pub struct JwtAuth(pub AuthenticatedUser);

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Authorization header must be 'Bearer <token>'")]
    MalformedHeader,

    #[error("Invalid or expired token")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if let Self::InvalidToken(err) = &self {
            tracing::debug!(error = %err, "Rejected token");
        }
        let body = ErrorResponse::new("UNAUTHORIZED", self.to_string(), None);
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers.get(AUTHORIZATION).ok_or(AuthError::MissingHeader)?;
    value
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MalformedHeader)
}

/// Check signature and expiry of `token`
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` when the token does not verify.
pub fn verify_token(token: &str, secret: &str) -> Result<AuthenticatedUser, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = LEEWAY_SECS;

    let claims = decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map_err(AuthError::InvalidToken)?
        .claims;

    Ok(AuthenticatedUser {
        id: claims.sub,
        role: claims.role,
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for JwtAuth
where
    Arc<AppConfig>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = Arc::<AppConfig>::from_ref(state);
        let token = bearer_token(&parts.headers)?;
        verify_token(token, &config.jwt.secret).map(JwtAuth)
    }
}
