use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::auth::jwt::{decode_token, secret_from_env};

/// Authenticated caller, extracted from a bearer token.
///
/// Carries the `(company, user)` pair tenant-scoped handlers need; the
/// dashboard refresh is scoped entirely by these two identifiers.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub company_id: Uuid,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("missing authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::unauthorized("expected a bearer token"))?;

        let claims = decode_token(token, &secret_from_env()).map_err(ApiError::unauthorized)?;

        Ok(AuthUser {
            user_id: claims.sub,
            company_id: claims.org,
        })
    }
}
