use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::auth::jwt::{issue_token, secret_from_env};
use crate::auth::password::{hash_password, verify_password};
use crate::domain::repositories::{User, UserRepository};
use crate::domain::user::value_objects::Email;
use crate::infrastructure::repositories::PostgresUserRepository;

/// Request body for account creation
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub company_id: Uuid,
}

/// Response from successful account creation
#[derive(Debug, Serialize)]
pub struct SignUpResponse {
    pub user_id: Uuid,
}

/// Request body for login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: Uuid,
    pub company_id: Uuid,
}

/// POST /api/auth/signup
pub async fn sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<SignUpResponse>), ApiError> {
    let email = Email::parse(&req.email).map_err(ApiError::bad_request)?;

    if req.password.len() < 8 {
        return Err(ApiError::bad_request(
            "password must be at least 8 characters",
        ));
    }

    let password_hash = hash_password(&req.password)?;

    let user = User {
        id: Uuid::new_v4(),
        company_id: req.company_id,
        email,
        password_hash,
        display_name: req.display_name,
        is_active: true,
    };

    let repo = PostgresUserRepository::new(state.pool.clone());
    repo.insert(&user).await.map_err(|e| {
        if e.contains("duplicate") || e.contains("unique") {
            ApiError::conflict("email already registered")
        } else {
            ApiError::internal_error(e)
        }
    })?;

    Ok((StatusCode::CREATED, Json(SignUpResponse { user_id: user.id })))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = Email::parse(&req.email).map_err(ApiError::bad_request)?;

    let repo = PostgresUserRepository::new(state.pool.clone());
    let user = repo
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("invalid credentials"))?;

    if !user.is_active {
        return Err(ApiError::unauthorized("account is disabled"));
    }

    if !verify_password(&req.password, &user.password_hash)? {
        return Err(ApiError::unauthorized("invalid credentials"));
    }

    // Best-effort; login must not fail on a bookkeeping update.
    let _ = repo.touch_last_seen(user.id).await;

    let token = issue_token(user.id, user.company_id, &secret_from_env())?;

    Ok(Json(LoginResponse {
        token,
        user_id: user.id,
        company_id: user.company_id,
    }))
}
