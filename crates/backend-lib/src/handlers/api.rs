// ============================
// crates/backend-lib/src/handlers/api.rs
// ============================
//! Unauthenticated JSON API over the same user records.
//!
//! Success bodies are JSON for the reads and plain text for the writes;
//! errors are always plain text. Unlike `/signup`, `POST /api/users`
//! performs no existence check.
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::auth::hash_password;
use crate::error::AppError;
use crate::AppState;
use accounts_common::{Credentials, UpdatePassword, UserRecord};

/// `GET /api/users` — the full store contents, no pagination.
pub async fn list_users(State(state): State<AppState>) -> Response {
    match state.store.list().await {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => {
            error!(error = %e, "listing users failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error fetching users").into_response()
        },
    }
}

/// `POST /api/users` — unconditional insert.
pub async fn create_user(
    State(state): State<AppState>,
    Json(creds): Json<Credentials>,
) -> Result<Response, AppError> {
    let hash = hash_password(&creds.password).map_err(|e| AppError::PasswordHash(e.to_string()))?;
    state
        .store
        .insert(UserRecord {
            name: creds.name,
            password: hash,
        })
        .await?;

    Ok((StatusCode::CREATED, "User created successfully").into_response())
}

/// `GET /api/users/{name}` — the record as stored (the `password` field
/// holds the scrypt hash).
pub async fn get_user(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    match state.store.find(&name).await? {
        Some(user) => Ok((StatusCode::OK, Json(user)).into_response()),
        None => Err(AppError::NotFound("User not found.")),
    }
}

/// `PUT /api/users/{name}/password`
pub async fn update_password(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<UpdatePassword>,
) -> Result<Response, AppError> {
    let Some(new_password) = body.provided() else {
        return Err(AppError::MissingField("New password is required."));
    };

    let hash = hash_password(new_password).map_err(|e| AppError::PasswordHash(e.to_string()))?;
    if state.store.update_password(&name, &hash).await? {
        Ok((StatusCode::OK, "Password updated successfully.").into_response())
    } else {
        Err(AppError::NotFound("User not found."))
    }
}

/// `DELETE /api/users/{name}`
pub async fn delete_user(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    if state.store.delete(&name).await? {
        Ok((StatusCode::OK, "User deleted successfully.").into_response())
    } else {
        Err(AppError::NotFound("User not found."))
    }
}
