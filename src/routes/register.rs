use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::constants::{
    PASSWORD_MAX_LEN, PASSWORD_MIN_LEN, USERNAME_MAX_LEN, USERNAME_MIN_LEN,
};
use crate::db::is_unique_violation;
use crate::error::{AppError, Result};
use crate::routes::validation::string_field;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Register a new user
///
/// Hashes the password with bcrypt and inserts a row with default counters.
/// Validation failures never touch the store; every storage failure,
/// duplicate username included, collapses into the same "already exists"
/// reply.
pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<RegisterResponse>> {
    let username = string_field(&body, "username", USERNAME_MIN_LEN, USERNAME_MAX_LEN)
        .ok_or(AppError::InvalidCredentials)?;
    let password = string_field(&body, "password", PASSWORD_MIN_LEN, PASSWORD_MAX_LEN)
        .ok_or(AppError::InvalidCredentials)?;

    // bcrypt at cost 12 takes a noticeable slice of CPU; keep it off the
    // async workers.
    let cost = state.config.bcrypt_cost;
    let password = password.to_string();
    let hash = match tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await {
        Ok(Ok(hash)) => hash,
        Ok(Err(e)) => {
            tracing::error!(error = ?e, "password hashing failed");
            return Err(AppError::UsernameTaken);
        }
        Err(e) => {
            tracing::error!(error = ?e, "password hashing task failed");
            return Err(AppError::UsernameTaken);
        }
    };

    if let Err(e) = state.store.insert_user(username, &hash).await {
        if is_unique_violation(&e) {
            tracing::info!(username, "registration rejected: username taken");
        } else {
            tracing::error!(error = ?e, "registration insert failed");
        }
        return Err(AppError::UsernameTaken);
    }

    tracing::info!(username, "new user registered");

    Ok(Json(RegisterResponse {
        success: true,
        message: "Registration successful.",
    }))
}
