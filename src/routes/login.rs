use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::constants::{
    PASSWORD_MAX_LEN, PASSWORD_MIN_LEN, USERNAME_MAX_LEN, USERNAME_MIN_LEN,
};
use crate::error::{AppError, Result};
use crate::routes::validation::string_field;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
    pub username: String,
    pub time: i64,
    pub kills: i64,
    pub freezes: i64,
    pub hooks: i64,
    pub fires: i64,
}

/// Authenticate a user and return their stats
///
/// Unknown usernames and wrong passwords get the identical `LoginRejected`
/// reply so the endpoint cannot be used to probe which accounts exist. The
/// password hash never appears in any response.
pub async fn login_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<LoginResponse>> {
    let username = string_field(&body, "username", USERNAME_MIN_LEN, USERNAME_MAX_LEN)
        .ok_or(AppError::LoginRejected)?;
    let password = string_field(&body, "password", PASSWORD_MIN_LEN, PASSWORD_MAX_LEN)
        .ok_or(AppError::LoginRejected)?;

    let user = state
        .store
        .user_by_username(username)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "login lookup failed");
            AppError::LoginFailed
        })?
        .ok_or(AppError::LoginRejected)?;

    let password = password.to_string();
    let hash = user.password.clone();
    match tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await {
        Ok(Ok(true)) => {}
        Ok(Ok(false)) => return Err(AppError::LoginRejected),
        Ok(Err(e)) => {
            tracing::error!(error = ?e, "password verification failed");
            return Err(AppError::LoginFailed);
        }
        Err(e) => {
            tracing::error!(error = ?e, "password verification task failed");
            return Err(AppError::LoginFailed);
        }
    }

    tracing::info!(username = %user.username, "user logged in");

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful.",
        username: user.username,
        time: user.time,
        kills: user.kills,
        freezes: user.freezes,
        hooks: user.hooks,
        fires: user.fires,
    }))
}
