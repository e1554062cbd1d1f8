use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error type
///
/// One variant per user-facing outcome; the display string is the exact
/// message the game client expects. Storage-layer causes are collapsed into
/// the operation's generic variant at the call site, where the underlying
/// error is logged before being discarded.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid credentials.")]
    InvalidCredentials,

    /// Also covers any storage failure during registration; the client
    /// contract does not distinguish the cause.
    #[error("Username already exists.")]
    UsernameTaken,

    /// Unknown username and wrong password share one message so login
    /// cannot be used to enumerate accounts.
    #[error("Invalid username or password.")]
    LoginRejected,

    #[error("Login failed.")]
    LoginFailed,

    #[error("Invalid data.")]
    InvalidData,

    #[error("User not found.")]
    UserNotFound,

    #[error("Failed to update time.")]
    UpdateTimeFailed,

    #[error("Username required.")]
    UsernameRequired,

    #[error("Error fetching time.")]
    TimeLookupFailed,

    #[error("Invalid count.")]
    InvalidCount,
}

/// Implement IntoResponse to convert AppError into HTTP responses
///
/// Logical failures ride on HTTP 200; clients key off the `success` field,
/// not the status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));

        (StatusCode::OK, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
