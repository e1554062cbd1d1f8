use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{USERNAME_MAX_LEN, USERNAME_MIN_LEN};
use crate::error::{AppError, Result};
use crate::routes::validation::{length_in, string_field};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct UpdateTimeResponse {
    pub success: bool,
}

/// Overwrite a user's cumulative playtime
///
/// `time` must be a non-negative integer. A username with no matching row is
/// reported as not found, never upserted.
pub async fn update_time(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<UpdateTimeResponse>> {
    let username = string_field(&body, "username", USERNAME_MIN_LEN, USERNAME_MAX_LEN)
        .ok_or(AppError::InvalidData)?;
    let time = body
        .get("time")
        .and_then(Value::as_i64)
        .filter(|t| *t >= 0)
        .ok_or(AppError::InvalidData)?;

    match state.store.set_time(username, time).await {
        Ok(true) => Ok(Json(UpdateTimeResponse { success: true })),
        Ok(false) => Err(AppError::UserNotFound),
        Err(e) => {
            tracing::error!(error = ?e, "time update failed");
            Err(AppError::UpdateTimeFailed)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TimeQuery {
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TimeResponse {
    pub success: bool,
    pub time: i64,
}

/// Read-only lookup of a user's playtime
pub async fn get_time(
    State(state): State<AppState>,
    Query(query): Query<TimeQuery>,
) -> Result<Json<TimeResponse>> {
    let username = query
        .username
        .as_deref()
        .filter(|u| length_in(u, USERNAME_MIN_LEN, USERNAME_MAX_LEN))
        .ok_or(AppError::UsernameRequired)?;

    match state.store.time_for(username).await {
        Ok(Some(time)) => Ok(Json(TimeResponse {
            success: true,
            time,
        })),
        Ok(None) => Err(AppError::UserNotFound),
        Err(e) => {
            tracing::error!(error = ?e, "time lookup failed");
            Err(AppError::TimeLookupFailed)
        }
    }
}
