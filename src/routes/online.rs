use std::sync::atomic::Ordering;

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct OnlineResponse {
    pub online: u64,
}

#[derive(Debug, Serialize)]
pub struct SetOnlineResponse {
    pub success: bool,
    pub online: u64,
}

/// Current online player count. Cannot fail.
pub async fn get_online(State(state): State<AppState>) -> Json<OnlineResponse> {
    Json(OnlineResponse {
        online: state.online.load(Ordering::Relaxed),
    })
}

/// Overwrite the online player count
///
/// Advisory telemetry: any caller may set it, concurrent writers race and
/// the last write wins. Rejects anything but a non-negative integer.
pub async fn set_online(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SetOnlineResponse>> {
    let count = body
        .get("count")
        .and_then(Value::as_u64)
        .ok_or(AppError::InvalidCount)?;

    state.online.store(count, Ordering::Relaxed);

    Ok(Json(SetOnlineResponse {
        success: true,
        online: count,
    }))
}
