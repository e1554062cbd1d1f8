use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::{Mutex, PoisonError};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;

use crate::AppState;

/// Per-client request counter for the current window
#[derive(Debug, Clone, Copy)]
struct Window {
    started_at: i64,
    count: u64,
}

/// Client windows plus the time of the last expiry sweep
#[derive(Debug, Default)]
struct Clients {
    map: HashMap<IpAddr, Window>,
    swept_at: i64,
}

/// Fixed-window request limiter keyed by client IP.
///
/// Counters live in process memory and reset when the window expires, so a
/// restart forgives everyone. That is fine for an abuse cap in front of CRUD
/// handlers; this is not an accounting system. Expired entries are swept at
/// most once per window so the map stays bounded by the number of clients
/// seen in the last window, not over the process lifetime.
pub struct RateLimiter {
    max_requests: u64,
    window_secs: i64,
    clients: Mutex<Clients>,
}

impl RateLimiter {
    pub fn new(max_requests: u64, window_secs: i64) -> Self {
        Self {
            max_requests,
            window_secs,
            clients: Mutex::new(Clients::default()),
        }
    }

    /// Check whether a request from `client` is allowed at time `now`,
    /// counting it if so
    pub fn check(&self, client: IpAddr, now: i64) -> bool {
        let mut clients = self
            .clients
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if now - clients.swept_at >= self.window_secs {
            let window_secs = self.window_secs;
            clients.map.retain(|_, w| now - w.started_at < window_secs);
            clients.swept_at = now;
        }

        let window = clients.map.entry(client).or_insert(Window {
            started_at: now,
            count: 0,
        });

        if now - window.started_at >= self.window_secs {
            window.started_at = now;
            window.count = 0;
        }

        if window.count >= self.max_requests {
            return false;
        }

        window.count += 1;
        true
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.clients
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .map
            .len()
    }
}

/// Middleware that rejects requests over the per-client cap before they
/// reach any handler
pub async fn enforce(State(state): State<AppState>, req: Request, next: Next) -> Response {
    // No peer address (e.g. in-process test requests) collapses into one
    // shared bucket.
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    if !state.limiter.check(client, Utc::now().timestamp()) {
        tracing::warn!(%client, "request rate limit exceeded");
        let body = Json(json!({
            "success": false,
            "message": "Too many requests.",
        }));
        return (StatusCode::TOO_MANY_REQUESTS, body).into_response();
    }

    next.run(req).await
}
