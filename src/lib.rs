//! Icehook Stats Server Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod rate_limit;
pub mod routes;

pub use config::Config;
pub use db::Store;
pub use error::{AppError, Result};

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use rate_limit::RateLimiter;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Config,
    /// Online player count. Ephemeral, last-write-wins telemetry reported
    /// by clients; resets to 0 on restart.
    pub online: Arc<AtomicU64>,
    pub limiter: Arc<RateLimiter>,
}

impl AppState {
    /// Create a new AppState with the given store and configuration
    pub fn new(store: Store, config: Config) -> Self {
        let limiter = Arc::new(RateLimiter::new(
            config.rate_limit_requests,
            config.rate_limit_window_secs as i64,
        ));
        Self {
            store,
            config,
            online: Arc::new(AtomicU64::new(0)),
            limiter,
        }
    }
}
