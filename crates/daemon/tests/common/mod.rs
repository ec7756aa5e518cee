//! Shared helpers for daemon integration tests
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use common::release::KeyRelease;
use common::testkit::{fixed_eon_key, manual_clock, ManualTimeSource};
use epochlock_daemon::http_server::{self, Config};
use epochlock_daemon::ServiceState;

pub const EPOCH_DURATION: u64 = 10;
pub const START_SECS: i64 = 1_700_000_000;

/// Service state over the fixed eon key, with time frozen at `START_SECS`
pub fn setup_state() -> (ServiceState, Arc<ManualTimeSource>) {
    let (clock, time) = manual_clock(EPOCH_DURATION, START_SECS);
    let release = KeyRelease::new(Arc::new(fixed_eon_key()), clock);
    (ServiceState::new(release), time)
}

pub fn http_config() -> Config {
    Config::new(SocketAddr::from(([127, 0, 0, 1], 0)), tracing::Level::DEBUG)
}

pub fn setup_router() -> (Router, ServiceState, Arc<ManualTimeSource>) {
    let (state, time) = setup_state();
    let router = http_server::router(&http_config(), state.clone());
    (router, state, time)
}

/// Send a GET through the router and return status plus parsed JSON body
pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .header("accept", "application/json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}
