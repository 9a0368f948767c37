//! Operational HTTP endpoints (local mode).
//!
//! - `/_ops/healthz` : liveness

use axum::{http::StatusCode, response::IntoResponse};

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
