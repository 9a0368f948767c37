//! Axum router wiring for local mode.
//!
//! `/:page_id` accepts every method and hands it to the core handler, which
//! answers 405 for anything but GET/POST. `/` reaches the handler without a
//! path parameter and gets 400. Anything else is a JSON 404.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::{header, Method},
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};

use pagehits_core::{handle_request, VisitRequest, VisitResponse};

use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/_ops/healthz", get(ops::healthz))
        .route("/", any(visit_root))
        .route("/:page_id", any(visit))
        .fallback(not_found)
        .with_state(state)
}

async fn visit(
    State(state): State<AppState>,
    method: Method,
    Path(params): Path<HashMap<String, String>>,
) -> Response {
    respond(&state, VisitRequest::new(method, params)).await
}

async fn visit_root(State(state): State<AppState>, method: Method) -> Response {
    respond(&state, VisitRequest::new(method, HashMap::new())).await
}

async fn not_found() -> Response {
    into_http(VisitResponse::not_found())
}

async fn respond(state: &AppState, req: VisitRequest) -> Response {
    let resp = handle_request(state.service().as_ref(), &req).await;
    into_http(resp)
}

fn into_http(resp: VisitResponse) -> Response {
    (
        resp.status,
        [(header::CONTENT_TYPE, resp.content_type())],
        resp.body,
    )
        .into_response()
}
