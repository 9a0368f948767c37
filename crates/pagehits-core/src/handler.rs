//! Request handler: HTTP-shaped request in, HTTP-shaped JSON response out.
//!
//! The handler never fails at the transport level. Missing input, unsupported
//! methods and service errors are all encoded as a status code plus a
//! `{"error": ...}` body, so the invoking runtime always receives a
//! well-formed response.

use std::collections::HashMap;

use http::{Method, StatusCode};
use serde::Serialize;
use serde_json::json;

use crate::error::{PageHitsError, Result};
use crate::service::VisitorService;

/// Path parameter carrying the page identifier.
pub const PAGE_ID_PARAM: &str = "page_id";

/// Message returned when the path parameter is absent.
pub const MISSING_PAGE_ID: &str = "Bad Request: missing page_id path parameter";

/// Content type of every response body.
pub const CONTENT_TYPE_JSON: &str = "application/json";

pub const NOT_FOUND_MESSAGE: &str = "Not Found";

/// Transport-neutral view of an inbound request.
#[derive(Debug, Clone)]
pub struct VisitRequest {
    pub method: Method,
    pub path_parameters: HashMap<String, String>,
}

impl VisitRequest {
    pub fn new(method: Method, path_parameters: HashMap<String, String>) -> Self {
        Self {
            method,
            path_parameters,
        }
    }

    fn page_id(&self) -> Result<&str> {
        self.path_parameters
            .get(PAGE_ID_PARAM)
            .map(String::as_str)
            .ok_or_else(|| PageHitsError::Validation(MISSING_PAGE_ID.into()))
    }
}

/// Response produced by [`handle_request`]. Always `application/json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitResponse {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Serialize)]
struct CountBody {
    count: u64,
}

impl VisitResponse {
    pub fn count(count: u64) -> Self {
        Self {
            status: StatusCode::OK,
            body: json_body(&CountBody { count }),
        }
    }

    pub fn error(err: &PageHitsError) -> Self {
        Self::error_message(err.status().status_code(), &err.to_string())
    }

    /// Answer for routes outside the page surface.
    pub fn not_found() -> Self {
        Self::error_message(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
    }

    fn error_message(status: StatusCode, msg: &str) -> Self {
        Self {
            status,
            body: json!({ "error": msg }).to_string(),
        }
    }

    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE_JSON
    }
}

fn json_body<T: Serialize>(v: &T) -> String {
    // Plain structs of integers always serialize.
    serde_json::to_string(v).unwrap_or_else(|_| "{}".to_string())
}

/// Dispatch one request onto `svc` and shape the result.
pub async fn handle_request(svc: &dyn VisitorService, req: &VisitRequest) -> VisitResponse {
    match dispatch(svc, req).await {
        Ok(count) => VisitResponse::count(count),
        Err(e) => {
            tracing::warn!(method = %req.method, error = %e, "visit request failed");
            VisitResponse::error(&e)
        }
    }
}

async fn dispatch(svc: &dyn VisitorService, req: &VisitRequest) -> Result<u64> {
    let page_id = req.page_id()?;
    tracing::debug!(method = %req.method, page_id = %page_id, "visit request");

    match req.method {
        Method::GET => svc.get_visits(page_id).await,
        Method::POST => svc.handle_visit(page_id).await,
        _ => Err(PageHitsError::MethodNotAllowed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_escapes_quotes() {
        let err = PageHitsError::Repository(r#"bad "count" attribute"#.into());
        let resp = VisitResponse::error(&err);
        let v: serde_json::Value = serde_json::from_str(&resp.body).unwrap_or_default();
        assert_eq!(v["error"], r#"bad "count" attribute"#);
    }

    #[test]
    fn not_found_is_json() {
        let resp = VisitResponse::not_found();
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
        assert_eq!(resp.body, r#"{"error":"Not Found"}"#);
    }

    #[test]
    fn count_body_is_compact() {
        assert_eq!(VisitResponse::count(7).body, r#"{"count":7}"#);
    }
}
