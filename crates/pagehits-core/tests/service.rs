//! CounterService delegation and end-to-end properties over the memory repository.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use http::{Method, StatusCode};

use pagehits_core::error::{PageHitsError, Result};
use pagehits_core::{
    handle_request, CounterService, MemoryVisitorRepository, VisitRequest, VisitorRepository,
    VisitorService,
};

/// Repository that echoes fixed values so delegation can be observed.
struct FixedRepository {
    increment: Result<u64>,
    retrieve: u64,
}

#[async_trait]
impl VisitorRepository for FixedRepository {
    async fn increment_count(&self, _page_id: &str) -> Result<u64> {
        match &self.increment {
            Ok(n) => Ok(*n),
            Err(e) => Err(PageHitsError::Repository(e.to_string())),
        }
    }

    async fn retrieve_count(&self, _page_id: &str) -> Result<u64> {
        Ok(self.retrieve)
    }
}

#[tokio::test]
async fn handle_visit_delegates_to_increment() {
    let svc = CounterService::new(Arc::new(FixedRepository {
        increment: Ok(42),
        retrieve: 7,
    }));
    assert_eq!(svc.handle_visit("/").await.unwrap(), 42);
}

#[tokio::test]
async fn get_visits_delegates_to_retrieve() {
    let svc = CounterService::new(Arc::new(FixedRepository {
        increment: Ok(42),
        retrieve: 7,
    }));
    assert_eq!(svc.get_visits("/").await.unwrap(), 7);
}

#[tokio::test]
async fn repository_error_surfaces_unchanged() {
    let svc = CounterService::new(Arc::new(FixedRepository {
        increment: Err(PageHitsError::Repository("throttled".into())),
        retrieve: 0,
    }));
    let err = svc.handle_visit("home").await.expect_err("must fail");
    assert_eq!(err.to_string(), "throttled");
}

#[tokio::test]
async fn get_visits_does_not_change_stored_count() {
    let repo = Arc::new(MemoryVisitorRepository::new());
    let svc = CounterService::new(repo.clone());

    svc.handle_visit("home").await.unwrap();
    svc.handle_visit("home").await.unwrap();
    for _ in 0..3 {
        assert_eq!(svc.get_visits("home").await.unwrap(), 2);
    }
    assert_eq!(repo.get("home").unwrap().count, 2);
}

#[tokio::test]
async fn post_then_get_through_handler() {
    let svc = CounterService::new(Arc::new(MemoryVisitorRepository::new()));
    let params = HashMap::from([("page_id".to_string(), "blog".to_string())]);

    let post = VisitRequest::new(Method::POST, params.clone());
    assert_eq!(handle_request(&svc, &post).await.body, r#"{"count":1}"#);
    assert_eq!(handle_request(&svc, &post).await.body, r#"{"count":2}"#);

    let get = VisitRequest::new(Method::GET, params);
    let resp = handle_request(&svc, &get).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, r#"{"count":2}"#);
}
