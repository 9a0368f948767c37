//! Service seam between the handler and the repository.
//!
//! `CounterService` is a pass-through today; business rules go here.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::repository::VisitorRepository;

#[async_trait]
pub trait VisitorService: Send + Sync {
    /// Current visit count of `page_id`. Side-effect free.
    async fn get_visits(&self, page_id: &str) -> Result<u64>;

    /// Record one visit and return the new count.
    async fn handle_visit(&self, page_id: &str) -> Result<u64>;
}

#[derive(Clone)]
pub struct CounterService {
    repo: Arc<dyn VisitorRepository>,
}

impl CounterService {
    pub fn new(repo: Arc<dyn VisitorRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl VisitorService for CounterService {
    async fn get_visits(&self, page_id: &str) -> Result<u64> {
        self.repo.retrieve_count(page_id).await
    }

    async fn handle_visit(&self, page_id: &str) -> Result<u64> {
        self.repo.increment_count(page_id).await
    }
}
