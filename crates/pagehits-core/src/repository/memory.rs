//! In-process repository backed by `DashMap`.
//!
//! Used by tests and local demos. Each key is updated under its shard lock via
//! the entry API, so concurrent increments of one page never lose a visit.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::Result;
use crate::model::VisitorCount;
use crate::repository::VisitorRepository;

#[derive(Default)]
pub struct MemoryVisitorRepository {
    records: DashMap<String, VisitorCount>,
}

impl MemoryVisitorRepository {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Number of pages with a stored record.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stored record for `page_id`, if any.
    pub fn get(&self, page_id: &str) -> Option<VisitorCount> {
        self.records.get(page_id).map(|r| r.value().clone())
    }
}

#[async_trait]
impl VisitorRepository for MemoryVisitorRepository {
    async fn increment_count(&self, page_id: &str) -> Result<u64> {
        let mut entry = self
            .records
            .entry(page_id.to_string())
            .or_insert_with(|| VisitorCount::unseen(page_id));
        entry.count += 1;
        Ok(entry.count)
    }

    async fn retrieve_count(&self, page_id: &str) -> Result<u64> {
        Ok(self.records.get(page_id).map(|r| r.count).unwrap_or(0))
    }
}
