//! Repository seam over the remote key-value store.
//!
//! Implementations must make `increment_count` a single atomic operation on
//! the store side (no read-then-write window) and must treat a missing record
//! as a zero count on read.

pub mod memory;

use async_trait::async_trait;

use crate::error::Result;

pub use memory::MemoryVisitorRepository;

#[async_trait]
pub trait VisitorRepository: Send + Sync {
    /// Atomically add one visit to `page_id`, creating the record when absent.
    /// Returns the post-increment count.
    async fn increment_count(&self, page_id: &str) -> Result<u64>;

    /// Strongly consistent read of the visit count. Absent records return `Ok(0)`.
    async fn retrieve_count(&self, page_id: &str) -> Result<u64>;
}
