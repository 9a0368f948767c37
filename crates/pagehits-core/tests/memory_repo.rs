//! Counter semantics of the in-memory repository.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use pagehits_core::{MemoryVisitorRepository, VisitorRepository};

#[tokio::test]
async fn first_increment_yields_one() {
    let repo = MemoryVisitorRepository::new();
    assert_eq!(repo.increment_count("test-page").await.unwrap(), 1);
}

#[tokio::test]
async fn sequential_increments_count_up() {
    let repo = MemoryVisitorRepository::new();
    for i in 1..=5 {
        assert_eq!(repo.increment_count("test-page-multiple").await.unwrap(), i);
    }
    assert_eq!(repo.retrieve_count("test-page-multiple").await.unwrap(), 5);
}

#[tokio::test]
async fn unseen_page_reads_zero_without_creating_record() {
    let repo = MemoryVisitorRepository::new();
    assert_eq!(repo.retrieve_count("nonexistent-page-12345").await.unwrap(), 0);
    assert!(repo.is_empty());
}

#[tokio::test]
async fn pages_are_counted_independently() {
    let repo = MemoryVisitorRepository::new();
    repo.increment_count("a").await.unwrap();
    repo.increment_count("a").await.unwrap();
    repo.increment_count("b").await.unwrap();

    assert_eq!(repo.retrieve_count("a").await.unwrap(), 2);
    assert_eq!(repo.retrieve_count("b").await.unwrap(), 1);
    assert_eq!(repo.len(), 2);
}

#[tokio::test]
async fn concurrent_increments_are_not_lost() {
    let repo = Arc::new(MemoryVisitorRepository::new());
    let mut tasks = Vec::new();
    for _ in 0..32 {
        let repo = Arc::clone(&repo);
        tasks.push(tokio::spawn(async move {
            repo.increment_count("hot").await.unwrap()
        }));
    }

    let mut seen = Vec::new();
    for t in tasks {
        seen.push(t.await.unwrap());
    }
    seen.sort_unstable();

    assert_eq!(seen, (1..=32).collect::<Vec<u64>>());
    assert_eq!(repo.retrieve_count("hot").await.unwrap(), 32);
}
