//! pagehits core: the visitor counter contract.
//!
//! This crate defines the repository and service seams, the request handler
//! that shapes HTTP-like responses, and the shared error surface. It carries no
//! AWS or HTTP-server dependencies so the same handler can be driven by the
//! Lambda adapter, the local axum router, and tests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Every fallible path
//! surfaces as `PageHitsError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

/// Shared result type.
pub use error::{ErrorStatus, PageHitsError, Result};
pub use handler::{handle_request, VisitRequest, VisitResponse, PAGE_ID_PARAM};
pub use model::VisitorCount;
pub use repository::{MemoryVisitorRepository, VisitorRepository};
pub use service::{CounterService, VisitorService};
