//! Top-level facade crate for pagehits.
//!
//! Re-exports the core contracts and the gateway library so users can depend on a single crate.

pub mod core {
    pub use pagehits_core::*;
}

pub mod gateway {
    pub use pagehits_gateway::*;
}
