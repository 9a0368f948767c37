//! pagehits gateway library entry.
//!
//! This crate wires configuration, the DynamoDB repository, and the two
//! front doors (Lambda API Gateway events and a local axum router) onto the
//! core handler. It is consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
pub mod transport;
