//! Remote store adapters.

pub mod dynamo;

pub use dynamo::DynamoVisitorRepository;
