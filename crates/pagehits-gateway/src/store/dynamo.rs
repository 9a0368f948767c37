//! DynamoDB-backed visitor repository.
//!
//! Table layout: hash key `page_id` (S), attribute `count` (N).
//! Increments use a single `UpdateItem` with `if_not_exists` arithmetic, so
//! concurrent visits to one page are serialized by DynamoDB itself. Reads are
//! strongly consistent.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, BillingMode, KeySchemaElement, KeyType, ReturnValue,
    ScalarAttributeType, TableStatus,
};
use aws_sdk_dynamodb::Client;

use pagehits_core::error::{PageHitsError, Result};
use pagehits_core::{VisitorCount, VisitorRepository};

use crate::config::StoreSection;

pub const PAGE_ID_ATTR: &str = "page_id";
pub const COUNT_ATTR: &str = "count";

const INCREMENT_EXPR: &str = "SET #count = if_not_exists(#count, :zero) + :inc";

const TABLE_READY_POLLS: u32 = 30;
const TABLE_READY_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone, Debug)]
pub struct DynamoVisitorRepository {
    client: Client,
    table_name: String,
}

impl DynamoVisitorRepository {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Build a client from the default AWS provider chain plus the store section.
    pub async fn from_config(store: &StoreSection) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &store.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &store.endpoint_url {
            loader = loader.endpoint_url(endpoint.as_str());
        }
        let sdk = loader.load().await;

        tracing::info!(
            table = %store.table_name,
            endpoint = store.endpoint_url.as_deref().unwrap_or("default"),
            "dynamodb repository configured"
        );
        Self::new(Client::new(&sdk), store.table_name.clone())
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn key(page_id: &str) -> AttributeValue {
        AttributeValue::S(page_id.to_string())
    }

    /// Create the table (on-demand billing) and wait until it is active.
    pub async fn create_table(&self) -> Result<()> {
        let key_attr = AttributeDefinition::builder()
            .attribute_name(PAGE_ID_ATTR)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(repo_err)?;
        let key_schema = KeySchemaElement::builder()
            .attribute_name(PAGE_ID_ATTR)
            .key_type(KeyType::Hash)
            .build()
            .map_err(repo_err)?;

        self.client
            .create_table()
            .table_name(&self.table_name)
            .attribute_definitions(key_attr)
            .key_schema(key_schema)
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .map_err(sdk_err)?;

        for _ in 0..TABLE_READY_POLLS {
            let out = self
                .client
                .describe_table()
                .table_name(&self.table_name)
                .send()
                .await
                .map_err(sdk_err)?;
            if out.table().and_then(|t| t.table_status()) == Some(&TableStatus::Active) {
                tracing::info!(table = %self.table_name, "table active");
                return Ok(());
            }
            tokio::time::sleep(TABLE_READY_INTERVAL).await;
        }

        Err(PageHitsError::Repository(format!(
            "table {} did not become active",
            self.table_name
        )))
    }

    pub async fn delete_table(&self) -> Result<()> {
        self.client
            .delete_table()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(sdk_err)?;
        tracing::info!(table = %self.table_name, "table deleted");
        Ok(())
    }
}

#[async_trait]
impl VisitorRepository for DynamoVisitorRepository {
    async fn increment_count(&self, page_id: &str) -> Result<u64> {
        let out = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(PAGE_ID_ATTR, Self::key(page_id))
            .update_expression(INCREMENT_EXPR)
            .expression_attribute_names("#count", COUNT_ATTR)
            .expression_attribute_values(":inc", AttributeValue::N("1".into()))
            .expression_attribute_values(":zero", AttributeValue::N("0".into()))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(sdk_err)?;

        let item = out.attributes().ok_or_else(|| {
            PageHitsError::Repository("UpdateItem returned no attributes".into())
        })?;
        let record = decode_item(page_id, item)?;
        tracing::debug!(
            table = %self.table_name,
            page_id = %record.page_id,
            count = record.count,
            "incremented"
        );
        Ok(record.count)
    }

    async fn retrieve_count(&self, page_id: &str) -> Result<u64> {
        let out = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(PAGE_ID_ATTR, Self::key(page_id))
            .consistent_read(true)
            .send()
            .await
            .map_err(sdk_err)?;

        match out.item() {
            Some(item) => Ok(decode_item(page_id, item)?.count),
            None => Ok(VisitorCount::unseen(page_id).count),
        }
    }
}

/// Decode a stored item. A missing `count` reads as zero; a non-numeric one is an error.
pub fn decode_item(page_id: &str, item: &HashMap<String, AttributeValue>) -> Result<VisitorCount> {
    let page_id = match item.get(PAGE_ID_ATTR) {
        Some(AttributeValue::S(s)) => s.clone(),
        _ => page_id.to_string(),
    };

    let count = match item.get(COUNT_ATTR) {
        None => 0,
        Some(AttributeValue::N(n)) => n.parse::<u64>().map_err(|e| {
            PageHitsError::Repository(format!("invalid count `{n}` for page {page_id}: {e}"))
        })?,
        Some(other) => {
            return Err(PageHitsError::Repository(format!(
                "count attribute for page {page_id} is not a number: {other:?}"
            )))
        }
    };

    Ok(VisitorCount { page_id, count })
}

fn sdk_err<E>(e: E) -> PageHitsError
where
    E: std::error::Error,
{
    PageHitsError::Repository(DisplayErrorContext(&e).to_string())
}

fn repo_err(e: impl std::fmt::Display) -> PageHitsError {
    PageHitsError::Repository(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(pairs: &[(&str, AttributeValue)]) -> HashMap<String, AttributeValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn decodes_numeric_count() {
        let it = item(&[
            (PAGE_ID_ATTR, AttributeValue::S("home".into())),
            (COUNT_ATTR, AttributeValue::N("12".into())),
        ]);
        let rec = decode_item("home", &it).unwrap();
        assert_eq!(
            rec,
            VisitorCount {
                page_id: "home".into(),
                count: 12
            }
        );
    }

    #[test]
    fn missing_count_reads_zero() {
        let it = item(&[(PAGE_ID_ATTR, AttributeValue::S("home".into()))]);
        assert!(matches!(decode_item("home", &it), Ok(VisitorCount { count: 0, .. })));
    }

    #[test]
    fn string_count_is_a_repository_error() {
        let it = item(&[(COUNT_ATTR, AttributeValue::S("12".into()))]);
        assert!(matches!(decode_item("home", &it), Err(PageHitsError::Repository(_))));
    }

    #[test]
    fn negative_count_is_a_repository_error() {
        let it = item(&[(COUNT_ATTR, AttributeValue::N("-1".into()))]);
        let err = decode_item("home", &it).unwrap_err().to_string();
        assert!(err.contains("invalid count `-1`"), "{err}");
    }
}
