use crate::storage::models::{Cursor, Record, ScanPage};
use anyhow::Result;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;

/// Backend operations the migration pipeline consumes. One implementation
/// per backend; the table name is a per-call parameter so a single store
/// serves both the source and the target.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Check whether a table exists.
    async fn table_exists(&self, table: &str) -> Result<bool>;

    /// Fetch one page of a full-table scan, resuming after `cursor`.
    async fn scan_page(&self, table: &str, cursor: Option<Cursor>) -> Result<ScanPage>;

    /// Write one item to a table. A put is a full-record upsert keyed by
    /// the table's own key schema, so replays are harmless.
    async fn put_item(&self, table: &str, item: Record) -> Result<()>;
}

/// DynamoDB Storage Layer
pub struct DynamoDBStore {
    client: Client,
}

impl DynamoDBStore {
    /// Build a client against the given region.
    pub async fn new(region: &str) -> Result<Self> {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        let client = Client::new(&config);

        Ok(Self { client })
    }
}

#[async_trait]
impl TableStore for DynamoDBStore {
    async fn table_exists(&self, table: &str) -> Result<bool> {
        match self.client.describe_table().table_name(table).send().await {
            Ok(_) => Ok(true),
            Err(err) => {
                let err = err.into_service_error();
                if err.is_resource_not_found_exception() {
                    Ok(false)
                } else {
                    Err(err.into())
                }
            }
        }
    }

    async fn scan_page(&self, table: &str, cursor: Option<Cursor>) -> Result<ScanPage> {
        let response = self
            .client
            .scan()
            .table_name(table)
            .set_exclusive_start_key(cursor)
            .send()
            .await?;

        Ok(ScanPage {
            items: response.items.unwrap_or_default(),
            next_cursor: response.last_evaluated_key,
        })
    }

    async fn put_item(&self, table: &str, item: Record) -> Result<()> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(item))
            .send()
            .await?;

        Ok(())
    }
}
