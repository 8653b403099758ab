pub mod dynamodb;
pub mod models;

pub use dynamodb::{DynamoDBStore, TableStore};
pub use models::{record_to_json, Cursor, Record, ScanPage};

#[cfg(test)]
pub use dynamodb::MockTableStore;
