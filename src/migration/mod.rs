pub mod collector;
pub mod pipeline;
pub mod writer;

pub use pipeline::{Migration, MigrationSummary};

use thiserror::Error;

/// Fatal conditions that abort a migration run. Per-item write failures are
/// not in here; they only lower the write tally.
#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("table {0} is not found")]
    TableNotFound(String),

    #[error("found 0 items in {0}, nothing to migrate")]
    EmptySource(String),

    #[error("backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, MigrateError>;
