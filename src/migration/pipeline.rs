use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::migration::{collector, writer, MigrateError, Result};
use crate::storage::TableStore;
use crate::utils::Settings;

/// Outcome of one migration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationSummary {
    /// Items collected from the source table.
    pub found: usize,
    /// Items successfully written to the target table.
    pub written: usize,
}

impl MigrationSummary {
    /// True when every collected item reached the target.
    pub fn is_complete(&self) -> bool {
        self.written == self.found
    }
}

/// One-shot batch migration: read everything from the source table, then
/// write everything to the target table. No streaming overlap between the
/// two phases and no resume across runs.
pub struct Migration<S: TableStore + ?Sized> {
    store: Arc<S>,
    settings: Settings,
}

impl<S: TableStore + ?Sized> Migration<S> {
    pub fn new(store: Arc<S>, settings: Settings) -> Self {
        Self { store, settings }
    }

    /// Run the pipeline: validate source → collect all → validate target →
    /// fan out writes. Fails fast on a missing table or an empty source;
    /// per-item write failures only show up in the summary tally.
    pub async fn run(&self) -> Result<MigrationSummary> {
        self.ensure_table(&self.settings.source_table).await?;

        let items =
            collector::collect_all(self.store.as_ref(), &self.settings.source_table).await?;
        if items.is_empty() {
            return Err(MigrateError::EmptySource(self.settings.source_table.clone()));
        }

        self.ensure_table(&self.settings.target_table).await?;

        let found = items.len();
        let written = writer::write_all(
            self.store.as_ref(),
            &self.settings.target_table,
            items,
            self.settings.concurrency,
        )
        .await;

        Ok(MigrationSummary { found, written })
    }

    /// Existence guard: refuse to operate on a table the backend does not know.
    async fn ensure_table(&self, table: &str) -> Result<()> {
        if self.store.table_exists(table).await? {
            Ok(())
        } else {
            Err(MigrateError::TableNotFound(table.to_string()))
        }
    }
}
