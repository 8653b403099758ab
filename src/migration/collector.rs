use crate::migration::Result;
use crate::storage::{Record, TableStore};

/// Read every item from `table`, following the scan cursor until the backend
/// stops returning one. Items are accumulated in backend-reported page order
/// with no deduplication and no sort. The whole dataset is held in memory.
pub async fn collect_all<S: TableStore + ?Sized>(store: &S, table: &str) -> Result<Vec<Record>> {
    let mut items: Vec<Record> = Vec::new();
    let mut cursor = None;
    let mut pages = 0usize;

    loop {
        let page = store.scan_page(table, cursor.take()).await?;
        pages += 1;
        tracing::debug!(table, page = pages, count = page.items.len(), "scanned page");
        items.extend(page.items);

        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    tracing::info!("Found {} items in {} across {} pages", items.len(), table, pages);

    Ok(items)
}
