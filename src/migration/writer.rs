use crate::storage::{record_to_json, Record, TableStore};
use futures::stream::{self, StreamExt};

/// Write every item to `table`, keeping up to `max_in_flight` puts
/// outstanding at once. Completion order is unspecified. A failed put is
/// logged with its payload and skipped; it does not retry and does not abort
/// sibling writes. Returns the count of successful writes.
pub async fn write_all<S: TableStore + ?Sized>(
    store: &S,
    table: &str,
    items: Vec<Record>,
    max_in_flight: usize,
) -> usize {
    let total = items.len();

    let tally = stream::iter(items)
        .map(|item| async move {
            match store.put_item(table, item.clone()).await {
                Ok(()) => 1usize,
                Err(err) => {
                    tracing::error!(
                        error = %err,
                        item = %record_to_json(&item),
                        "write item failed"
                    );
                    0
                }
            }
        })
        .buffer_unordered(max_in_flight.max(1))
        .fold(0usize, |tally, n| async move { tally + n })
        .await;

    tracing::info!("Wrote {} of {} items to {}", tally, total, table);

    tally
}
