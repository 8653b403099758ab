mod migration;
mod storage;
mod utils;


use std::process::ExitCode;
use std::sync::Arc;

use clap::error::ErrorKind;
use clap::Parser;

use crate::migration::Migration;
use crate::utils::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    utils::init_logging();

    // clap's own message names the missing flag
    let settings = match Settings::try_parse() {
        Ok(settings) => settings,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    tracing::info!(
        region = %settings.region,
        source = %settings.source_table,
        target = %settings.target_table,
        "Start to migrate"
    );

    let store = match storage::DynamoDBStore::new(&settings.region).await {
        Ok(store) => Arc::new(store),
        Err(err) => {
            tracing::error!("Failed to build DynamoDB client: {err}");
            return ExitCode::from(1);
        }
    };

    // All fatal conditions surface here; exit codes are decided in one place.
    match Migration::new(store, settings).run().await {
        Ok(summary) if summary.is_complete() => {
            tracing::info!(
                "Migration finished: {} of {} items written",
                summary.written,
                summary.found
            );
            ExitCode::SUCCESS
        }
        Ok(summary) => {
            tracing::warn!(
                "Migration finished with failures: {} of {} items written",
                summary.written,
                summary.found
            );
            ExitCode::from(1)
        }
        Err(err) => {
            tracing::error!("Migration aborted: {err}");
            ExitCode::from(1)
        }
    }
}
