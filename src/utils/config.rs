use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

/// Settings for one migration run, resolved once at startup and passed by
/// value into the pipeline.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ddb-table-migrate",
    about = "Copy every item from one DynamoDB table into another",
    version
)]
pub struct Settings {
    /// AWS region hosting both tables
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub region: String,

    /// DynamoDB table to read from
    #[arg(long = "sourceTable", value_parser = NonEmptyStringValueParser::new())]
    pub source_table: String,

    /// DynamoDB table to write to
    #[arg(long = "targetTable", value_parser = NonEmptyStringValueParser::new())]
    pub target_table: String,

    /// Maximum number of puts kept in flight during the write phase
    #[arg(long, default_value_t = 32)]
    pub concurrency: usize,
}
