use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{json, Value};
use std::collections::HashMap;

/// One schema-less table item, exactly as DynamoDB returns it. The pipeline
/// never interprets or renames any attribute.
pub type Record = HashMap<String, AttributeValue>;

/// Continuation key for a paginated scan (DynamoDB `LastEvaluatedKey`).
/// Opaque to the pipeline; only ever replayed against the table it came from.
pub type Cursor = HashMap<String, AttributeValue>;

/// One page of scan results.
#[derive(Debug, Clone)]
pub struct ScanPage {
    pub items: Vec<Record>,
    /// Present only while more pages remain.
    pub next_cursor: Option<Cursor>,
}

/// Render a record as JSON for log output.
pub fn record_to_json(record: &Record) -> Value {
    Value::Object(
        record
            .iter()
            .map(|(name, value)| (name.clone(), attribute_to_json(value)))
            .collect(),
    )
}

fn attribute_to_json(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::S(s) => json!(s),
        // DynamoDB numbers are decimal strings; keep them verbatim
        AttributeValue::N(n) => json!(n),
        AttributeValue::Bool(b) => json!(b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::Ss(list) => json!(list),
        AttributeValue::Ns(list) => json!(list),
        AttributeValue::L(list) => Value::Array(list.iter().map(attribute_to_json).collect()),
        AttributeValue::M(map) => Value::Object(
            map.iter()
                .map(|(name, value)| (name.clone(), attribute_to_json(value)))
                .collect(),
        ),
        AttributeValue::B(blob) => json!(format!("<{} bytes>", blob.as_ref().len())),
        other => json!(format!("{other:?}")),
    }
}
