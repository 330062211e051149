//! Table extraction from document-partitioning service responses.
//!
//! A partitioning response carries an `elements` array describing the
//! structure of a document; elements with `"type": "table"` embed the
//! span-annotated table structure this crate reconstructs. Only that slice
//! of the response schema is interpreted here; other element types pass
//! through untouched.

use serde_json::Value;

use crate::common::{Error, Result};
use crate::table::Table;

/// The `"table"` objects of every table-typed element in a partitioning
/// response, in document order.
///
/// Elements of other types, and table elements whose `table` field is
/// missing or null (structure extraction disabled upstream), are skipped.
pub fn table_elements(response: &Value) -> Vec<&Value> {
    response
        .get("elements")
        .and_then(Value::as_array)
        .map(|elements| {
            elements
                .iter()
                .filter(|element| {
                    element.get("type").and_then(Value::as_str) == Some("table")
                })
                .filter_map(|element| element.get("table"))
                .filter(|table| !table.is_null())
                .collect()
        })
        .unwrap_or_default()
}

/// Deserialize one table object into a [`Table`].
pub fn parse_table(element: &Value) -> Result<Table> {
    serde_json::from_value(element.clone()).map_err(Error::from)
}
