//! Rows and named result sets

use serde::Deserialize;
use serde::Serialize;

/// A single result row: column name to JSON value, in response order.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// The rows returned for one statement of a multiquery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// The name the statement was submitted under.
    pub name: String,
    /// The rows it produced.
    #[serde(rename = "fql_result_set")]
    pub rows: Vec<Row>,
}

impl ResultSet {
    /// Creates a new result set.
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}
