//! Transport responses

use serde_json::Value as JsonValue;

use crate::error::FacebookErrorDetail;
use crate::error::TransportError;
use crate::model::ResultSet;
use crate::model::Row;
use crate::query::FqlQuery;

/// The outcome of running an [`FqlQuery`].
///
/// A single statement produces rows; a multiquery produces one named result
/// set per statement.
#[derive(Debug, Clone, PartialEq)]
pub enum FqlResponse {
    /// Rows of a single statement.
    Rows(Vec<Row>),
    /// Named result sets of a multiquery.
    Sets(Vec<ResultSet>),
}

impl FqlResponse {
    /// Interprets a Graph API JSON body for the given query.
    ///
    /// Accepts the `{"data": [...]}` envelope or a bare array. An
    /// `{"error": {...}}` envelope becomes [`TransportError::Api`].
    ///
    /// # Example
    ///
    /// ```
    /// use fql_lib::FqlResponse;
    /// use fql_lib::query::{FqlQuery, Select};
    /// use serde_json::json;
    ///
    /// let query = FqlQuery::Single(Select::new().from("user"));
    /// let body = json!({"data": [{"uid": 4}]});
    /// let response = FqlResponse::from_json(&query, body).unwrap();
    /// assert_eq!(response.row_count(), 1);
    /// ```
    pub fn from_json(query: &FqlQuery, body: JsonValue) -> Result<Self, TransportError> {
        let data = match body {
            JsonValue::Object(mut envelope) => {
                if let Some(error) = envelope.remove("error") {
                    let detail: FacebookErrorDetail = serde_json::from_value(error.clone())
                        .map_err(|e| {
                            TransportError::parse_with_body(
                                format!("Invalid error envelope: {}", e),
                                error.to_string(),
                            )
                        })?;
                    return Err(TransportError::Api(detail));
                }
                envelope
                    .remove("data")
                    .ok_or_else(|| TransportError::parse("Response has no 'data' member"))?
            }
            data @ JsonValue::Array(_) => data,
            other => {
                return Err(TransportError::parse_with_body(
                    "Expected a JSON object or array",
                    other.to_string(),
                ));
            }
        };

        let body = data.to_string();
        if query.is_multi() {
            let sets: Vec<ResultSet> = serde_json::from_value(data)
                .map_err(|e| TransportError::parse_with_body(e.to_string(), body))?;
            Ok(FqlResponse::Sets(sets))
        } else {
            let rows: Vec<Row> = serde_json::from_value(data)
                .map_err(|e| TransportError::parse_with_body(e.to_string(), body))?;
            Ok(FqlResponse::Rows(rows))
        }
    }

    /// Returns the rows of a single-statement response.
    pub fn rows(&self) -> Option<&[Row]> {
        match self {
            FqlResponse::Rows(rows) => Some(rows),
            FqlResponse::Sets(_) => None,
        }
    }

    /// Returns the result sets of a multiquery response.
    pub fn sets(&self) -> Option<&[ResultSet]> {
        match self {
            FqlResponse::Rows(_) => None,
            FqlResponse::Sets(sets) => Some(sets),
        }
    }

    /// Returns the named result set of a multiquery response.
    pub fn set(&self, name: &str) -> Option<&ResultSet> {
        self.sets()?.iter().find(|set| set.name == name)
    }

    /// Returns the total number of rows across all result sets.
    pub fn row_count(&self) -> usize {
        match self {
            FqlResponse::Rows(rows) => rows.len(),
            FqlResponse::Sets(sets) => sets.iter().map(|set| set.rows.len()).sum(),
        }
    }

    /// Returns `true` if no rows were returned.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }
}
