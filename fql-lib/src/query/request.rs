//! The request payload handed to a transport.

use serde_json::Map;
use serde_json::Value as JsonValue;
use url::form_urlencoded;

use super::Select;
use crate::error::Error;

/// One or more statements ready to be run.
///
/// A single statement is sent as plain FQL. Several named statements form a
/// multiquery, sent as a JSON object mapping each name to its statement.
#[derive(Debug, Clone, PartialEq)]
pub enum FqlQuery {
    /// A single statement.
    Single(Select),
    /// Named statements, in the order they were grouped.
    Multi(Vec<(String, Select)>),
}

impl FqlQuery {
    /// Returns `true` if this is a multiquery.
    pub fn is_multi(&self) -> bool {
        matches!(self, FqlQuery::Multi(_))
    }

    /// Returns the number of statements.
    pub fn len(&self) -> usize {
        match self {
            FqlQuery::Single(_) => 1,
            FqlQuery::Multi(queries) => queries.len(),
        }
    }

    /// Returns `true` if there are no statements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the names of a multiquery's statements.
    pub fn names(&self) -> Vec<&str> {
        match self {
            FqlQuery::Single(_) => Vec::new(),
            FqlQuery::Multi(queries) => queries.iter().map(|(name, _)| name.as_str()).collect(),
        }
    }

    /// Renders every statement, paired with its name for multiqueries.
    pub fn statements(&self) -> Result<Vec<(Option<&str>, String)>, Error> {
        match self {
            FqlQuery::Single(select) => Ok(vec![(None, select.to_fql()?)]),
            FqlQuery::Multi(queries) => queries
                .iter()
                .map(|(name, select)| -> Result<_, Error> {
                    Ok((Some(name.as_str()), select.to_fql()?))
                })
                .collect(),
        }
    }

    /// Renders the value of the `q` request parameter.
    pub fn to_param(&self) -> Result<String, Error> {
        match self {
            FqlQuery::Single(select) => Ok(select.to_fql()?),
            FqlQuery::Multi(queries) => {
                let mut object = Map::new();
                for (name, select) in queries {
                    object.insert(name.clone(), JsonValue::String(select.to_fql()?));
                }
                Ok(serde_json::to_string(&JsonValue::Object(object))?)
            }
        }
    }

    /// Renders `q=<value>` form-urlencoded, ready to append to a request URL.
    pub fn encode(&self) -> Result<String, Error> {
        let param = self.to_param()?;
        Ok(form_urlencoded::Serializer::new(String::new())
            .append_pair("q", &param)
            .finish())
    }
}
