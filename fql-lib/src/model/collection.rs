//! Row collections returned by searches

use serde_json::Value as JsonValue;

use super::Row;

/// An ordered collection of result rows.
///
/// # Example
///
/// ```
/// use fql_lib::model::{Collection, Row};
/// use serde_json::json;
///
/// let rows: Vec<Row> = vec![
///     json!({"uid": 1, "name": "Mark"}).as_object().cloned().unwrap(),
///     json!({"uid": 2, "name": "Chris"}).as_object().cloned().unwrap(),
/// ];
/// let collection = Collection::new(rows);
///
/// assert_eq!(collection.len(), 2);
/// assert_eq!(collection.column("name"), vec![&json!("Mark"), &json!("Chris")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    rows: Vec<Row>,
}

impl Collection {
    /// Creates a collection from rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consumes the collection and returns the rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the row at `index`.
    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Returns the first row.
    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Returns an iterator over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Collects the values of one column. Rows without the column are skipped.
    pub fn column(&self, name: &str) -> Vec<&JsonValue> {
        self.rows.iter().filter_map(|row| row.get(name)).collect()
    }
}

impl From<Vec<Row>> for Collection {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

impl IntoIterator for Collection {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Collections produced by [`Search::get_collection`](crate::Search::get_collection).
///
/// A search with a single group yields one collection; a search with several
/// groups yields one collection per group, keyed by group name.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResults {
    /// Results of a single statement.
    Single(Collection),
    /// Results of a multiquery, in response order.
    Grouped(Vec<(String, Collection)>),
}

impl SearchResults {
    /// Returns the collection for a group.
    ///
    /// A single result answers to any key.
    pub fn get(&self, key: &str) -> Option<&Collection> {
        match self {
            SearchResults::Single(collection) => Some(collection),
            SearchResults::Grouped(groups) => groups
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, collection)| collection),
        }
    }

    /// Returns the number of collections.
    pub fn len(&self) -> usize {
        match self {
            SearchResults::Single(_) => 1,
            SearchResults::Grouped(groups) => groups.len(),
        }
    }

    /// Returns `true` if there are no collections.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the single collection, if this is a single result.
    pub fn into_single(self) -> Option<Collection> {
        match self {
            SearchResults::Single(collection) => Some(collection),
            SearchResults::Grouped(_) => None,
        }
    }
}
