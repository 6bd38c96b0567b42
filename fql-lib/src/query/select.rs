//! `SELECT` statement builder.

use super::Direction;
use super::Filter;
use super::Sort;
use crate::error::QueryError;

/// Builder for a single FQL `SELECT` statement.
///
/// # Example
///
/// ```
/// use fql_lib::query::{Direction, Filter, Select};
///
/// let select = Select::new()
///     .select(["uid", "name"])
///     .from("user")
///     .where_(Filter::new("uid = %s").arg(4))
///     .sort_by("name", Direction::Desc)
///     .limit(10, 5);
///
/// assert_eq!(
///     select.to_fql().unwrap(),
///     "SELECT uid, name FROM user WHERE uid = 4 ORDER BY name DESC LIMIT 10, 5"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    columns: Vec<String>,
    table: Option<String>,
    filters: Vec<Filter>,
    sort: Sort,
    limit: Option<(u64, u64)>,
}

impl Select {
    /// Creates an empty statement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selected columns, replacing any previous selection.
    ///
    /// If no columns are selected, `*` is rendered.
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the table to select from.
    pub fn from(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Adds a `WHERE` condition. Conditions are joined with `AND`.
    pub fn where_(mut self, filter: impl Into<Filter>) -> Self {
        self.filters.push(filter.into());
        self
    }

    /// Adds a sort column.
    pub fn sort_by(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.sort.push(column, direction);
        self
    }

    /// Sets `LIMIT start, range`.
    pub fn limit(mut self, start: u64, range: u64) -> Self {
        self.limit = Some((start, range));
        self
    }

    /// Returns the table, if set.
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Returns the selected columns.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Renders the statement.
    pub fn to_fql(&self) -> Result<String, QueryError> {
        let table = self.table.as_deref().ok_or(QueryError::MissingTable)?;

        let columns = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(", ")
        };

        let mut fql = format!("SELECT {} FROM {}", columns, table);

        if !self.filters.is_empty() {
            let conditions = self
                .filters
                .iter()
                .map(Filter::render)
                .collect::<Result<Vec<_>, _>>()?;
            fql.push_str(" WHERE ");
            fql.push_str(&conditions.join(" AND "));
        }

        if !self.sort.is_empty() {
            fql.push_str(" ORDER BY ");
            fql.push_str(&self.sort.to_fql());
        }

        if let Some((start, range)) = self.limit {
            fql.push_str(&format!(" LIMIT {}, {}", start, range));
        }

        Ok(fql)
    }
}
