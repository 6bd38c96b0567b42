//! Fluent search builder.

use log::debug;
use log::trace;
use serde_json::Value as JsonValue;

use crate::FqlResponse;
use crate::FqlTransport;
use crate::SearchConfig;
use crate::error::Error;
use crate::error::QueryError;
use crate::model::Collection;
use crate::model::Row;
use crate::model::SearchResults;
use crate::query::Direction;
use crate::query::Filter;
use crate::query::FqlQuery;
use crate::query::Select;
use crate::query::Sort;
use crate::query::Value;

/// Accumulated search state for one statement.
#[derive(Debug, Clone, Default, PartialEq)]
struct Group {
    table: Option<String>,
    columns: Vec<String>,
    filters: Vec<Filter>,
    sort: Sort,
    start: u64,
    range: u64,
}

impl Group {
    /// Composes the statement. Returns `None` without a table.
    fn to_select(&self) -> Option<Select> {
        let table = self.table.as_ref()?;
        let mut select = Select::new().from(table.clone());

        if !self.columns.is_empty() {
            select = select.select(self.columns.iter().cloned());
        }

        for filter in &self.filters {
            select = select.where_(filter.clone());
        }

        for (column, direction) in self.sort.fields() {
            select = select.sort_by(column.clone(), *direction);
        }

        if self.range > 0 {
            select = select.limit(self.start, self.range);
        }

        Some(select)
    }
}

/// Builder for FQL searches.
///
/// Settings accumulate on a working state. [`group`](Search::group) stores
/// the working state under a name and starts a fresh one, so several
/// statements can be sent together as a multiquery.
///
/// Use [`FqlTransport::search`] to create a search.
///
/// # Example
///
/// ```ignore
/// let rows = transport.search()
///     .set_table("user")
///     .set_columns(["uid", "name"])
///     .filter_by("uid", 4)
///     .sort_by("name", Direction::Asc)
///     .set_range(10)
///     .set_page(2)
///     .get_rows("user")
///     .await?;
///
/// // Several statements at once
/// let results = transport.search()
///     .set_table("user")
///     .add_filter("uid = me()")
///     .group("me")
///     .set_table("friend")
///     .add_filter("uid1 = me()")
///     .get_collection("friends")
///     .await?;
///
/// let friends = results.get("friends");
/// ```
pub struct Search<'a, T: ?Sized> {
    transport: &'a T,
    config: SearchConfig,
    state: Group,
    groups: Vec<(String, Group)>,
}

impl<'a, T> Search<'a, T>
where
    T: FqlTransport + ?Sized,
{
    /// Creates a search over a transport with default settings.
    pub fn new(transport: &'a T) -> Self {
        Self::with_config(transport, SearchConfig::default())
    }

    /// Creates a search over a transport with the given settings.
    pub fn with_config(transport: &'a T, config: SearchConfig) -> Self {
        Self {
            transport,
            config,
            state: Group::default(),
            groups: Vec::new(),
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Sets the table to search.
    pub fn set_table(mut self, table: impl Into<String>) -> Self {
        self.state.table = Some(table.into());
        self
    }

    /// Sets the columns to return, replacing any previous list.
    ///
    /// If no columns are set, every column (`*`) is requested.
    pub fn set_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a filter. Filters are joined with `AND`.
    pub fn add_filter(mut self, filter: impl Into<Filter>) -> Self {
        self.state.filters.push(filter.into());
        self
    }

    /// Adds a `column=value` filter.
    pub fn filter_by(self, column: impl AsRef<str>, value: impl Into<Value>) -> Self {
        self.add_filter(Filter::column_eq(column, value))
    }

    /// Adds a sort column.
    ///
    /// Sorting on the same column again replaces its direction.
    pub fn add_sort(mut self, column: impl Into<String>, direction: impl Into<Direction>) -> Self {
        self.state.sort.push(column, direction.into());
        self
    }

    /// Alias for [`add_sort`](Search::add_sort).
    pub fn sort_by(self, column: impl Into<String>, direction: impl Into<Direction>) -> Self {
        self.add_sort(column, direction)
    }

    /// Sets the offset of the first row. Negative values become 0.
    pub fn set_start(mut self, start: i64) -> Self {
        self.state.start = u64::try_from(start).unwrap_or(0);
        self
    }

    /// Sets the number of rows per page.
    ///
    /// Negative values fall back to the configured range (25 by default).
    /// A range of 0 disables `LIMIT`.
    pub fn set_range(mut self, range: i64) -> Self {
        self.state.range = u64::try_from(range).unwrap_or(self.config.fallback_range);
        self
    }

    /// Sets the start offset from a 1-based page number.
    ///
    /// Pages below 1 become 1. Uses the range in effect at the time of the
    /// call, so set the range first.
    pub fn set_page(mut self, page: i64) -> Self {
        let page = u64::try_from(page.max(1)).unwrap_or(1);
        self.state.start = (page - 1).saturating_mul(self.state.range);
        self
    }

    /// Stores the working state under `key` and starts a fresh one.
    ///
    /// A group with the same key is replaced in place. Does nothing if no
    /// table is set.
    pub fn group(mut self, key: impl Into<String>) -> Self {
        self.store_group(key.into());
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the working table, if set.
    pub fn table(&self) -> Option<&str> {
        self.state.table.as_deref()
    }

    /// Returns the working columns.
    pub fn columns(&self) -> &[String] {
        &self.state.columns
    }

    /// Returns the working filters.
    pub fn filters(&self) -> &[Filter] {
        &self.state.filters
    }

    /// Returns the working sort columns.
    pub fn sort(&self) -> &Sort {
        &self.state.sort
    }

    /// Returns the working start offset.
    pub fn start(&self) -> u64 {
        self.state.start
    }

    /// Returns the working range.
    pub fn range(&self) -> u64 {
        self.state.range
    }

    /// Returns the stored group keys in order.
    pub fn group_keys(&self) -> Vec<&str> {
        self.groups.iter().map(|(key, _)| key.as_str()).collect()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Groups the working state under `key` and composes every stored group.
    ///
    /// Returns `None` if no groups exist, a single statement for one group,
    /// and a multiquery otherwise. Afterwards the working state holds a copy
    /// of the last stored group.
    pub fn build(&mut self, key: impl Into<String>) -> Option<FqlQuery> {
        self.store_group(key.into());

        let mut selects: Vec<(String, Select)> = self
            .groups
            .iter()
            .filter_map(|(key, group)| Some((key.clone(), group.to_select()?)))
            .collect();

        // The last group stays the working state.
        if let Some((_, last)) = self.groups.last() {
            self.state = last.clone();
        }

        match selects.len() {
            0 => None,
            1 => selects.pop().map(|(_, select)| FqlQuery::Single(select)),
            _ => Some(FqlQuery::Multi(selects)),
        }
    }

    /// Runs every group and returns the raw response.
    ///
    /// The working state is grouped under `key` first. Without any groups the
    /// transport is not called and an empty row list is returned. Groups are
    /// kept, and the last group becomes the working state again, so
    /// [`get_total`](Search::get_total) counts it.
    pub async fn get_rows(&mut self, key: impl Into<String>) -> Result<FqlResponse, Error> {
        let Some(query) = self.build(key) else {
            debug!("No FQL groups to run");
            return Ok(FqlResponse::Rows(Vec::new()));
        };

        self.run(&query).await
    }

    /// Runs every group and wraps the rows in collections.
    ///
    /// One group yields [`SearchResults::Single`]; several yield
    /// [`SearchResults::Grouped`] keyed by group name.
    pub async fn get_collection(&mut self, key: impl Into<String>) -> Result<SearchResults, Error> {
        let results = match self.get_rows(key).await? {
            FqlResponse::Rows(rows) => SearchResults::Single(Collection::new(rows)),
            FqlResponse::Sets(sets) => SearchResults::Grouped(
                sets.into_iter()
                    .map(|set| (set.name, Collection::new(set.rows)))
                    .collect(),
            ),
        };
        Ok(results)
    }

    /// [`get_rows`](Search::get_rows) under the configured default group key.
    pub async fn get_rows_default(&mut self) -> Result<FqlResponse, Error> {
        let key = self.config.default_group.clone();
        self.get_rows(key).await
    }

    /// [`get_collection`](Search::get_collection) under the configured default group key.
    pub async fn get_collection_default(&mut self) -> Result<SearchResults, Error> {
        let key = self.config.default_group.clone();
        self.get_collection(key).await
    }

    /// Counts the rows matching the working table and filters.
    ///
    /// Sends `SELECT COUNT(*)` without sort or limit. A single row holding a
    /// single numeric value is read as the count; otherwise the number of
    /// returned rows is the total.
    pub async fn get_total(&self) -> Result<u64, Error> {
        let table = self.state.table.as_ref().ok_or(QueryError::MissingTable)?;

        let mut select = Select::new().select(["COUNT(*)"]).from(table.clone());
        for filter in &self.state.filters {
            select = select.where_(filter.clone());
        }

        let rows = match self.run(&FqlQuery::Single(select)).await? {
            FqlResponse::Rows(rows) => rows,
            FqlResponse::Sets(sets) => sets.into_iter().flat_map(|set| set.rows).collect(),
        };

        Ok(count_from_rows(&rows))
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn store_group(&mut self, key: String) {
        if self.state.table.is_none() {
            return;
        }

        let group = std::mem::take(&mut self.state);
        match self.groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = group,
            None => self.groups.push((key, group)),
        }
    }

    async fn run(&self, query: &FqlQuery) -> Result<FqlResponse, Error> {
        let statements = query.statements()?;
        debug!("Running {} FQL statement(s)", statements.len());
        for (name, fql) in &statements {
            match name {
                Some(name) => trace!("{}: {}", name, fql),
                None => trace!("{}", fql),
            }
        }

        let response = self.transport.query(query).await?;
        debug!("FQL returned {} row(s)", response.row_count());
        Ok(response)
    }
}

/// Reads a `COUNT(*)` result.
fn count_from_rows(rows: &[Row]) -> u64 {
    if let [row] = rows
        && row.len() == 1
        && let Some(count) = row.values().next().and_then(numeric)
    {
        return count;
    }
    rows.len() as u64
}

fn numeric(value: &JsonValue) -> Option<u64> {
    match value {
        JsonValue::Number(n) => n.as_u64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
