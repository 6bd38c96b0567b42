//! The execution seam between searches and FQL endpoints.

use async_trait::async_trait;

use crate::FqlResponse;
use crate::Search;
use crate::SearchConfig;
use crate::error::Error;
use crate::query::FqlQuery;

/// Runs composed FQL queries.
///
/// Implementations own the network, authentication and retry concerns. A
/// typical HTTP implementation sends [`FqlQuery::encode`] to the `fql`
/// endpoint and hands the JSON body to [`FqlResponse::from_json`].
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use fql_lib::{Error, FqlResponse, FqlTransport};
/// use fql_lib::query::FqlQuery;
///
/// struct Empty;
///
/// #[async_trait]
/// impl FqlTransport for Empty {
///     async fn query(&self, query: &FqlQuery) -> Result<FqlResponse, Error> {
///         Ok(FqlResponse::from_json(query, serde_json::json!({"data": []}))?)
///     }
/// }
///
/// let transport = Empty;
/// let search = transport.search().set_table("user");
/// assert_eq!(search.table(), Some("user"));
/// ```
#[async_trait]
pub trait FqlTransport: Send + Sync {
    /// Runs a single statement or a multiquery.
    async fn query(&self, query: &FqlQuery) -> Result<FqlResponse, Error>;

    /// Starts a search over this transport with default settings.
    fn search(&self) -> Search<'_, Self>
    where
        Self: Sized,
    {
        Search::new(self)
    }

    /// Starts a search over this transport with the given settings.
    fn search_with(&self, config: SearchConfig) -> Search<'_, Self>
    where
        Self: Sized,
    {
        Search::with_config(self, config)
    }
}
