//! Transport that prints queries instead of sending them.

use async_trait::async_trait;
use fql_lib::Error;
use fql_lib::FqlResponse;
use fql_lib::FqlTransport;
use fql_lib::query::FqlQuery;

/// Writes each query to stdout and answers with no rows.
pub struct DryRun {
    encode: bool,
}

impl DryRun {
    /// Creates a dry-run transport. With `encode`, prints the `q=` parameter.
    pub fn new(encode: bool) -> Self {
        Self { encode }
    }

    /// Renders what would be sent for `query`.
    pub fn render(&self, query: &FqlQuery) -> Result<String, Error> {
        if self.encode {
            return query.encode();
        }

        let lines: Vec<String> = query
            .statements()?
            .into_iter()
            .map(|(name, fql)| match name {
                Some(name) => format!("{}: {}", name, fql),
                None => fql,
            })
            .collect();
        Ok(lines.join("\n"))
    }
}

#[async_trait]
impl FqlTransport for DryRun {
    async fn query(&self, query: &FqlQuery) -> Result<FqlResponse, Error> {
        println!("{}", self.render(query)?);

        let response = if query.is_multi() {
            FqlResponse::Sets(Vec::new())
        } else {
            FqlResponse::Rows(Vec::new())
        };
        Ok(response)
    }
}
