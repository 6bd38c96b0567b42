//! FQL search client library
//!
//! A fluent builder for Facebook Query Language searches. Table, column,
//! filter, sort and pagination settings are accumulated on a [`Search`],
//! composed into one statement or a named multiquery, and run through an
//! [`FqlTransport`] supplied by the caller.

pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod response;

mod search;
mod transport;

pub use config::SearchConfig;
pub use error::Error;
pub use response::FqlResponse;
pub use search::*;
pub use transport::FqlTransport;
