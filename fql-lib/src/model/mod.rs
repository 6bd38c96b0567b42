//! Result models

mod collection;
mod result_set;

pub use collection::Collection;
pub use collection::SearchResults;
pub use result_set::ResultSet;
pub use result_set::Row;
