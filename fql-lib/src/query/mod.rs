//! FQL statement assembly.
//!
//! - [`Value`] - Literals substituted into filter templates
//! - [`Filter`] - `WHERE` fragments with positional placeholders
//! - [`Direction`] / [`Sort`] - `ORDER BY` columns
//! - [`Select`] - A complete `SELECT` statement
//! - [`FqlQuery`] - One statement or a named multiquery, as sent to a transport

mod filter;
mod order;
mod request;
mod select;
mod value;

pub use filter::Filter;
pub use order::Direction;
pub use order::Sort;
pub use request::FqlQuery;
pub use select::Select;
pub use value::Value;
pub use value::quote;
