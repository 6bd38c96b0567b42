//! Sort ordering for FQL statements.

use std::str::FromStr;

/// Sort direction for ordering results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl Direction {
    /// Returns the FQL keyword for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }

    /// Parses a direction leniently: anything but `desc` means ascending.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("desc") {
            Direction::Desc
        } else {
            Direction::Asc
        }
    }
}

impl FromStr for Direction {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Direction::parse(s))
    }
}

impl From<&str> for Direction {
    fn from(s: &str) -> Self {
        Direction::parse(s)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered list of sort columns.
///
/// Each column appears at most once. Sorting on a column again replaces its
/// direction but keeps its original position.
///
/// # Example
///
/// ```
/// use fql_lib::query::{Direction, Sort};
///
/// let mut sort = Sort::default();
/// sort.push("name", Direction::Asc);
/// sort.push("created_time", Direction::Desc);
/// sort.push("name", Direction::Desc);
/// assert_eq!(sort.to_fql(), "name DESC, created_time DESC");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sort {
    fields: Vec<(String, Direction)>,
}

impl Sort {
    /// Adds or replaces a sort column.
    pub fn push(&mut self, column: impl Into<String>, direction: Direction) {
        let column = column.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some(existing) => existing.1 = direction,
            None => self.fields.push((column, direction)),
        }
    }

    /// Returns the sort columns with their directions.
    pub fn fields(&self) -> &[(String, Direction)] {
        &self.fields
    }

    /// Returns `true` if no sort columns are set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Renders the `ORDER BY` body.
    pub fn to_fql(&self) -> String {
        self.fields
            .iter()
            .map(|(column, direction)| format!("{} {}", column, direction))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
