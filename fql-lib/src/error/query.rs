//! Query composition errors

/// Errors raised while composing FQL statements.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A statement was rendered before a table was set.
    #[error("No table set for FQL statement")]
    MissingTable,

    /// A filter template has more placeholders than arguments.
    #[error("Filter '{template}' has no argument for placeholder {index}")]
    MissingArgument {
        /// The filter template.
        template: String,
        /// Zero-based index of the placeholder without an argument.
        index: usize,
    },
}

impl QueryError {
    /// Creates a new missing argument error.
    pub fn missing_argument(template: impl Into<String>, index: usize) -> Self {
        Self::MissingArgument {
            template: template.into(),
            index,
        }
    }
}
