//! Search configuration

/// Default range used when a negative range is requested.
pub const DEFAULT_FALLBACK_RANGE: u64 = 25;

/// Default group key used by the `*_default` execution methods.
pub const DEFAULT_GROUP: &str = "last";

/// Configuration for a [`Search`](crate::Search).
///
/// # Example
///
/// ```
/// use fql_lib::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_fallback_range(50)
///     .with_default_group("main");
///
/// assert_eq!(config.fallback_range, 50);
/// assert_eq!(config.default_group, "main");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Range applied when `set_range` receives a negative value.
    ///
    /// Default: 25
    pub fallback_range: u64,

    /// Group key used by `get_rows_default` and `get_collection_default`.
    ///
    /// Default: `"last"`
    pub default_group: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fallback_range: DEFAULT_FALLBACK_RANGE,
            default_group: DEFAULT_GROUP.to_string(),
        }
    }
}

impl SearchConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fallback range.
    pub fn with_fallback_range(mut self, range: u64) -> Self {
        self.fallback_range = range;
        self
    }

    /// Sets the default group key.
    pub fn with_default_group(mut self, key: impl Into<String>) -> Self {
        self.default_group = key.into();
        self
    }
}
