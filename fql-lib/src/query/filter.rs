//! Filter templates for `WHERE` clauses.

use log::debug;

use super::Value;
use crate::error::QueryError;

/// A `WHERE` fragment built from a template and positional arguments.
///
/// `%s` and `%d` in the template are replaced by the next argument rendered as
/// an FQL literal, and `%%` becomes a single `%`. A filter without arguments
/// is used verbatim, so `LIKE` patterns need no escaping there.
///
/// # Example
///
/// ```
/// use fql_lib::query::Filter;
///
/// let filter = Filter::new("uid = %s AND name IN %s")
///     .arg(4)
///     .arg(vec!["Mark", "Chris"]);
/// assert_eq!(
///     filter.render().unwrap(),
///     "uid = 4 AND name IN ('Mark', 'Chris')"
/// );
///
/// let raw = Filter::from("uid = me()");
/// assert_eq!(raw.render().unwrap(), "uid = me()");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    template: String,
    args: Vec<Value>,
}

impl Filter {
    /// Creates a filter from a template with no arguments yet.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            args: Vec::new(),
        }
    }

    /// Creates a `column=%s` filter with one argument.
    pub fn column_eq(column: impl AsRef<str>, value: impl Into<Value>) -> Self {
        Self::new(format!("{}=%s", column.as_ref())).arg(value)
    }

    /// Appends a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Appends several positional arguments.
    pub fn args<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }

    /// Returns the template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the positional arguments.
    pub fn arguments(&self) -> &[Value] {
        &self.args
    }

    /// Renders the filter into a `WHERE` fragment.
    pub fn render(&self) -> Result<String, QueryError> {
        if self.args.is_empty() {
            return Ok(self.template.clone());
        }

        let mut out = String::with_capacity(self.template.len());
        let mut args = self.args.iter();
        let mut index = 0;
        let mut chars = self.template.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.peek() {
                Some('%') => {
                    chars.next();
                    out.push('%');
                }
                Some('s') | Some('d') => {
                    chars.next();
                    let value = args
                        .next()
                        .ok_or_else(|| QueryError::missing_argument(&self.template, index))?;
                    out.push_str(&value.to_fql());
                    index += 1;
                }
                _ => out.push('%'),
            }
        }

        let unused = args.count();
        if unused > 0 {
            debug!(
                "Filter '{}' ignored {} extra argument(s)",
                self.template, unused
            );
        }

        Ok(out)
    }
}

impl From<&str> for Filter {
    fn from(template: &str) -> Self {
        Filter::new(template)
    }
}

impl From<String> for Filter {
    fn from(template: String) -> Self {
        Filter::new(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbatim_without_args() {
        let filter = Filter::new("name LIKE '%foo%'");
        assert_eq!(filter.render().unwrap(), "name LIKE '%foo%'");
    }

    #[test]
    fn test_placeholders() {
        let filter = Filter::new("post_id=%s AND post_title IN %s")
            .arg(123)
            .arg(vec!["asd"]);
        assert_eq!(
            filter.render().unwrap(),
            "post_id=123 AND post_title IN ('asd')"
        );
    }

    #[test]
    fn test_percent_escape_and_unknown_specifier() {
        let filter = Filter::new("a=%d AND b LIKE '100%%' AND c=%x").arg(1);
        assert_eq!(filter.render().unwrap(), "a=1 AND b LIKE '100%' AND c=%x");
    }

    #[test]
    fn test_missing_argument() {
        let filter = Filter::new("a=%s AND b=%s").arg(1);
        assert_eq!(
            filter.render(),
            Err(QueryError::missing_argument("a=%s AND b=%s", 1))
        );
    }

    #[test]
    fn test_extra_arguments_ignored() {
        let filter = Filter::new("a=%s").args([1, 2, 3]);
        assert_eq!(filter.render().unwrap(), "a=1");
    }

    #[test]
    fn test_non_finite_argument_renders_null() {
        assert_eq!(Filter::new("x=%s").arg(f64::NAN).render().unwrap(), "x=null");
        assert_eq!(
            Filter::new("x=%s").arg(f64::INFINITY).render().unwrap(),
            "x=null"
        );
    }

    #[test]
    fn test_column_eq() {
        let filter = Filter::column_eq("user_name", "Chris");
        assert_eq!(filter.template(), "user_name=%s");
        assert_eq!(filter.render().unwrap(), "user_name='Chris'");

        let filter = Filter::column_eq("user_name", Value::Null);
        assert_eq!(filter.render().unwrap(), "user_name=null");
    }
}
