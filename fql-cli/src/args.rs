//! Command-line arguments

use clap::ArgAction;
use clap::Parser;
use fql_lib::config::DEFAULT_FALLBACK_RANGE;
use fql_lib::config::DEFAULT_GROUP;
use fql_lib::query::Direction;
use fql_lib::query::Value;
use simplelog::LevelFilter;

/// Render the FQL statement for a search.
#[derive(Debug, Parser)]
#[command(name = "fql", version, about)]
pub struct Cli {
    /// Table to search
    #[arg(short, long)]
    pub table: String,

    /// Columns to return (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Raw WHERE condition, repeatable
    #[arg(short = 'w', long = "where")]
    pub filters: Vec<String>,

    /// Equality condition as column=value, repeatable
    #[arg(short = 'f', long = "filter-by", value_parser = parse_filter_by)]
    pub filter_by: Vec<(String, Value)>,

    /// Sort column as column[:asc|desc], repeatable
    #[arg(short, long, value_parser = parse_sort)]
    pub sort: Vec<(String, Direction)>,

    /// Offset of the first row
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Rows per page
    #[arg(long, allow_negative_numbers = true)]
    pub range: Option<i64>,

    /// 1-based page number (applied after --range)
    #[arg(long, allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Range used when a negative range is given
    #[arg(long, env = "FQL_FALLBACK_RANGE", default_value_t = DEFAULT_FALLBACK_RANGE)]
    pub fallback_range: u64,

    /// Group key for the statement
    #[arg(long, default_value = DEFAULT_GROUP)]
    pub group: String,

    /// Render the COUNT(*) statement instead
    #[arg(long)]
    pub count: bool,

    /// Print the URL-encoded q parameter
    #[arg(long)]
    pub encode: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log level, overrides --verbose
    #[arg(long, env = "FQL_LOG")]
    pub log: Option<LevelFilter>,
}

impl Cli {
    /// Resolves the log level from `--log` / `FQL_LOG` or `--verbose`.
    pub fn log_level(&self) -> LevelFilter {
        if let Some(level) = self.log {
            return level;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn parse_filter_by(s: &str) -> Result<(String, Value), String> {
    let (column, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected column=value, got '{}'", s))?;
    let column = column.trim();
    if column.is_empty() {
        return Err(format!("missing column in '{}'", s));
    }
    Ok((column.to_string(), parse_value(value)))
}

/// Infers a literal type from command-line text.
fn parse_value(s: &str) -> Value {
    if s == "null" {
        return Value::Null;
    }
    if let Ok(b) = s.parse::<bool>() {
        return Value::Bool(b);
    }
    if let Ok(n) = s.parse::<i64>() {
        return Value::Int(n);
    }
    if let Ok(n) = s.parse::<f64>() {
        if n.is_finite() {
            return Value::Float(n);
        }
    }
    Value::String(s.to_string())
}

fn parse_sort(s: &str) -> Result<(String, Direction), String> {
    let (column, direction) = match s.split_once(':') {
        Some((column, direction)) => (column, Direction::parse(direction)),
        None => (s, Direction::Asc),
    };
    let column = column.trim();
    if column.is_empty() {
        return Err(format!("missing column in '{}'", s));
    }
    Ok((column.to_string(), direction))
}
