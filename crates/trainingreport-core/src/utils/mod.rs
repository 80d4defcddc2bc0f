//! Shared helpers used by the analyzers.

pub mod dates;

pub use dates::{add_months, parse_date, DateParseError};
