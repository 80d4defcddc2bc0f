//! Report builders over a loaded roster.
//!
//! Each analyzer reads the same `&[Person]` and produces one report:
//!
//! - `count_completions`: completions per training name
//! - `filter_by_fiscal_year`: qualifying trainings completed in a window
//! - `classify_expirations`: trainings expired or expiring soon

pub mod counts;
pub mod expiration;
pub mod fiscal;

pub use counts::count_completions;
pub use expiration::{classify_expirations, classify_expirations_within, DEFAULT_HORIZON_MONTHS};
pub use fiscal::{filter_by_fiscal_year, FiscalYearWindow};
