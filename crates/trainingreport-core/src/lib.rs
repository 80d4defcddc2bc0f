//! Training completion reporting.
//!
//! Loads a roster of people and their training completions, then builds
//! three reports: completions per training, qualifying trainings completed
//! in a fiscal year, and trainings that are expired or expiring soon.

pub mod analysis;
pub mod config;
pub mod error;
pub mod files;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use config::ReportConfig;
pub use error::ReportError;
pub use pipeline::{run, RunSummary};
