//! Data models for the training roster and the generated reports.
//!
//! - `Person`, `Completion`: the input roster as loaded from JSON
//! - `TrainingCount`: per-training completion totals
//! - `PersonFiscalTrainings`: qualifying trainings completed in a fiscal year
//! - `PersonExpirations`, `ExpiringTraining`, `ExpirationStatus`: trainings
//!   that have lapsed or are about to

pub mod person;
pub mod report;

pub use person::{Completion, Person};
pub use report::{
    ExpirationStatus, ExpiringTraining, PersonExpirations, PersonFiscalTrainings, TrainingCount,
};
