use tracing::info;

use crate::analysis::{classify_expirations_within, count_completions, filter_by_fiscal_year};
use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::files::{load_people, write_report};

pub const COMPLETION_COUNTS_FILE: &str = "trainingCompletionCounts.json";
pub const FISCAL_YEAR_FILE: &str = "peopleInFiscalYear.json";
pub const EXPIRED_TRAININGS_FILE: &str = "expiredTrainings.json";

/// Sizes of what a run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub people: usize,
    pub trainings: usize,
    pub people_in_fiscal_year: usize,
    pub people_with_expirations: usize,
}

/// Load the roster, build all three reports and write them out.
///
/// Every report is built before any file is written, so a bad date in one
/// analyzer leaves the output directory untouched.
pub fn run(config: &ReportConfig) -> Result<RunSummary, ReportError> {
    let people = load_people(&config.input_file)?;

    let counts = count_completions(&people);
    let fiscal = filter_by_fiscal_year(&people, &config.fiscal_year_window())?;
    let expirations = classify_expirations_within(
        &people,
        config.check_datetime(),
        config.expiration_horizon_months,
    )?;

    write_report(&config.output_path(COMPLETION_COUNTS_FILE), &counts)?;
    write_report(&config.output_path(FISCAL_YEAR_FILE), &fiscal)?;
    write_report(&config.output_path(EXPIRED_TRAININGS_FILE), &expirations)?;

    let summary = RunSummary {
        people: people.len(),
        trainings: counts.len(),
        people_in_fiscal_year: fiscal.len(),
        people_with_expirations: expirations.len(),
    };
    info!(
        people = summary.people,
        trainings = summary.trainings,
        fiscal_year = summary.people_in_fiscal_year,
        expiring = summary.people_with_expirations,
        "Reports complete"
    );
    Ok(summary)
}
