use chrono::NaiveDateTime;
use tracing::warn;

use crate::error::ReportError;
use crate::models::{ExpirationStatus, ExpiringTraining, Person, PersonExpirations};
use crate::utils::{add_months, parse_date};

/// How far past the check date an expiration still counts as "soon"
pub const DEFAULT_HORIZON_MONTHS: u32 = 1;

/// People with trainings that have expired, or expire within a month of
/// `check_date`.
pub fn classify_expirations(
    people: &[Person],
    check_date: NaiveDateTime,
) -> Result<Vec<PersonExpirations>, ReportError> {
    classify_expirations_within(people, check_date, DEFAULT_HORIZON_MONTHS)
}

/// Like [`classify_expirations`] with an explicit horizon in calendar months.
///
/// A completion is reported when its expiration is at or before
/// `check_date + horizon_months`. It is `Expired` when the expiration is at
/// or before `check_date` and `ExpiringSoon` otherwise. Completions without
/// an expiration are skipped without being parsed.
pub fn classify_expirations_within(
    people: &[Person],
    check_date: NaiveDateTime,
    horizon_months: u32,
) -> Result<Vec<PersonExpirations>, ReportError> {
    let threshold = add_months(check_date, horizon_months).unwrap_or_else(|| {
        warn!(%check_date, horizon_months, "Expiration horizon out of range, clamping");
        NaiveDateTime::MAX
    });

    let mut result = Vec::new();

    for person in people {
        let mut expirations = Vec::new();
        for completion in &person.completions {
            let Some(expires) = completion.expires() else {
                continue;
            };
            let expires_at = parse_date(expires).map_err(|source| ReportError::DateParse {
                person: person.name.clone(),
                training: completion.name.clone(),
                field: "Expires",
                source,
            })?;
            if expires_at > threshold {
                continue;
            }

            let status = if expires_at <= check_date {
                ExpirationStatus::Expired
            } else {
                ExpirationStatus::ExpiringSoon
            };
            expirations.push(ExpiringTraining {
                training: completion.name.clone(),
                expiration_date: expires.to_string(),
                status,
            });
        }

        if !expirations.is_empty() {
            result.push(PersonExpirations {
                person: person.name.clone(),
                expirations,
            });
        }
    }

    Ok(result)
}
