use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::error::ReportError;
use crate::models::{Person, PersonFiscalTrainings};
use crate::utils::parse_date;

/// Which trainings count toward a fiscal year, and the inclusive span of it.
///
/// Bounds are compared as instants. A window ending at midnight on June 30
/// excludes a completion stamped later that day; pass an end-of-day bound if
/// the whole day should count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiscalYearWindow {
    pub qualifying_trainings: HashSet<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl FiscalYearWindow {
    pub fn new(
        qualifying_trainings: impl IntoIterator<Item = String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            qualifying_trainings: qualifying_trainings.into_iter().collect(),
            start,
            end,
        }
    }

    pub fn qualifies(&self, training: &str) -> bool {
        self.qualifying_trainings.contains(training)
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at <= self.end
    }
}

/// People who completed a qualifying training inside the window, with the
/// names of those trainings in completion order.
///
/// Only qualifying completions have their timestamp parsed, so a malformed
/// date on any other training is ignored.
pub fn filter_by_fiscal_year(
    people: &[Person],
    window: &FiscalYearWindow,
) -> Result<Vec<PersonFiscalTrainings>, ReportError> {
    let mut result = Vec::new();

    for person in people {
        let mut trainings = Vec::new();
        for completion in &person.completions {
            if !window.qualifies(&completion.name) {
                continue;
            }
            let completed_at =
                parse_date(&completion.timestamp).map_err(|source| ReportError::DateParse {
                    person: person.name.clone(),
                    training: completion.name.clone(),
                    field: "Timestamp",
                    source,
                })?;
            if window.contains(completed_at) {
                trainings.push(completion.name.clone());
            }
        }

        if !trainings.is_empty() {
            result.push(PersonFiscalTrainings {
                person: person.name.clone(),
                trainings,
            });
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::{at, completion, person};
    use pretty_assertions::assert_eq;

    fn fy2024() -> FiscalYearWindow {
        FiscalYearWindow::new(
            [
                "Electrical Safety for Labs".to_string(),
                "X-Ray Safety".to_string(),
                "Laboratory Safety Training".to_string(),
            ],
            at("2023-07-01"),
            at("2024-06-30"),
        )
    }

    #[test]
    fn test_filter_selects_qualifying_in_window() {
        let people = vec![
            person(
                "Alice",
                vec![
                    completion("X-Ray Safety", "8/1/2023", None),
                    completion("Fire Safety", "8/1/2023", None),
                    completion("Laboratory Safety Training", "6/30/2023", None),
                    completion("Electrical Safety for Labs", "1/15/2024", None),
                ],
            ),
            person("Bob", vec![completion("Fire Safety", "8/1/2023", None)]),
            person(
                "Carol",
                vec![completion("X-Ray Safety", "7/1/2024", None)],
            ),
        ];

        assert_eq!(
            filter_by_fiscal_year(&people, &fy2024()).unwrap(),
            vec![PersonFiscalTrainings {
                person: "Alice".to_string(),
                trainings: vec![
                    "X-Ray Safety".to_string(),
                    "Electrical Safety for Labs".to_string(),
                ],
            }]
        );
    }

    #[test]
    fn test_filter_bounds_are_inclusive() {
        let people = vec![person(
            "Alice",
            vec![
                completion("X-Ray Safety", "2023-07-01", None),
                completion("X-Ray Safety", "2024-06-30", None),
            ],
        )];
        let result = filter_by_fiscal_year(&people, &fy2024()).unwrap();
        assert_eq!(result[0].trainings.len(), 2);
    }

    #[test]
    fn test_filter_time_after_midnight_on_end_date_is_excluded() {
        let people = vec![person(
            "Alice",
            vec![completion("X-Ray Safety", "2024-06-30T09:00:00", None)],
        )];
        assert!(filter_by_fiscal_year(&people, &fy2024()).unwrap().is_empty());

        let end_of_day = FiscalYearWindow {
            end: at("2024-06-30").date().and_hms_opt(23, 59, 59).unwrap(),
            ..fy2024()
        };
        assert_eq!(filter_by_fiscal_year(&people, &end_of_day).unwrap().len(), 1);
    }

    #[test]
    fn test_filter_keeps_duplicate_trainings() {
        let people = vec![person(
            "Alice",
            vec![
                completion("X-Ray Safety", "2023-08-01", None),
                completion("X-Ray Safety", "2024-02-01", None),
            ],
        )];
        let result = filter_by_fiscal_year(&people, &fy2024()).unwrap();
        assert_eq!(result[0].trainings, vec!["X-Ray Safety", "X-Ray Safety"]);
    }

    #[test]
    fn test_filter_bad_timestamp_on_qualifying_training_fails() {
        let people = vec![person(
            "Alice",
            vec![completion("X-Ray Safety", "not a date", None)],
        )];
        let err = filter_by_fiscal_year(&people, &fy2024()).unwrap_err();
        match err {
            ReportError::DateParse {
                person,
                training,
                field,
                ..
            } => {
                assert_eq!(person, "Alice");
                assert_eq!(training, "X-Ray Safety");
                assert_eq!(field, "Timestamp");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_filter_bad_timestamp_on_other_training_is_ignored() {
        let people = vec![person(
            "Alice",
            vec![
                completion("Fire Safety", "not a date", None),
                completion("X-Ray Safety", "2023-09-01", None),
            ],
        )];
        let result = filter_by_fiscal_year(&people, &fy2024()).unwrap();
        assert_eq!(result[0].trainings, vec!["X-Ray Safety"]);
    }

    #[test]
    fn test_filter_never_returns_empty_trainings_and_is_idempotent() {
        let people = vec![
            person("Alice", vec![]),
            person("Bob", vec![completion("X-Ray Safety", "2020-01-01", None)]),
            person("Carol", vec![completion("X-Ray Safety", "2023-12-01", None)]),
        ];
        let first = filter_by_fiscal_year(&people, &fy2024()).unwrap();
        assert!(first.iter().all(|p| !p.trainings.is_empty()));
        assert_eq!(first.len(), 1);
        assert_eq!(first, filter_by_fiscal_year(&people, &fy2024()).unwrap());
    }
}
