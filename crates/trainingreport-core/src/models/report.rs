//! Output records, one type per report file.

use serde::Serialize;

/// One row of `trainingCompletionCounts.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainingCount {
    #[serde(rename = "Training")]
    pub training: String,
    #[serde(rename = "Count")]
    pub count: usize,
}

/// One row of `peopleInFiscalYear.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonFiscalTrainings {
    #[serde(rename = "Person")]
    pub person: String,
    #[serde(rename = "Trainings")]
    pub trainings: Vec<String>,
}

/// One row of `expiredTrainings.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonExpirations {
    #[serde(rename = "Person")]
    pub person: String,
    #[serde(rename = "ExpiringTrainings")]
    pub expirations: Vec<ExpiringTraining>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiringTraining {
    #[serde(rename = "Training")]
    pub training: String,
    /// Copied verbatim from the input record
    #[serde(rename = "ExpirationDate")]
    pub expiration_date: String,
    #[serde(rename = "Status")]
    pub status: ExpirationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExpirationStatus {
    #[serde(rename = "Expired")]
    Expired,
    #[serde(rename = "Expiring Soon")]
    ExpiringSoon,
}

impl std::fmt::Display for ExpirationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpirationStatus::Expired => write!(f, "Expired"),
            ExpirationStatus::ExpiringSoon => write!(f, "Expiring Soon"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expiration_status_display() {
        assert_eq!(ExpirationStatus::Expired.to_string(), "Expired");
        assert_eq!(ExpirationStatus::ExpiringSoon.to_string(), "Expiring Soon");
    }

    #[test]
    fn test_report_wire_names() {
        let count = TrainingCount {
            training: "X-Ray Safety".to_string(),
            count: 2,
        };
        assert_eq!(
            serde_json::to_value(&count).unwrap(),
            json!({"Training": "X-Ray Safety", "Count": 2})
        );

        let expirations = PersonExpirations {
            person: "Alice".to_string(),
            expirations: vec![ExpiringTraining {
                training: "X-Ray Safety".to_string(),
                expiration_date: "10/15/2023".to_string(),
                status: ExpirationStatus::ExpiringSoon,
            }],
        };
        assert_eq!(
            serde_json::to_value(&expirations).unwrap(),
            json!({
                "Person": "Alice",
                "ExpiringTrainings": [
                    {"Training": "X-Ray Safety", "ExpirationDate": "10/15/2023", "Status": "Expiring Soon"}
                ]
            })
        );
    }

    #[test]
    fn test_report_field_order() {
        let row = PersonFiscalTrainings {
            person: "Alice".to_string(),
            trainings: vec!["X-Ray Safety".to_string()],
        };
        let text = serde_json::to_string(&row).unwrap();
        assert_eq!(text, r#"{"Person":"Alice","Trainings":["X-Ray Safety"]}"#);
    }
}
