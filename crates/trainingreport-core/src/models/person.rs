use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Completions")]
    pub completions: Vec<Completion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    // Missing, null and "" all mean the training never lapses
    #[serde(rename = "Expires", default)]
    pub expires: Option<String>,
}

impl Completion {
    /// The expiration date string, if this completion lapses at all
    pub fn expires(&self) -> Option<&str> {
        self.expires.as_deref().filter(|e| !e.is_empty())
    }
}
