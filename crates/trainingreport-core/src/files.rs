//! Reading the roster and writing report files.

use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::ReportError;
use crate::models::Person;

/// Load the roster JSON array from `path`.
///
/// Dates are left as strings; the analyzers parse what they need.
pub fn load_people(path: &Path) -> Result<Vec<Person>, ReportError> {
    let contents = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ReportError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ReportError::io(path, source),
    })?;

    let people = parse_people(&contents).map_err(|source| ReportError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), people = people.len(), "Loaded roster");
    Ok(people)
}

pub fn parse_people(contents: &str) -> Result<Vec<Person>, serde_json::Error> {
    serde_json::from_str(contents)
}

/// Write `data` as indented JSON, replacing whatever is at `path`.
pub fn write_report<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<(), ReportError> {
    let contents = serde_json::to_string_pretty(data)
        .map_err(|e| ReportError::io(path, std::io::Error::other(e)))?;
    std::fs::write(path, contents).map_err(|source| ReportError::io(path, source))?;
    info!(path = %path.display(), "Wrote report");
    Ok(())
}
