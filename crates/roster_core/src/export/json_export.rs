//! JSON file export for person records.
//!
//! # Responsibility
//! - Flatten person records into the on-disk export shape.
//! - Write and read back the export file.
//!
//! # Invariants
//! - `is_adult` is computed at export time, never stored on `Person`.
//! - A save truncates any existing file; there is no append mode.
//! - Output is a single JSON array with 2-space indentation.

use crate::model::person::Person;
use chrono::{DateTime, SecondsFormat, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub type ExportResult<T> = Result<T, ExportError>;

/// Export/import failures.
#[derive(Debug)]
pub enum ExportError {
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    Encode(serde_json::Error),
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileWrite { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
            Self::FileRead { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Encode(err) => write!(f, "failed to encode people as JSON: {err}"),
            Self::Decode { path, source } => {
                write!(f, "invalid export file `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FileWrite { source, .. } => Some(source),
            Self::FileRead { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
            Self::Decode { source, .. } => Some(source),
        }
    }
}

/// On-disk shape of one exported person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: String,
    pub age: u32,
    pub email: String,
    /// RFC 3339 with microseconds and `Z`, or `null` when the source record
    /// has no timestamp.
    pub created_at: Option<String>,
    pub is_adult: bool,
}

impl From<&Person> for PersonRecord {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name.clone(),
            age: person.age,
            email: person.email.clone(),
            created_at: person.created_at.as_ref().map(format_timestamp),
            is_adult: person.is_adult(),
        }
    }
}

/// ISO-8601 form used in export files.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Writes `people` to `path` as an indented JSON array.
///
/// # Errors
/// - `ExportError::FileWrite` when the file cannot be created or flushed.
/// - `ExportError::Encode` when serialization fails.
pub fn save_people(people: &[Person], path: impl AsRef<Path>) -> ExportResult<()> {
    let path = path.as_ref();
    let records: Vec<PersonRecord> = people.iter().map(PersonRecord::from).collect();

    let file = File::create(path).map_err(|source| ExportError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &records).map_err(|err| {
        if err.is_io() {
            ExportError::FileWrite {
                path: path.to_path_buf(),
                source: err.into(),
            }
        } else {
            ExportError::Encode(err)
        }
    })?;
    writer.flush().map_err(|source| ExportError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "event=people_saved module=export status=ok count={} path={}",
        records.len(),
        path.display()
    );
    Ok(())
}

/// Reads an export file written by `save_people`.
///
/// # Errors
/// - `ExportError::FileRead` when the file cannot be opened.
/// - `ExportError::Decode` when the content is not an export array.
pub fn load_people(path: impl AsRef<Path>) -> ExportResult<Vec<PersonRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ExportError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ExportError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{format_timestamp, PersonRecord};
    use crate::model::person::Person;
    use chrono::{TimeZone, Utc};

    #[test]
    fn format_timestamp_uses_micros_and_z_suffix() {
        let ts = Utc.with_ymd_and_hms(2026, 2, 13, 10, 0, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "2026-02-13T10:00:00.000000Z");
    }

    #[test]
    fn record_keeps_missing_timestamp_as_none() {
        let person = Person {
            name: "No Stamp".to_string(),
            age: 18,
            email: "none@x.org".to_string(),
            created_at: None,
        };
        let record = PersonRecord::from(&person);
        assert_eq!(record.created_at, None);
        assert!(record.is_adult);
    }
}
