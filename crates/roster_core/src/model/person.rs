//! Person domain model.
//!
//! # Responsibility
//! - Define the canonical person record shared by store, export and driver.
//! - Derive adult status on demand.
//!
//! # Invariants
//! - Constructors always populate `created_at`.
//! - `email` is the lookup key by convention; uniqueness is not enforced here.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum age treated as adult.
pub const ADULT_AGE: u32 = 18;

pub type ParseResult<T> = Result<T, PersonParseError>;

/// Canonical person record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
    /// Lookup key used by the store.
    pub email: String,
    /// Creation time. Filled by every constructor; only direct struct
    /// literals can leave it empty.
    pub created_at: Option<DateTime<Utc>>,
}

impl Person {
    /// Creates a person stamped with the current wall-clock time.
    pub fn new(name: impl Into<String>, age: u32, email: impl Into<String>) -> Self {
        Self::with_created_at(name, age, email, None)
    }

    /// Creates a person with a caller-provided creation time.
    ///
    /// # Invariants
    /// - `None` is replaced with `Utc::now()`, so the result always carries a
    ///   timestamp.
    pub fn with_created_at(
        name: impl Into<String>,
        age: u32,
        email: impl Into<String>,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
            created_at: Some(created_at.unwrap_or_else(Utc::now)),
        }
    }

    /// Returns whether this person is `ADULT_AGE` or older.
    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    /// Short status label used by console output.
    pub fn status_label(&self) -> &'static str {
        if self.is_adult() {
            "adult"
        } else {
            "minor"
        }
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) - {} [{}]",
            self.name,
            self.age,
            self.email,
            self.status_label()
        )
    }
}

/// Presence/type failures when building a person from untyped JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonParseError {
    NotAnObject,
    MissingField(&'static str),
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

impl Display for PersonParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "invalid data provided: expected a JSON object"),
            Self::MissingField(field) => write!(f, "missing required field `{field}`"),
            Self::InvalidField { field, expected } => {
                write!(f, "field `{field}` must be {expected}")
            }
        }
    }
}

impl Error for PersonParseError {}

/// Builds a person from an untyped JSON object.
///
/// # Contract
/// - `name` and `email` must be strings, `age` a non-negative integer.
/// - `created_at` is optional; when present it must be an RFC 3339 string.
///   Absent or `null` falls back to the constructor default.
pub fn parse_person(value: &Value) -> ParseResult<Person> {
    let obj = value.as_object().ok_or(PersonParseError::NotAnObject)?;

    let name = required_str(obj, "name")?;
    let email = required_str(obj, "email")?;
    let age = match obj.get("age") {
        None | Some(Value::Null) => return Err(PersonParseError::MissingField("age")),
        Some(raw) => raw
            .as_u64()
            .and_then(|age| u32::try_from(age).ok())
            .ok_or(PersonParseError::InvalidField {
                field: "age",
                expected: "a non-negative integer",
            })?,
    };

    let created_at = match obj.get("created_at") {
        None | Some(Value::Null) => None,
        Some(raw) => {
            let parsed = raw
                .as_str()
                .and_then(|text| DateTime::parse_from_rfc3339(text).ok())
                .ok_or(PersonParseError::InvalidField {
                    field: "created_at",
                    expected: "an RFC 3339 timestamp string",
                })?;
            Some(parsed.with_timezone(&Utc))
        }
    };

    Ok(Person::with_created_at(name, age, email, created_at))
}

fn required_str<'a>(
    obj: &'a serde_json::Map<String, Value>,
    field: &'static str,
) -> ParseResult<&'a str> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(PersonParseError::MissingField(field)),
        Some(raw) => raw.as_str().ok_or(PersonParseError::InvalidField {
            field,
            expected: "a string",
        }),
    }
}
