//! Fixed demonstration sequence.
//!
//! # Responsibility
//! - Walk arithmetic, store and export in one strictly sequential run.
//! - Print human-readable progress to the supplied writer.
//!
//! # Invariants
//! - Only the two deliberate arithmetic failures are handled here; export
//!   failures propagate to the caller.

use crate::calc::{CalcError, Calculator};
use crate::config::DemoConfig;
use crate::export::json_export::{save_people, ExportError};
use crate::model::person::Person;
use crate::repo::person_repo::InMemoryPersonRepository;
use crate::service::person_service::PersonService;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;

const BANNER: &str = "Roster Demo Application";
const RULE_WIDTH: usize = 40;

pub type DemoResult<T> = Result<T, DemoError>;

/// Failures that abort the demo run.
#[derive(Debug)]
pub enum DemoError {
    Calc(CalcError),
    Export(ExportError),
    Output(std::io::Error),
}

impl Display for DemoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calc(err) => write!(f, "{err}"),
            Self::Export(err) => write!(f, "{err}"),
            Self::Output(err) => write!(f, "failed to write demo output: {err}"),
        }
    }
}

impl Error for DemoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Calc(err) => Some(err),
            Self::Export(err) => Some(err),
            Self::Output(err) => Some(err),
        }
    }
}

impl From<CalcError> for DemoError {
    fn from(value: CalcError) -> Self {
        Self::Calc(value)
    }
}

impl From<ExportError> for DemoError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

impl From<std::io::Error> for DemoError {
    fn from(value: std::io::Error) -> Self {
        Self::Output(value)
    }
}

/// Runs the demonstration sequence, printing to `out`.
///
/// # Errors
/// - `DemoError::Export` when the export file cannot be written.
/// - `DemoError::Output` when `out` rejects a write.
pub async fn run_demo<W: Write>(config: &DemoConfig, out: &mut W) -> DemoResult<()> {
    info!("event=demo_start module=demo status=ok");
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    writeln!(out, "5 + 3 = {}", Calculator::add(5, 3))?;
    writeln!(out, "10 / 2 = {:?}", Calculator::divide(10, 2)?)?;

    let numbers = [1, 2, 3, 4, 5];
    let avg = Calculator::average(&numbers)?;
    writeln!(out, "Average of {numbers:?} = {avg:?}")?;

    let mut service = PersonService::with_delay(
        InMemoryPersonRepository::seeded(),
        config.retrieval_delay,
    );
    let people = service.get_all().await;

    writeln!(out, "\nFound {} people:", people.len())?;
    for person in &people {
        writeln!(
            out,
            "- {} ({}) - {}",
            person.name,
            person.age,
            person.status_label()
        )?;
    }

    let new_person = Person::new("David Wilson", 28, "david@newdomain.com");
    let new_name = new_person.name.clone();
    if service.add_person(new_person) {
        writeln!(out, "Successfully added: {new_name}")?;
    }

    // Export reflects the store after the insertion above.
    let current = service.get_all().await;
    save_people(&current, &config.output_path)?;

    match Calculator::divide(10, 0) {
        Ok(result) => writeln!(out, "Division result: {result:?}")?,
        Err(err) => writeln!(out, "Caught error: {err}")?,
    }

    match Calculator::average::<i32>(&[]) {
        Ok(result) => writeln!(out, "Empty average: {result:?}")?,
        Err(err) => writeln!(out, "Caught error: {err}")?,
    }

    writeln!(out, "\nTest completed successfully!")?;
    info!("event=demo_finish module=demo status=ok");
    Ok(())
}
