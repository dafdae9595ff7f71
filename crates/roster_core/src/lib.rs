//! Core logic for the roster demo: person records, arithmetic helpers,
//! the in-memory store and JSON export.

pub mod calc;
pub mod config;
pub mod demo;
pub mod export;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use calc::{AsF64, CalcError, CalcResult, Calculator};
pub use config::DemoConfig;
pub use demo::{run_demo, DemoError, DemoResult};
pub use export::json_export::{load_people, save_people, ExportError, ExportResult, PersonRecord};
pub use logging::{default_log_level, flush_logging, init_logging, logging_status};
pub use model::person::{parse_person, ParseResult, Person, PersonParseError};
pub use repo::person_repo::{InMemoryPersonRepository, PersonRepository};
pub use service::person_service::PersonService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
