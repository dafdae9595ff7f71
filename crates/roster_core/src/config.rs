//! Compiled-in driver defaults.
//!
//! Nothing is read from flags, environment or files; tests build their own
//! `DemoConfig` to redirect output.

use crate::logging::default_log_level;
use crate::service::person_service::DEFAULT_RETRIEVAL_DELAY;
use std::path::PathBuf;
use std::time::Duration;

/// Default export file name, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "people.json";
const LOG_DIR_NAME: &str = "roster-logs";

/// Settings consumed by the demo driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub output_path: PathBuf,
    pub log_level: &'static str,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
    pub retrieval_delay: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            log_level: default_log_level(),
            log_dir: std::env::temp_dir().join(LOG_DIR_NAME),
            retrieval_delay: DEFAULT_RETRIEVAL_DELAY,
        }
    }
}
