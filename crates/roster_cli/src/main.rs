//! `roster` entry point.
//!
//! Runs the fixed demo sequence on stdout. Export failures propagate out of
//! `main` and end the process with a non-zero status.

use roster_core::{core_version, flush_logging, init_logging, run_demo, DemoConfig, DemoError};

#[tokio::main]
async fn main() -> Result<(), DemoError> {
    let config = DemoConfig::default();

    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("roster: logging disabled: {err}");
    }
    log::info!(
        "event=app_start module=cli status=ok version={}",
        core_version()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = run_demo(&config, &mut out).await;
    if let Err(err) = &result {
        log::error!("event=demo_failed module=cli status=error error={err}");
    }
    flush_logging();
    result
}
