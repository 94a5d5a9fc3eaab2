use std::process;

use station_scheduler::driver::{self, Scenario};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so the report on stdout stays clean.
    // Level is controlled by RUST_LOG (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let scenario = match std::env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "loading scenario");
            match Scenario::load(&path) {
                Ok(scenario) => scenario,
                Err(e) => {
                    error!("Failed to load scenario: {e}");
                    process::exit(1);
                }
            }
        }
        None => {
            info!("no scenario file given, running reference scenario");
            Scenario::reference()
        }
    };

    let report = match driver::run(&scenario) {
        Ok(report) => report,
        Err(e) => {
            error!("Scenario failed: {e}");
            process::exit(1);
        }
    };

    print!("{report}");

    if report.is_aborted() {
        process::exit(1);
    }
}
