//! Registry demo CLI.
//!
//! Loads a set of simulated textures into a registry, rescues one, lets
//! another dispose itself, tears the registry down and checks for leaks.
//!
//! # Usage
//!
//! ```bash
//! registry-demo [config.json]
//! ```

use std::path::Path;
use std::process::ExitCode;

use example::{DemoConfig, run};

fn main() -> ExitCode {
    let config = match std::env::args().nth(1) {
        Some(path) => match DemoConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => DemoConfig::default(),
    };

    config.tracing.install();

    match run(&config) {
        Ok(report) => {
            tracing::info!(
                added = report.added,
                removed = report.removed,
                disposed = report.disposed,
                torn_down = report.torn_down,
                "demo finished without leaks"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
