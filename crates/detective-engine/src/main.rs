//! Detective Quest on the terminal.
//!
//! # Startup Sequence
//!
//! 1. Load `detective-config.yaml` from the working directory, if present
//! 2. Initialize structured logging on stderr (`RUST_LOG` wins over the
//!    configured level)
//! 3. Build the mansion and the case file
//! 4. Run the exploration over stdin and stdout
//! 5. Print the final summary and verdict
//!
//! Exit status is 0 after a normal session, 1 when memory runs out, and 2
//! for configuration, layout or output failures.

mod error;

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use detective_core::report::write_final_summary;
use detective_core::{ExplorationDriver, Notebook, QuestConfig, ReaderCommandSource};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Configuration file looked up in the working directory.
const CONFIG_FILE: &str = "detective-config.yaml";

fn main() -> ExitCode {
    let loaded = load_config();
    let level = loaded
        .as_ref()
        .map_or_else(|_| QuestConfig::default().logging.level, |c| c.logging.level.clone());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level)),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    match loaded.and_then(|config| run(&config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "detective-engine failed");
            // The log filter may be off; the player still gets the reason.
            e.write_diagnostic(&mut io::stderr().lock()).ok();
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(config: &QuestConfig) -> Result<(), EngineError> {
    if !Path::new(CONFIG_FILE).exists() {
        info!("config file not found, using defaults");
    }
    info!(
        bucket_count = config.ledger.bucket_count.get(),
        custom_mansion = config.mansion.is_some(),
        custom_case_file = config.case_file.is_some(),
        "configuration loaded"
    );

    let map = config.build_mansion()?;
    let case_file = config.build_case_file()?;
    let unplaced = case_file.unplaced_rooms(&map).len();
    info!(
        rooms = map.len(),
        evidence_rooms = case_file.len(),
        unplaced,
        "case prepared"
    );

    let mut driver =
        ExplorationDriver::new(&map, &case_file, Notebook::new(config.ledger.bucket_count));

    let stdin = io::stdin();
    let mut source = ReaderCommandSource::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = driver.run(&mut source, &mut out)?;
    info!(
        end_reason = ?outcome.end_reason,
        commands = outcome.commands,
        "session over"
    );

    write_final_summary(&mut out, driver.notebook())?;
    out.flush()?;
    Ok(())
}

/// Load `detective-config.yaml`, or the built-in defaults when it is absent.
fn load_config() -> Result<QuestConfig, EngineError> {
    let config_path = Path::new(CONFIG_FILE);
    if config_path.exists() {
        Ok(QuestConfig::from_file(config_path)?)
    } else {
        Ok(QuestConfig::default())
    }
}
