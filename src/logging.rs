//! Tracing setup

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::DeskResult;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "budgetdesk=warn";
const VERBOSE_DIRECTIVE: &str = "budgetdesk=debug";

fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_DIRECTIVE);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber once.
///
/// Logs go to stderr, or are appended to `log_file` when given (the TUI
/// owns the terminal). `RUST_LOG` applies unless `verbose` is set.
pub fn init_tracing(verbose: bool, log_file: Option<&Path>) -> DeskResult<()> {
    let file = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            Some(OpenOptions::new().create(true).append(true).open(path)?)
        }
        None => None,
    };

    TRACING_INIT.call_once(|| {
        let builder = fmt().with_env_filter(filter(verbose)).with_target(false);
        // A subscriber installed elsewhere (tests) wins.
        let _ = match file {
            Some(file) => builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init(),
            None => builder.with_writer(std::io::stderr).try_init(),
        };
    });
    Ok(())
}
