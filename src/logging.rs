//! Logger bootstrap for the binary and tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Default level when `RUST_LOG` is unset.
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes the global logger.
///
/// `RUST_LOG` takes precedence; otherwise state transitions and plate
/// changes (debug) only show up when `verbose` is set.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_level(verbose).to_string());
    // A logger may already be installed when tests call this repeatedly.
    if Builder::from_env(env).try_init().is_err() {
        log::debug!("logger already initialised");
    }
}
