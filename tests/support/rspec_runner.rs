//! Runs `rspec` suites on a single thread.

use rspec::{block::Suite, ConfigurationBuilder, Logger, Runner};
use std::sync::Arc;

/// Runs an rspec suite serially so every example drives the same Bevy app in
/// declaration order. Failures exit the test process with a non-zero status.
pub fn run_serial<T>(suite: &Suite<T>)
where
    T: Clone + Send + Sync + std::fmt::Debug,
{
    let logger = Arc::new(Logger::new(std::io::stdout()));
    let config = ConfigurationBuilder::default()
        .parallel(false)
        .exit_on_failure(true)
        .build()
        .unwrap_or_else(|e| panic!("rspec configuration failed: {e}"));
    Runner::new(config, vec![logger]).run(suite);
}
