//! Setup for the diagnostic logging.
//!
//! Log records go to the standard error so that standard output only carries
//! the plugin line read by the monitoring supervisor. The threshold is one of:
//!
//! - `Off` (default)
//! - `Error`
//! - `Warn`
//! - `Info`
//! - `Debug`
//! - `Trace`
use std::sync::Once;

use clap::ValueEnum;
use tracing::debug;
use tracing::level_filters::LevelFilter;

static INIT: Once = Once::new();

#[derive(ValueEnum, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Clone, Copy, Default)]
#[value(rename_all = "lower")]
pub enum Threshold {
    /// A threshold lower than all security levels.
    #[default]
    Off,
    /// Corresponds to the `Error` security level.
    Error,
    /// Corresponds to the `Warn` security level.
    Warn,
    /// Corresponds to the `Info` security level.
    Info,
    /// Corresponds to the `Debug` security level.
    Debug,
    /// Corresponds to the `Trace` security level.
    Trace,
}

/// It redirects the log info to the standard error with the given threshold.
pub fn setup(threshold: Threshold) {
    let tracing_level = map_to_tracing_level_filter(threshold);

    if tracing_level == LevelFilter::OFF {
        return;
    }

    INIT.call_once(|| {
        tracing_stderr_init(tracing_level);
    });
}

fn map_to_tracing_level_filter(threshold: Threshold) -> LevelFilter {
    match threshold {
        Threshold::Off => LevelFilter::OFF,
        Threshold::Error => LevelFilter::ERROR,
        Threshold::Warn => LevelFilter::WARN,
        Threshold::Info => LevelFilter::INFO,
        Threshold::Debug => LevelFilter::DEBUG,
        Threshold::Trace => LevelFilter::TRACE,
    }
}

fn tracing_stderr_init(filter: LevelFilter) {
    let () = tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    debug!("Logging initialized");
}
