//! Logger setup for the `formgate` binary.
//!
//! Logs go to stderr so stdout stays machine-readable. `RUST_LOG` is honoured
//! unless an explicit level is passed in.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger`. Safe to call more than once; later calls are no-ops.
///
/// `Some(level)` overrides `RUST_LOG` for the formgate crates.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder
            .filter_module("formgate", level)
            .filter_module("formgate_core", level);
        if level == LevelFilter::Off {
            builder.filter_level(LevelFilter::Off);
        }
    }
    let _ = builder.format_timestamp_millis().try_init();
}
