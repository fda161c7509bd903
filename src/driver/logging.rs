//! Logging setup
//!
//! 起動時に一度だけロガーを初期化する

use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::adapter::config::LogLevel;

/// Install the global logger writing to stdout at `level`.
///
/// Later calls are ignored, so the verbosity chosen at startup is final.
pub fn init_logging(level: LogLevel) {
    let filter = LevelFilter::from(level);
    let _ = Builder::new()
        .filter_level(filter)
        // HTTP internals stay quiet unless explicitly debugging
        .filter_module("hyper_util", filter.min(LevelFilter::Info))
        .filter_module("reqwest", filter.min(LevelFilter::Info))
        .target(Target::Stdout)
        .format_timestamp_secs()
        .try_init();
}
