#[cfg(test)]
mod tests;

use std::path::PathBuf;

use tracing::level_filters::LevelFilter;

use crate::storage::DEFAULT_DATA_PATH;

/// Runtime settings. The data file location is fixed; only the log level can be chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerConfig {
    pub data_path: PathBuf,
    pub log_level: LevelFilter
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            log_level: LevelFilter::ERROR
        }
    }
}

impl LedgerConfig {
    /// Builds the settings from the process arguments, program name excluded.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>
    {
        let mut config = Self::default();

        if let Some(level) = args.into_iter().next() {
            config.log_level = parse_log_level(&level);
        }

        config
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
