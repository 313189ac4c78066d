use super::{parse_log_level, LedgerConfig};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[test]
fn test_config_defaults_to_fixed_data_file_and_error_level() {
    let config = LedgerConfig::from_args(Vec::<String>::new());

    assert_eq!(config.data_path, PathBuf::from("budget_data.json"));
    assert_eq!(config.log_level, LevelFilter::ERROR);
}

#[test]
fn test_config_reads_log_level_from_first_argument() {
    let config = LedgerConfig::from_args(vec!["DEBUG".to_string(), "ignored".to_string()]);

    assert_eq!(config.log_level, LevelFilter::DEBUG);
}

#[test]
fn test_unknown_log_level_falls_back_to_error() {
    assert_eq!(parse_log_level("loud"), LevelFilter::ERROR);
    assert_eq!(parse_log_level("warn"), LevelFilter::WARN);
    assert_eq!(parse_log_level("Trace"), LevelFilter::TRACE);
}
