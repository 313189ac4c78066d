mod cli;
mod config;
mod models;
mod report;
mod storage;
mod types;

use std::io::{stderr, stdin, stdout};

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::cli::{load_or_start_fresh, Console, Menu};
use crate::config::LedgerConfig;
use crate::storage::JsonFileStore;

fn main() -> Result<()> {
    let config = LedgerConfig::from_args(std::env::args().skip(1));

    setup_logging(config.log_level);

    let storage = JsonFileStore::new(&config.data_path);
    let mut console = Console::new(stdin().lock(), stdout().lock());

    let ledger = load_or_start_fresh(&storage, &mut console)?;
    info!("Session started with [{}] transactions", ledger.len());

    let mut menu = Menu::new(storage, ledger);
    menu.run(&mut console)?;

    info!("Session ended with [{}] transactions", menu.ledger().len());

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout is the interactive console, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
