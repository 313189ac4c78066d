use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::cli::console::Console;
use crate::cli::entry_form::add_transaction;
use crate::cli::errors::ConsoleError;
use crate::models::Ledger;
use crate::report::show_report;
use crate::storage::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTransaction,
    ShowReport,
    Exit
}

impl MenuChoice {
    pub fn from_selection(selection: &str) -> Option<Self> {
        match selection.trim() {
            "1" => Some(MenuChoice::AddTransaction),
            "2" => Some(MenuChoice::ShowReport),
            "3" => Some(MenuChoice::Exit),
            _ => None
        }
    }
}

/// The interactive main menu. Owns the ledger for the whole session.
pub struct Menu<S> {
    storage: S,
    ledger: Ledger,
    clock: fn() -> NaiveDate
}

impl<S: Storage> Menu<S> {
    pub fn new(storage: S, ledger: Ledger) -> Self {
        Self {
            storage,
            ledger,
            clock: local_today
        }
    }

    /// Replaces the source of "today" used for blank dates.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Runs the menu until the user exits or the input is closed.
    ///
    /// # Errors
    /// Returns a `ConsoleError` only if the console can no longer be written to or read from.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<(), ConsoleError> {
        loop {
            match self.step(console) {
                Ok(true) => continue,
                Ok(false) => break,
                Err(ConsoleError::Closed) => {
                    info!("Console input closed, leaving the menu");
                    break
                }
                Err(error) => return Err(error)
            }
        }

        console.say("\nShutting down the Budget Tracker. Have a great day!")?;

        Ok(())
    }

    /// Shows the menu and performs one selection. Returns `false` once the user chose to exit.
    fn step<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<bool, ConsoleError> {
        console.say("\n--- Simple Budget Tracker Menu ---")?;
        console.say("1: Add New Transaction")?;
        console.say("2: View Full Financial Report")?;
        console.say("3: Exit Application")?;

        let selection = console.prompt("Select an option (1-3): ")?;

        match MenuChoice::from_selection(&selection) {
            Some(MenuChoice::AddTransaction) => {
                let today = (self.clock)();
                add_transaction(console, &mut self.ledger, &self.storage, today)?;
            }
            Some(MenuChoice::ShowReport) => show_report(self.ledger.transactions(), console.output())?,
            Some(MenuChoice::Exit) => return Ok(false),
            None => console.say("[Error] Invalid option. Try again.")?
        }

        Ok(true)
    }
}

/// Loads the persisted ledger, falling back to an empty one with a console warning.
///
/// A corrupt data file is reported more loudly than an unreadable one, since
/// the next save will replace it.
pub fn load_or_start_fresh<S, R, W>(storage: &S, console: &mut Console<R, W>) -> Result<Ledger, ConsoleError>
where
    S: Storage,
    R: BufRead,
    W: Write
{
    let error = match storage.load() {
        Ok(transactions) => return Ok(Ledger::from_transactions(transactions)),
        Err(error) => error
    };

    warn!("Starting with an empty ledger: {error}");

    if !error.is_corrupt() {
        console.say(format!("\n[WARNING] {error}. Starting fresh."))?;
        return Ok(Ledger::new())
    }

    console.say(format!("\n[WARNING] {error}."))?;
    console.say("[WARNING] Starting fresh. The data file will be replaced on the next save.")?;

    match error.backup() {
        Some(backup) => console.say(format!("[WARNING] A copy of the old file was kept at {}.", backup.display()))?,
        None => console.say("[WARNING] No copy of the old file could be made.")?
    }

    Ok(Ledger::new())
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
