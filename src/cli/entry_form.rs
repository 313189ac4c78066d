use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;
use tracing::{debug, error};

use crate::cli::console::Console;
use crate::cli::errors::ConsoleError;
use crate::models::{Category, Ledger, Transaction};
use crate::storage::Storage;
use crate::types::{Amount, AmountError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Collects one transaction from the console, appends it to the ledger and persists the ledger.
///
/// Returns `Ok(None)` when the add is abandoned because the description was
/// blank. A failed save is reported on the console but the transaction stays
/// in the ledger.
///
/// # Errors
/// Only console failures are returned, including the input being closed mid-form.
pub fn add_transaction<R, W, S>(console: &mut Console<R, W>, ledger: &mut Ledger, storage: &S, today: NaiveDate) -> Result<Option<Transaction>, ConsoleError>
where
    R: BufRead,
    W: Write,
    S: Storage
{
    console.say("\n--- Add New Transaction ---")?;

    let description = console.prompt("Enter description (e.g., 'Groceries', 'Job Salary'): ")?;
    let description = description.trim();

    if description.is_empty() {
        console.say("Description cannot be empty.")?;
        return Ok(None)
    }

    let amount = read_amount(console)?;
    let date = read_date(console, today)?;
    let category = read_category(console)?;

    let transaction = match ledger.record(date, description, amount, category) {
        Ok(transaction) => transaction,
        Err(error) => {
            console.say(format!("[Error] {error}"))?;
            return Ok(None)
        }
    };

    if let Err(error) = storage.save(ledger.transactions()) {
        error!("Transaction [{}] kept in memory only: {error}", transaction.id);
        console.say(format!("\n[FATAL ERROR] Could not save data. {error}"))?;
    }

    console.say(format!(
        "\n[SUCCESS] Added transaction: {} ({}) for ${} on {}.",
        transaction.description,
        transaction.kind(),
        transaction.amount,
        transaction.date.format(DATE_FORMAT)
    ))?;

    Ok(Some(transaction))
}

fn read_amount<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Amount, ConsoleError> {
    loop {
        let input = console.prompt("Enter amount (+ for Income, - for Expense): ")?;

        match Amount::from_str(&input) {
            Ok(amount) => return Ok(amount),
            Err(AmountError::Zero) => console.say("Amount cannot be zero.")?,
            Err(AmountError::Unrepresentable(value)) => {
                debug!("Rejected amount input with too many digits: {value}");
                console.say("Amount has too many digits. Please enter a shorter number.")?;
            }
            Err(AmountError::InvalidFormat(reason)) => {
                debug!("Rejected amount input: {reason}");
                console.say("Invalid input. Please enter a number.")?;
            }
        }
    }
}

fn read_date<R: BufRead, W: Write>(console: &mut Console<R, W>, today: NaiveDate) -> Result<NaiveDate, ConsoleError> {
    loop {
        let input = console.prompt("Enter date (YYYY-MM-DD, or Enter for today): ")?;
        let input = input.trim();

        if input.is_empty() {
            return Ok(today)
        }

        match NaiveDate::parse_from_str(input, DATE_FORMAT) {
            Ok(date) => return Ok(date),
            Err(error) => {
                debug!("Rejected date input [{input}]: {error}");
                console.say("Invalid date format. Use YYYY-MM-DD.")?;
            }
        }
    }
}

fn read_category<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Category, ConsoleError> {
    console.say("Select Category:")?;

    for category in Category::ALL {
        console.say(format!("  [{}] {}", category.selection_key(), category))?;
    }

    let selection = console.prompt("Enter category number (1-5): ")?;

    Ok(Category::from_selection(&selection))
}
