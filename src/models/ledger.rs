use chrono::NaiveDate;
use tracing::debug;

use crate::models::errors::TransactionError;
use crate::models::{Category, Transaction};
use crate::types::{Amount, TransactionId};

/// The in-memory, ordered set of every recorded transaction.
///
/// Owned by the menu loop for the whole session and handed to the entry form
/// and the report by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    transactions: Vec<Transaction>
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Id the next recorded transaction will receive.
    ///
    /// One past the highest id present, so ids are never reused even when the
    /// stored list has gaps or has been reordered by hand.
    ///
    /// # Errors
    /// Returns `TransactionError::IdsExhausted` once the highest id is `TransactionId::MAX`.
    pub fn next_id(&self) -> Result<TransactionId, TransactionError> {
        match self.transactions.iter().map(|transaction| transaction.id).max() {
            None => Ok(1),
            Some(highest) => highest.checked_add(1)
                .ok_or(TransactionError::IdsExhausted { highest })
        }
    }

    /// Creates a transaction with the next id and appends it.
    ///
    /// # Errors
    /// Returns `TransactionError::EmptyDescription` if the description is blank
    /// and `TransactionError::IdsExhausted` if no unused id is left.
    pub fn record(&mut self, date: NaiveDate, description: &str, amount: Amount, category: Category) -> Result<Transaction, TransactionError> {
        let transaction = Transaction::new(self.next_id()?, date, description, amount, category)?;

        debug!("Transaction [{}]:[{}] recorded for [{}] in [{}]", transaction.id, transaction.kind(), transaction.amount, transaction.category);

        self.transactions.push(transaction.clone());

        Ok(transaction)
    }
}
