use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::errors::TransactionError;
use crate::models::{Category, TransactionKind};
use crate::types::{Amount, TransactionId};

/// A single income or expense entry in the ledger.
///
/// The income/expense `type` is not held here; it is derived from the sign of
/// `amount` whenever it is needed, so the two can never disagree in memory.
/// On disk the derived `type` is written next to the other fields and checked
/// again when the record is read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "StoredTransaction", try_from = "StoredTransaction")]
pub struct Transaction {
    /// Ledger-assigned identifier, starting at 1.
    pub id: TransactionId,
    /// Calendar day the transaction happened on.
    pub date: NaiveDate,
    /// Free-form, non-empty description.
    pub description: String,
    /// Signed amount, positive for income and negative for expenses.
    pub amount: Amount,
    pub category: Category
}

impl Transaction {
    /// Builds a transaction, trimming the description.
    ///
    /// # Errors
    /// Returns `TransactionError::EmptyDescription` if nothing is left after trimming.
    pub fn new(id: TransactionId, date: NaiveDate, description: &str, amount: Amount, category: Category) -> Result<Self, TransactionError> {
        let description = description.trim();

        if description.is_empty() {
            return Err(TransactionError::EmptyDescription { id })
        }

        Ok(Self {
            id,
            date,
            description: description.to_string(),
            amount,
            category
        })
    }

    pub fn kind(&self) -> TransactionKind {
        if self.amount.is_income() {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        }
    }
}

/// On-disk shape of a transaction. Field order here is the field order in the file.
#[derive(Serialize, Deserialize)]
struct StoredTransaction {
    id: TransactionId,
    date: NaiveDate,
    description: String,
    amount: Amount,
    category: Category,
    #[serde(rename = "type")]
    kind: TransactionKind
}

impl From<Transaction> for StoredTransaction {
    fn from(transaction: Transaction) -> Self {
        let kind = transaction.kind();

        Self {
            id: transaction.id,
            date: transaction.date,
            description: transaction.description,
            amount: transaction.amount,
            category: transaction.category,
            kind
        }
    }
}

impl TryFrom<StoredTransaction> for Transaction {
    type Error = TransactionError;

    fn try_from(stored: StoredTransaction) -> Result<Self, Self::Error> {
        let transaction = Transaction::new(stored.id, stored.date, &stored.description, stored.amount, stored.category)?;

        if transaction.kind() != stored.kind {
            return Err(TransactionError::TypeMismatch {
                id: stored.id,
                recorded: stored.kind,
                derived: transaction.kind(),
                amount: stored.amount.value()
            })
        }

        Ok(transaction)
    }
}
