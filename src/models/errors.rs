use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::TransactionKind;
use crate::types::TransactionId;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Description cannot be empty for transaction [{id}]")]
    EmptyDescription {
        id: TransactionId
    },
    #[error("Transaction [{id}] is recorded as [{recorded}] but its amount [{amount}] makes it [{derived}]")]
    TypeMismatch {
        id: TransactionId,
        recorded: TransactionKind,
        derived: TransactionKind,
        amount: Decimal
    },
    #[error("No transaction id is left after [{highest}]")]
    IdsExhausted {
        highest: TransactionId
    }
}
