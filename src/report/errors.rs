use thiserror::Error;

use crate::types::TransactionId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("Numeric overflow occurred while adding transaction [{transaction_id}] to the totals")]
    Overflow {
        transaction_id: TransactionId
    }
}
