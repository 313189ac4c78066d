mod errors;
mod json_store;

use crate::models::Transaction;

pub use errors::StoreError;
pub use json_store::{JsonFileStore, DEFAULT_DATA_PATH};

pub trait Storage {
    /// Reads every persisted transaction, in stored order. A missing store is empty, not an error.
    fn load(&self) -> Result<Vec<Transaction>, StoreError>;
    /// Replaces the persisted set with `transactions`.
    fn save(&self, transactions: &[Transaction]) -> Result<(), StoreError>;
}
