mod amount;
mod errors;

pub use amount::{format_currency, format_percentage, Amount};
pub use errors::AmountError;

pub type TransactionId = u32;
