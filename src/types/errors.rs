use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount error: {0}")]
    InvalidFormat(String),
    #[error("Amount error: Value cannot be zero")]
    Zero,
    #[error("Amount error: Value [{0}] has too many digits to be stored exactly")]
    Unrepresentable(String)
}
