use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not read or write data file [{}]: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: io::Error
    },
    #[error("Data file [{}] does not contain valid transactions: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        backup: Option<PathBuf>,
        source: serde_json::Error
    },
    #[error("Data file [{}] holds {found} instead of a list of transactions", .path.display())]
    NotAList {
        path: PathBuf,
        found: &'static str,
        backup: Option<PathBuf>
    },
    #[error("Could not serialize transactions: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Could not replace data file [{}]: {source}", .path.display())]
    Persist {
        path: PathBuf,
        source: tempfile::PersistError
    }
}

impl StoreError {
    /// True when the file exists and was read, but its content is not a ledger.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Malformed { .. } | StoreError::NotAList { .. })
    }

    /// Where a copy of a corrupt data file was preserved, if one was made.
    pub fn backup(&self) -> Option<&Path> {
        match self {
            StoreError::Malformed { backup, .. } | StoreError::NotAList { backup, .. } => backup.as_deref(),
            _ => None
        }
    }
}
