use std::ffi::OsString;
use std::fs;
use std::io;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::models::Transaction;
use crate::storage::errors::StoreError;
use crate::storage::Storage;

pub const DEFAULT_DATA_PATH: &str = "budget_data.json";

const BACKUP_SUFFIX: &str = ".bak";
const INDENT: &[u8] = b"    ";

/// Keeps the ledger as a pretty-printed JSON array in a single file.
pub struct JsonFileStore {
    path: PathBuf
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into()
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io { path: self.path.clone(), source }
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new(".")
        }
    }

    fn backup_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(BACKUP_SUFFIX);
        PathBuf::from(name)
    }

    /// Copies an unusable data file aside so the next save does not destroy it.
    fn back_up_corrupt_file(&self) -> Option<PathBuf> {
        let backup = self.backup_path();

        match fs::copy(&self.path, &backup) {
            Ok(_) => {
                warn!("Corrupt data file [{}] copied to [{}]", self.path.display(), backup.display());
                Some(backup)
            }
            Err(error) => {
                warn!("Corrupt data file [{}] could not be backed up: {error}", self.path.display());
                None
            }
        }
    }

    /// Writes the full document to a temporary file beside the data file.
    ///
    /// The data file itself is untouched until the snapshot is handed to
    /// `replace_with`. Dropping the snapshot instead deletes it.
    pub(crate) fn write_snapshot(&self, transactions: &[Transaction]) -> Result<NamedTempFile, StoreError> {
        // Written beside the target so the final rename stays on one filesystem.
        let mut file = NamedTempFile::new_in(self.directory()).map_err(|error| self.io_error(error))?;

        {
            let mut writer = BufWriter::new(file.as_file_mut());
            let mut serializer = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));

            transactions.serialize(&mut serializer)?;
            writer.flush().map_err(|error| self.io_error(error))?;
        }

        file.as_file().sync_all().map_err(|error| self.io_error(error))?;

        Ok(file)
    }

    /// Atomically renames a finished snapshot over the data file.
    pub(crate) fn replace_with(&self, snapshot: NamedTempFile) -> Result<(), StoreError> {
        snapshot.persist(&self.path).map_err(|source| StoreError::Persist {
            path: self.path.clone(),
            source
        })?;

        Ok(())
    }
}

impl Storage for JsonFileStore {
    fn load(&self) -> Result<Vec<Transaction>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                info!("No data file at [{}], starting with an empty ledger", self.path.display());
                return Ok(Vec::new())
            }
            Err(error) => return Err(self.io_error(error))
        };

        let document: Value = serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            backup: self.back_up_corrupt_file(),
            source
        })?;

        if !document.is_array() {
            return Err(StoreError::NotAList {
                path: self.path.clone(),
                found: describe_json_kind(&document),
                backup: self.back_up_corrupt_file()
            })
        }

        let transactions: Vec<Transaction> = serde_json::from_value(document).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            backup: self.back_up_corrupt_file(),
            source
        })?;

        info!("Loaded [{}] transactions from [{}]", transactions.len(), self.path.display());

        Ok(transactions)
    }

    fn save(&self, transactions: &[Transaction]) -> Result<(), StoreError> {
        let snapshot = self.write_snapshot(transactions)?;
        self.replace_with(snapshot)?;

        info!("Saved [{}] transactions to [{}]", transactions.len(), self.path.display());

        Ok(())
    }
}

fn describe_json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object"
    }
}
