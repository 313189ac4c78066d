mod errors;
mod ledger;
mod transaction;

use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub use errors::TransactionError;
pub use ledger::Ledger;
pub use transaction::Transaction;

/// Spending category of a transaction, selected from a fixed numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Income,
    Food,
    Utilities,
    #[serde(rename = "Fun/Hobby")]
    FunHobby,
    Other
}

impl Category {
    /// Every category in menu order.
    pub const ALL: [Category; 5] = [
        Category::Income,
        Category::Food,
        Category::Utilities,
        Category::FunHobby,
        Category::Other
    ];

    pub fn selection_key(self) -> &'static str {
        match self {
            Category::Income => "1",
            Category::Food => "2",
            Category::Utilities => "3",
            Category::FunHobby => "4",
            Category::Other => "5"
        }
    }

    /// Maps a menu selection to its category. Anything unrecognised is `Other`.
    pub fn from_selection(selection: &str) -> Self {
        let selection = selection.trim();

        Self::ALL.into_iter()
            .find(|category| category.selection_key() == selection)
            .unwrap_or(Category::Other)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Income => "Income",
            Category::Food => "Food",
            Category::Utilities => "Utilities",
            Category::FunHobby => "Fun/Hobby",
            Category::Other => "Other"
        }
    }
}

impl Display for Category {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        // pad() so table columns honour width and alignment flags
        formatter.pad(self.label())
    }
}

/// Whether a transaction brings money in or takes it out. Always derived from the amount sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense
}

impl Display for TransactionKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => formatter.pad("Income"),
            TransactionKind::Expense => formatter.pad("Expense")
        }
    }
}
