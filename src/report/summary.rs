use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{Category, Transaction};
use crate::report::errors::ReportError;

/// Aggregated figures over a set of transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Totals {
    /// Sum of every positive amount.
    pub total_income: Decimal,
    /// Sum of every negative amount. Zero or negative.
    pub total_expense: Decimal,
    /// Absolute spend per category. Income never contributes here.
    pub category_spending: HashMap<Category, Decimal>
}

/// One line of the expense breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryShare {
    pub category: Category,
    pub amount: Decimal,
    /// Share of the absolute total expense, in percent.
    pub percentage: Decimal
}

impl Totals {
    pub fn net_balance(&self) -> Decimal {
        // income is never negative and expense never positive, so this cannot overflow
        self.total_income + self.total_expense
    }

    /// Category spending, largest first. Equal amounts keep menu order.
    pub fn breakdown(&self) -> Vec<CategoryShare> {
        let total = self.total_expense.abs();

        let mut shares: Vec<CategoryShare> = self.category_spending.iter()
            .map(|(&category, &amount)| CategoryShare {
                category,
                amount,
                percentage: amount.checked_div(total)
                    .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
                    .unwrap_or(Decimal::ZERO)
            })
            .collect();

        shares.sort_by(|left, right| {
            right.amount.cmp(&left.amount).then(left.category.cmp(&right.category))
        });

        shares
    }
}

/// Sums every transaction into income, expense and per-category spending.
///
/// # Errors
/// Returns `ReportError::Overflow` if any running total leaves the range of `Decimal`.
pub fn calculate_totals(transactions: &[Transaction]) -> Result<Totals, ReportError> {
    let mut totals = Totals::default();

    for transaction in transactions {
        let overflow = || ReportError::Overflow { transaction_id: transaction.id };
        let amount = transaction.amount.value();

        if transaction.amount.is_income() {
            totals.total_income = totals.total_income.checked_add(amount)
                .ok_or_else(overflow)?;
        } else {
            totals.total_expense = totals.total_expense.checked_add(amount)
                .ok_or_else(overflow)?;

            let spent = totals.category_spending.entry(transaction.category).or_insert(Decimal::ZERO);
            *spent = spent.checked_add(transaction.amount.magnitude())
                .ok_or_else(overflow)?;
        }
    }

    Ok(totals)
}
