use std::io;
use std::io::Write;

use tracing::error;

use crate::models::Transaction;
use crate::report::summary::calculate_totals;
use crate::types::{format_currency, format_percentage};

const REPORT_WIDTH: usize = 70;
const DESCRIPTION_WIDTH: usize = 20;
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Writes the financial summary, the transaction table and the expense breakdown.
///
/// Totals that cannot be computed are reported on `output` instead of the summary.
pub fn show_report<W: Write>(transactions: &[Transaction], output: &mut W) -> io::Result<()> {
    if transactions.is_empty() {
        writeln!(output, "\n[INFO] Nothing recorded yet. Add a transaction first.")?;
        return Ok(())
    }

    let totals = match calculate_totals(transactions) {
        Ok(totals) => totals,
        Err(report_error) => {
            error!("Report not shown: {report_error}");
            writeln!(output, "\n[Error] The report cannot be shown. {report_error}.")?;
            return Ok(())
        }
    };

    let heavy_rule = "=".repeat(REPORT_WIDTH);
    let light_rule = "-".repeat(REPORT_WIDTH);

    writeln!(output, "\n{heavy_rule}")?;
    writeln!(output, "{:>42}", "FINANCIAL SUMMARY")?;
    writeln!(output, "{heavy_rule}")?;

    writeln!(output, "Total Income:    ${}", format_currency(totals.total_income))?;
    writeln!(output, "Total Expense:   ${}", format_currency(totals.total_expense.abs()))?;
    writeln!(output, "---")?;
    writeln!(output, "NET BALANCE:     ${}", format_currency(totals.net_balance()))?;
    writeln!(output, "{light_rule}")?;

    writeln!(output, "{:<5} {:<10} {:<20} {:<15} {:>15}", "ID", "DATE", "DESCRIPTION", "CATEGORY", "AMOUNT")?;
    writeln!(output, "{light_rule}")?;

    for transaction in transactions {
        let description: String = transaction.description.chars().take(DESCRIPTION_WIDTH).collect();

        writeln!(
            output,
            "{:<5} {:<10} {:<20} {:<15} {:>15}",
            transaction.id,
            transaction.date.format(DATE_FORMAT).to_string(),
            description,
            transaction.category,
            transaction.amount.to_string()
        )?;
    }

    writeln!(output, "{heavy_rule}")?;
    writeln!(output, "\nEXPENSE BREAKDOWN:")?;

    let breakdown = totals.breakdown();

    if breakdown.is_empty() {
        writeln!(output, "No expenses recorded.")?;
    }

    for share in breakdown {
        writeln!(
            output,
            "- {:<15}: ${} ({}%)",
            share.category,
            format_currency(share.amount),
            format_percentage(share.percentage)
        )?;
    }

    writeln!(output, "{heavy_rule}")?;

    Ok(())
}
