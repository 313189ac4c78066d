use super::{calculate_totals, show_report, CategoryShare, ReportError};
use crate::models::{Category, Transaction};
use crate::types::Amount;

use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn create_transaction(id: u32, description: &str, amount: &str, category: Category) -> Result<Transaction> {
    let date = NaiveDate::from_ymd_opt(2024, 1, id).unwrap_or_default();

    Ok(Transaction::new(id, date, description, Amount::from_str(amount)?, category)?)
}

fn decimal(value: &str) -> Result<Decimal> {
    Ok(Decimal::from_str(value)?)
}

fn render(transactions: &[Transaction]) -> Result<String> {
    let mut output = Vec::new();
    show_report(transactions, &mut output)?;

    Ok(String::from_utf8(output)?)
}

#[test]
fn test_totals_split_income_expense_and_net_balance() -> Result<()> {
    let transactions = vec![
        create_transaction(1, "Salary", "3000", Category::Income)?,
        create_transaction(2, "Rent", "-1200", Category::Utilities)?,
        create_transaction(3, "Groceries", "-54.20", Category::Food)?,
        create_transaction(4, "Gift", "25.50", Category::Other)?,
    ];

    let totals = calculate_totals(&transactions)?;

    assert_eq!(totals.total_income, decimal("3025.50")?);
    assert_eq!(totals.total_expense, decimal("-1254.20")?);
    assert_eq!(totals.net_balance(), decimal("1771.30")?);

    Ok(())
}

#[test]
fn test_income_never_enters_category_spending() -> Result<()> {
    let transactions = vec![
        create_transaction(1, "Salary", "3000", Category::Income)?,
        create_transaction(2, "Side gig", "150", Category::Other)?,
        create_transaction(3, "Cinema", "-12", Category::FunHobby)?,
    ];

    let totals = calculate_totals(&transactions)?;

    assert_eq!(totals.category_spending.len(), 1);
    assert_eq!(totals.category_spending.get(&Category::FunHobby), Some(&decimal("12")?));

    Ok(())
}

#[test]
fn test_breakdown_sums_to_absolute_total_expense() -> Result<()> {
    let transactions = vec![
        create_transaction(1, "Groceries", "-54.20", Category::Food)?,
        create_transaction(2, "Takeaway", "-20.15", Category::Food)?,
        create_transaction(3, "Power", "-88.01", Category::Utilities)?,
        create_transaction(4, "Paint", "-7.77", Category::FunHobby)?,
        create_transaction(5, "Salary", "500", Category::Income)?,
    ];

    let totals = calculate_totals(&transactions)?;
    let breakdown = totals.breakdown();
    let spent: Decimal = breakdown.iter().map(|share| share.amount).sum();
    let percent: Decimal = breakdown.iter().map(|share| share.percentage).sum();

    assert_eq!(spent, totals.total_expense.abs());
    assert_eq!(percent.round_dp(6), Decimal::ONE_HUNDRED);

    Ok(())
}

#[test]
fn test_breakdown_orders_by_largest_spend_then_menu_order() -> Result<()> {
    let transactions = vec![
        create_transaction(1, "Snacks", "-10", Category::Other)?,
        create_transaction(2, "Rent", "-40", Category::Utilities)?,
        create_transaction(3, "Lunch", "-10", Category::Food)?,
    ];

    let categories: Vec<Category> = calculate_totals(&transactions)?
        .breakdown()
        .into_iter()
        .map(|share| share.category)
        .collect();

    assert_eq!(categories, vec![Category::Utilities, Category::Food, Category::Other]);

    Ok(())
}

#[test]
fn test_breakdown_reports_zero_percent_when_total_expense_is_zero() -> Result<()> {
    let mut totals = calculate_totals(&[])?;
    totals.category_spending.insert(Category::Food, decimal("5")?);

    assert_eq!(totals.breakdown(), vec![CategoryShare {
        category: Category::Food,
        amount: decimal("5")?,
        percentage: Decimal::ZERO
    }]);

    Ok(())
}

#[test]
fn test_report_on_empty_ledger_prints_info_only() -> Result<()> {
    assert_eq!(render(&[])?, "\n[INFO] Nothing recorded yet. Add a transaction first.\n");

    Ok(())
}

#[test]
fn test_report_for_single_grocery_expense() -> Result<()> {
    let report = render(&[create_transaction(1, "Groceries", "-54.20", Category::Food)?])?;

    assert!(report.contains("Total Income:    $0.00\n"));
    assert!(report.contains("Total Expense:   $54.20\n"));
    assert!(report.contains("NET BALANCE:     $-54.20\n"));
    assert!(report.contains("- Food           : $54.20 (100.0%)\n"));

    Ok(())
}

#[test]
fn test_report_renders_fixed_width_table() -> Result<()> {
    let report = render(&[
        create_transaction(1, "Salary", "3000", Category::Income)?,
        create_transaction(2, "A very long description of the rent", "-1200", Category::Utilities)?,
    ])?;

    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[1], "=".repeat(70));
    assert_eq!(lines[2], "                         FINANCIAL SUMMARY");
    assert!(lines.contains(&"ID    DATE       DESCRIPTION          CATEGORY                 AMOUNT"));
    assert!(lines.contains(&"1     2024-01-01 Salary               Income                 3,000.00"));
    assert!(lines.contains(&"2     2024-01-02 A very long descript Utilities             -1,200.00"));
    assert!(lines.contains(&"NET BALANCE:     $1,800.00"));
    assert!(lines.contains(&"- Utilities      : $1,200.00 (100.0%)"));

    Ok(())
}

#[test]
fn test_report_without_expenses_says_so() -> Result<()> {
    let report = render(&[create_transaction(1, "Salary", "3000", Category::Income)?])?;

    assert!(report.contains("EXPENSE BREAKDOWN:\nNo expenses recorded.\n"));

    Ok(())
}

#[test]
fn test_totals_report_overflow_instead_of_panicking() -> Result<()> {
    let transactions = vec![
        create_transaction(1, "Yacht", "-50000000000000000000000000000", Category::FunHobby)?,
        create_transaction(2, "Island", "-50000000000000000000000000000", Category::FunHobby)?,
    ];

    assert_eq!(calculate_totals(&transactions), Err(ReportError::Overflow { transaction_id: 2 }));

    Ok(())
}

#[test]
fn test_income_overflow_is_reported_for_the_offending_transaction() -> Result<()> {
    let transactions = vec![
        create_transaction(1, "Lottery", "50000000000000000000000000000", Category::Income)?,
        create_transaction(2, "Rent", "-1200", Category::Utilities)?,
        create_transaction(3, "Lottery again", "50000000000000000000000000000", Category::Income)?,
    ];

    assert_eq!(calculate_totals(&transactions), Err(ReportError::Overflow { transaction_id: 3 }));

    Ok(())
}

#[test]
fn test_report_with_overflowing_totals_prints_error_without_table() -> Result<()> {
    let report = render(&[
        create_transaction(1, "Yacht", "-50000000000000000000000000000", Category::FunHobby)?,
        create_transaction(2, "Island", "-50000000000000000000000000000", Category::FunHobby)?,
    ])?;

    assert!(report.contains("[Error] The report cannot be shown."));
    assert!(report.contains("transaction [2]"));
    assert!(!report.contains("FINANCIAL SUMMARY"));

    Ok(())
}

#[test]
fn test_largest_single_amounts_still_report() -> Result<()> {
    let report = render(&[
        create_transaction(1, "Lottery", "50000000000000000000000000000", Category::Income)?,
        create_transaction(2, "Yacht", "-50000000000000000000000000000", Category::FunHobby)?,
    ])?;

    assert!(report.contains("NET BALANCE:     $0.00"));
    assert!(report.contains("(100.0%)"));

    Ok(())
}
