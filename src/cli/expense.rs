use comfy_table::{Cell, Table};

use crate::cli::open_ledger;
use crate::error::Result;
use crate::fmt::money;
use crate::metrics;
use crate::models::ExpenseCategory;

pub fn add(title: &str, amount: f64, category: &str) -> Result<()> {
    let category: ExpenseCategory = category.parse()?;
    let mut ledger = open_ledger();
    let record = ledger.add_expense(title, amount, category)?;
    println!(
        "Added expense {} — {} ({}) [id {}]",
        record.title,
        money(record.amount),
        record.category,
        record.id
    );
    Ok(())
}

pub fn list() -> Result<()> {
    let ledger = open_ledger();
    let snapshot = ledger.snapshot();

    if snapshot.expenses.is_empty() {
        println!("No expenses recorded yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Category", "Amount"]);
    for expense in snapshot.expenses {
        table.add_row(vec![
            Cell::new(expense.id),
            Cell::new(&expense.title),
            Cell::new(expense.category),
            Cell::new(money(expense.amount)),
        ]);
    }
    println!("Expenses\n{table}");
    println!("Total: {}", money(metrics::total_expenses(&snapshot)));
    Ok(())
}

pub fn delete(id: i64) -> Result<()> {
    let mut ledger = open_ledger();
    let existed = ledger.snapshot().expenses.iter().any(|e| e.id == id);
    ledger.delete_expense(id)?;
    if existed {
        println!("Deleted expense {id}.");
    } else {
        println!("No expense with id {id}; nothing to do.");
    }
    Ok(())
}
