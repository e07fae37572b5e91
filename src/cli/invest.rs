use comfy_table::{Cell, Table};

use crate::cli::open_ledger;
use crate::error::Result;
use crate::fmt::{money, signed_pct};
use crate::metrics;
use crate::models::InvestmentType;

pub fn add(name: &str, amount: f64, returns: f64, investment_type: &str) -> Result<()> {
    let investment_type: InvestmentType = investment_type.parse()?;
    let mut ledger = open_ledger();
    let record = ledger.add_investment(name, amount, returns, investment_type)?;
    println!(
        "Added {} ({}) — {} at {} projects to {} [id {}]",
        record.name,
        record.investment_type,
        money(record.amount),
        signed_pct(record.returns_pct),
        money(record.projected_value),
        record.id
    );
    Ok(())
}

pub fn list() -> Result<()> {
    let ledger = open_ledger();
    let snapshot = ledger.snapshot();

    if snapshot.investments.is_empty() {
        println!("No investments recorded yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Type", "Amount", "Returns", "Projected"]);
    for inv in snapshot.investments {
        table.add_row(vec![
            Cell::new(inv.id),
            Cell::new(&inv.name),
            Cell::new(inv.investment_type),
            Cell::new(money(inv.amount)),
            Cell::new(signed_pct(inv.returns_pct)),
            Cell::new(money(inv.projected_value)),
        ]);
    }
    println!("Investments\n{table}");
    println!(
        "Invested: {}   Projected: {}",
        money(metrics::total_investment(&snapshot)),
        money(metrics::projected_total(&snapshot))
    );
    Ok(())
}

pub fn delete(id: i64) -> Result<()> {
    let mut ledger = open_ledger();
    let existed = ledger.snapshot().investments.iter().any(|i| i.id == id);
    ledger.delete_investment(id)?;
    if existed {
        println!("Deleted investment {id}.");
    } else {
        println!("No investment with id {id}; nothing to do.");
    }
    Ok(())
}
