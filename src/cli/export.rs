use std::path::PathBuf;

use crate::cli::open_ledger;
use crate::error::Result;
use crate::settings::get_data_dir;

pub fn run(output_dir: Option<String>) -> Result<()> {
    let dir = output_dir.map(PathBuf::from).unwrap_or_else(get_data_dir);
    std::fs::create_dir_all(&dir)?;

    let ledger = open_ledger();
    let snapshot = ledger.snapshot();

    let expenses_path = dir.join("expenses.csv");
    let mut writer = csv::Writer::from_path(&expenses_path)?;
    writer.write_record(["id", "title", "category", "amount", "created_at"])?;
    for e in snapshot.expenses {
        writer.write_record([
            e.id.to_string(),
            e.title.clone(),
            e.category.to_string(),
            format!("{:.2}", e.amount),
            e.created_at.clone(),
        ])?;
    }
    writer.flush()?;

    let investments_path = dir.join("investments.csv");
    let mut writer = csv::Writer::from_path(&investments_path)?;
    writer.write_record(["id", "name", "type", "amount", "returns_pct", "projected_value", "created_at"])?;
    for i in snapshot.investments {
        writer.write_record([
            i.id.to_string(),
            i.name.clone(),
            i.investment_type.to_string(),
            format!("{:.2}", i.amount),
            format!("{:.2}", i.returns_pct),
            format!("{:.2}", i.projected_value),
            i.created_at.clone(),
        ])?;
    }
    writer.flush()?;

    println!(
        "Exported {} expenses to {} and {} investments to {}",
        snapshot.expenses.len(),
        expenses_path.display(),
        snapshot.investments.len(),
        investments_path.display()
    );
    Ok(())
}
