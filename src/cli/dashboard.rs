use colored::Colorize;

use crate::cli::open_ledger;
use crate::error::Result;
use crate::fmt::{money, signed_pct};
use crate::metrics::{self, ScoreStatus};

pub fn run() -> Result<()> {
    let ledger = open_ledger();
    let snapshot = ledger.snapshot();
    let m = metrics::derive(&snapshot);

    println!("{}", "Financial wellness overview".bold());
    println!();
    println!("Total expenses:    {}", money(m.total_expenses));
    println!("Total invested:    {}", money(m.total_investment));
    println!("Projected value:   {}", money(m.projected_total).green());
    println!("Portfolio growth:  {}", signed_pct(m.portfolio_growth));
    println!();

    let status = match m.score_status {
        ScoreStatus::Excellent => m.score_status.label().green().bold(),
        ScoreStatus::Good => m.score_status.label().green(),
        ScoreStatus::Fair => m.score_status.label().yellow(),
        ScoreStatus::NeedsImprovement => m.score_status.label().red(),
    };
    println!("Financial score:   {} / 800 ({status})", m.financial_score);

    if snapshot.investments.is_empty() {
        println!();
        println!("Add investments with `finwell invest add` to raise your score.");
    }
    Ok(())
}
