use crate::cli::{open_leaderboard, open_ledger};
use crate::error::Result;
use crate::settings::{get_data_dir, load_settings};

pub fn run() -> Result<()> {
    let settings = load_settings();
    let data_dir = get_data_dir();

    println!(
        "User:       {}",
        if settings.user_name.is_empty() { "(not set)" } else { &settings.user_name }
    );
    println!("Data dir:   {}", data_dir.display());

    if !data_dir.exists() {
        println!();
        println!("Data directory not found. Run `finwell init` to set up.");
        return Ok(());
    }

    let ledger = open_ledger();
    let snapshot = ledger.snapshot();
    let board = open_leaderboard();

    println!();
    println!("Expenses:            {}", snapshot.expenses.len());
    println!("Investments:         {}", snapshot.investments.len());
    println!("Leaderboard entries: {}", board.len());

    Ok(())
}
