use comfy_table::{Cell, Table};

use crate::cli::open_leaderboard;
use crate::error::Result;

pub fn run(top: usize) -> Result<()> {
    let board = open_leaderboard();

    if board.is_empty() {
        println!("Complete quizzes to appear on the leaderboard!");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Rank", "Name", "Points"]);
    for (i, entry) in board.top_n(top).iter().enumerate() {
        let rank = match i {
            0 => "\u{1F3C6} 1".to_string(),
            1 => "\u{1F948} 2".to_string(),
            2 => "\u{1F949} 3".to_string(),
            _ => format!("#{}", i + 1),
        };
        table.add_row(vec![
            Cell::new(rank),
            Cell::new(&entry.name),
            Cell::new(entry.points),
        ]);
    }
    println!("Top Performers\n{table}");
    Ok(())
}
