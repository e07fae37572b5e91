use std::io::Write;

use colored::Colorize;

use crate::cli::open_leaderboard;
use crate::error::Result;
use crate::quiz::{Outcome, QuizEngine, BADGES};
use crate::settings::{load_settings, new_user_id, save_settings};

pub fn run() -> Result<()> {
    let mut settings = load_settings();
    if settings.user_id.is_empty() {
        settings.user_id = new_user_id();
        save_settings(&settings)?;
    }
    let display_name = if settings.user_name.is_empty() {
        "Anonymous".to_string()
    } else {
        settings.user_name.clone()
    };

    println!("{}", "Financial Literacy Quiz".bold());
    println!();

    let mut quiz = QuizEngine::new();
    let final_score = loop {
        let (pos, total) = quiz.position();
        let question = quiz.current().expect("quiz not completed");
        println!("Question {pos}/{total}: {}", question.prompt.bold());
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}. {option}", i + 1);
        }
        let choice = match read_choice(question.options.len())? {
            Some(choice) => choice,
            None => {
                println!();
                println!("No answer received; quiz aborted. Your score was not recorded.");
                return Ok(());
            }
        };
        match quiz.answer(choice) {
            Outcome::InProgress => println!(),
            Outcome::Completed(score) => break score,
        }
    };

    println!();
    println!("Quiz completed! Your score: {final_score} / {}", quiz.position().1);

    for badge in BADGES {
        if badge.earned(final_score) {
            println!("  {} {} unlocked", badge.icon, badge.title);
        }
    }

    let mut board = open_leaderboard();
    board.record_score(&settings.user_id, &display_name, final_score)?;
    println!();
    println!("Best score recorded for {display_name}. See `finwell leaderboard`.");
    Ok(())
}

/// Read a 1-based option number from stdin, re-prompting until valid.
/// Returns None when stdin is exhausted (closed or piped input ran out).
fn read_choice(options: usize) -> Result<Option<usize>> {
    loop {
        print!("Your answer (1-{options}): ");
        std::io::stdout().flush()?;
        let mut input = String::new();
        if std::io::stdin().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        match input.trim().parse::<usize>() {
            Ok(n) if (1..=options).contains(&n) => return Ok(Some(n - 1)),
            _ => println!("Please enter a number between 1 and {options}."),
        }
    }
}
