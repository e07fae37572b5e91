mod calc;
mod cli;
mod error;
mod fmt;
mod forecast;
mod leaderboard;
mod ledger;
mod metrics;
mod models;
mod quiz;
mod settings;
mod storage;

use clap::Parser;

use cli::{CalcCommands, Cli, Commands, ExpenseCommands, InvestCommands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir, name } => cli::init::run(data_dir, name),
        Commands::Expense { command } => match command {
            ExpenseCommands::Add { title, amount, category } => {
                cli::expense::add(&title, amount, &category)
            }
            ExpenseCommands::List => cli::expense::list(),
            ExpenseCommands::Delete { id } => cli::expense::delete(id),
        },
        Commands::Invest { command } => match command {
            InvestCommands::Add { name, amount, returns, investment_type } => {
                cli::invest::add(&name, amount, returns, &investment_type)
            }
            InvestCommands::List => cli::invest::list(),
            InvestCommands::Delete { id } => cli::invest::delete(id),
        },
        Commands::Dashboard => cli::dashboard::run(),
        Commands::Forecast => cli::forecast::run(),
        Commands::Quiz => cli::quiz::run(),
        Commands::Leaderboard { top } => cli::leaderboard::run(top),
        Commands::Calc { command } => match command {
            CalcCommands::Emi { amount, rate, years } => cli::calc::emi(amount, rate, years),
            CalcCommands::Sip { amount, rate, years } => cli::calc::sip(amount, rate, years),
        },
        Commands::Export { output_dir } => cli::export::run(output_dir),
        Commands::Demo => cli::demo::run(),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
