pub mod calc;
pub mod dashboard;
pub mod demo;
pub mod expense;
pub mod export;
pub mod forecast;
pub mod init;
pub mod invest;
pub mod leaderboard;
pub mod quiz;
pub mod status;

use clap::{Parser, Subcommand};

use crate::ledger::LedgerStore;
use crate::settings::get_data_dir;
use crate::storage::FileStorage;

pub(crate) fn open_ledger() -> LedgerStore<FileStorage> {
    LedgerStore::load(FileStorage::new(&get_data_dir()))
}

pub(crate) fn open_leaderboard() -> crate::leaderboard::LeaderboardStore<FileStorage> {
    crate::leaderboard::LeaderboardStore::load(FileStorage::new(&get_data_dir()))
}

#[derive(Parser)]
#[command(name = "finwell", about = "Personal-finance tracker: ledger, projections, and a financial literacy quiz.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up finwell: choose a data directory and identify yourself.
    Init {
        /// Path for finwell data (default: ~/Documents/finwell)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
        /// Display name used on the leaderboard
        #[arg(long)]
        name: Option<String>,
    },
    /// Track expenses.
    Expense {
        #[command(subcommand)]
        command: ExpenseCommands,
    },
    /// Track investments.
    Invest {
        #[command(subcommand)]
        command: InvestCommands,
    },
    /// Show totals, projections and your financial score.
    Dashboard,
    /// Project your portfolio three periods ahead.
    Forecast,
    /// Take the financial literacy quiz; your best score goes on the leaderboard.
    Quiz,
    /// Show the top quiz scores.
    Leaderboard {
        /// Number of entries to show
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Loan EMI and SIP calculators.
    Calc {
        #[command(subcommand)]
        command: CalcCommands,
    },
    /// Export the ledger to CSV files.
    Export {
        /// Directory for expenses.csv and investments.csv (default: data dir)
        #[arg(long = "output-dir")]
        output_dir: Option<String>,
    },
    /// Load sample expenses and investments to explore finwell.
    Demo,
    /// Show the data directory and record counts.
    Status,
}

#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense.
    Add {
        /// What the money went on
        title: String,
        /// Amount spent
        #[arg(long)]
        amount: f64,
        /// food, transport, utilities, entertainment, shopping or other
        #[arg(long, default_value = "other")]
        category: String,
    },
    /// List recorded expenses.
    List,
    /// Delete an expense by id.
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum InvestCommands {
    /// Record an investment.
    Add {
        /// Investment name (max 50 characters)
        name: String,
        /// Amount invested
        #[arg(long)]
        amount: f64,
        /// Expected returns percentage (-100 to 1000)
        #[arg(long)]
        returns: f64,
        /// stocks, mutual_funds, fixed_deposits, real_estate or crypto
        #[arg(long = "type", default_value = "stocks")]
        investment_type: String,
    },
    /// List holdings with projected values.
    List,
    /// Delete an investment by id.
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum CalcCommands {
    /// Equated monthly installment for a loan.
    Emi {
        /// Loan amount
        amount: f64,
        /// Annual interest rate (%)
        #[arg(long)]
        rate: f64,
        /// Loan tenure in years
        #[arg(long)]
        years: f64,
    },
    /// Future value of a systematic investment plan.
    Sip {
        /// Monthly investment amount
        amount: f64,
        /// Expected annual return (%)
        #[arg(long)]
        rate: f64,
        /// Investment period in years
        #[arg(long)]
        years: f64,
    },
}
