use rand::Rng;

use crate::cli::open_ledger;
use crate::error::Result;
use crate::models::{ExpenseCategory, InvestmentType};

struct DemoExpense {
    title: &'static str,
    amount: f64,
    category: ExpenseCategory,
}

const EXPENSES: &[DemoExpense] = &[
    DemoExpense { title: "Groceries", amount: 2450.0, category: ExpenseCategory::Food },
    DemoExpense { title: "Metro card top-up", amount: 500.0, category: ExpenseCategory::Transport },
    DemoExpense { title: "Electricity bill", amount: 1320.0, category: ExpenseCategory::Utilities },
    DemoExpense { title: "Movie night", amount: 650.0, category: ExpenseCategory::Entertainment },
    DemoExpense { title: "Running shoes", amount: 3200.0, category: ExpenseCategory::Shopping },
    DemoExpense { title: "Dinner out", amount: 1100.0, category: ExpenseCategory::Food },
    DemoExpense { title: "Mobile recharge", amount: 299.0, category: ExpenseCategory::Utilities },
];

struct DemoInvestment {
    name: &'static str,
    amount: f64,
    returns_pct: f64,
    investment_type: InvestmentType,
}

const INVESTMENTS: &[DemoInvestment] = &[
    DemoInvestment { name: "Nifty index fund", amount: 25000.0, returns_pct: 12.0, investment_type: InvestmentType::MutualFunds },
    DemoInvestment { name: "Blue-chip stocks", amount: 40000.0, returns_pct: 15.0, investment_type: InvestmentType::Stocks },
    DemoInvestment { name: "Bank FD", amount: 50000.0, returns_pct: 7.1, investment_type: InvestmentType::FixedDeposits },
    DemoInvestment { name: "REIT units", amount: 15000.0, returns_pct: 9.5, investment_type: InvestmentType::RealEstate },
    DemoInvestment { name: "Bitcoin", amount: 8000.0, returns_pct: -12.0, investment_type: InvestmentType::Crypto },
];

/// Seed sample data. Amounts are jittered a little so repeat demos do not
/// look identical.
pub fn run() -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut ledger = open_ledger();

    for e in EXPENSES {
        let jitter = rng.gen_range(0.9..1.1);
        ledger.add_expense(e.title, (e.amount * jitter).round(), e.category)?;
    }
    for i in INVESTMENTS {
        let jitter = rng.gen_range(0.95..1.05);
        ledger.add_investment(
            i.name,
            (i.amount * jitter).round(),
            i.returns_pct,
            i.investment_type,
        )?;
    }

    println!(
        "Loaded {} sample expenses and {} sample investments.",
        EXPENSES.len(),
        INVESTMENTS.len()
    );
    println!("Try `finwell dashboard`, then `finwell forecast`.");
    Ok(())
}
