use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FinwellError;

/// Spending category for an expense record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Utilities,
    Entertainment,
    Shopping,
    Other,
}

impl ExpenseCategory {
    pub const ALL: &'static [ExpenseCategory] = &[
        Self::Food,
        Self::Transport,
        Self::Utilities,
        Self::Entertainment,
        Self::Shopping,
        Self::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = FinwellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "utilities" => Ok(Self::Utilities),
            "entertainment" => Ok(Self::Entertainment),
            "shopping" => Ok(Self::Shopping),
            "other" => Ok(Self::Other),
            other => Err(FinwellError::Validation(format!(
                "Unknown expense category: {other} (expected food, transport, utilities, entertainment, shopping or other)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentType {
    Stocks,
    MutualFunds,
    FixedDeposits,
    RealEstate,
    Crypto,
}

impl InvestmentType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stocks => "Stocks",
            Self::MutualFunds => "Mutual Funds",
            Self::FixedDeposits => "Fixed Deposits",
            Self::RealEstate => "Real Estate",
            Self::Crypto => "Crypto",
        }
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InvestmentType {
    type Err = FinwellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stocks" => Ok(Self::Stocks),
            "mutual_funds" => Ok(Self::MutualFunds),
            "fixed_deposits" => Ok(Self::FixedDeposits),
            "real_estate" => Ok(Self::RealEstate),
            "crypto" => Ok(Self::Crypto),
            other => Err(FinwellError::Validation(format!(
                "Unknown investment type: {other} (expected stocks, mutual_funds, fixed_deposits, real_estate or crypto)"
            ))),
        }
    }
}

/// A single expense. Immutable once created, except for deletion.
/// Older persisted data called the title `description` and carried no
/// timestamp; both shapes load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: i64,
    #[serde(alias = "description")]
    pub title: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// An investment holding. `projected_value` is frozen at insertion time;
/// totals always read the stored value back, never recompute it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentRecord {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    #[serde(rename = "returns")]
    pub returns_pct: f64,
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    #[serde(rename = "date")]
    pub created_at: String,
    #[serde(rename = "projectedValue")]
    pub projected_value: f64,
}

/// Best-known quiz score for a user. Points only ever go up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "id")]
    pub user_id: String,
    pub name: String,
    pub points: u32,
}
