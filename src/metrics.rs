//! Pure derivations over a ledger snapshot. Nothing here mutates or
//! persists; callers re-derive whenever they need fresh numbers.

use crate::ledger::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreStatus {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl ScoreStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Metrics {
    pub total_expenses: f64,
    pub total_investment: f64,
    pub projected_total: f64,
    pub financial_score: i64,
    pub score_status: ScoreStatus,
    pub portfolio_growth: f64,
}

pub fn derive(snapshot: &Snapshot<'_>) -> Metrics {
    let score = financial_score(snapshot);
    Metrics {
        total_expenses: total_expenses(snapshot),
        total_investment: total_investment(snapshot),
        projected_total: projected_total(snapshot),
        financial_score: score,
        score_status: score_status(score),
        portfolio_growth: portfolio_growth(snapshot),
    }
}

pub fn total_expenses(snapshot: &Snapshot<'_>) -> f64 {
    snapshot.expenses.iter().map(|e| e.amount).sum()
}

pub fn total_investment(snapshot: &Snapshot<'_>) -> f64 {
    snapshot.investments.iter().map(|i| i.amount).sum()
}

/// Sum of the projected values frozen at insertion time.
pub fn projected_total(snapshot: &Snapshot<'_>) -> f64 {
    snapshot.investments.iter().map(|i| i.projected_value).sum()
}

/// 500 base + 30 per holding + 1 per 1,000 invested (amount part capped
/// at 100), the whole thing capped at 800.
pub fn financial_score(snapshot: &Snapshot<'_>) -> i64 {
    let count = snapshot.investments.len() as f64;
    let total = total_investment(snapshot);
    let raw = 500.0 + count * 30.0 + (total / 1000.0).min(100.0);
    raw.min(800.0).round() as i64
}

/// Thresholds are user-visible; exclusive lower bounds as listed.
pub fn score_status(score: i64) -> ScoreStatus {
    if score > 750 {
        ScoreStatus::Excellent
    } else if score > 650 {
        ScoreStatus::Good
    } else if score > 500 {
        ScoreStatus::Fair
    } else {
        ScoreStatus::NeedsImprovement
    }
}

/// Mean expected return across holdings, 0 for an empty portfolio.
pub fn portfolio_growth(snapshot: &Snapshot<'_>) -> f64 {
    if snapshot.investments.is_empty() {
        return 0.0;
    }
    let sum: f64 = snapshot.investments.iter().map(|i| i.returns_pct).sum();
    sum / snapshot.investments.len() as f64
}

/// Projected values in creation order; input for the forecast fit.
pub fn forecast_series(snapshot: &Snapshot<'_>) -> Vec<f64> {
    snapshot.investments.iter().map(|i| i.projected_value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerStore;
    use crate::models::{ExpenseCategory, InvestmentType};
    use crate::storage::MemoryStorage;

    fn empty_store() -> LedgerStore<MemoryStorage> {
        LedgerStore::load(MemoryStorage::new())
    }

    #[test]
    fn test_empty_ledger_scores_500_needs_improvement() {
        let s = empty_store();
        let m = derive(&s.snapshot());
        assert_eq!(m.financial_score, 500);
        assert_eq!(m.score_status, ScoreStatus::NeedsImprovement);
        assert_eq!(m.total_expenses, 0.0);
        assert_eq!(m.total_investment, 0.0);
        assert_eq!(m.projected_total, 0.0);
        assert_eq!(m.portfolio_growth, 0.0);
    }

    #[test]
    fn test_single_large_investment_scores_fair() {
        let mut s = empty_store();
        s.add_investment("Index fund", 100000.0, 10.0, InvestmentType::MutualFunds)
            .unwrap();
        let m = derive(&s.snapshot());
        assert_eq!(m.total_investment, 100000.0);
        assert_eq!(m.projected_total, 110000.0);
        // min(800, 500 + 30 + min(100, 100)) = 630
        assert_eq!(m.financial_score, 630);
        assert_eq!(m.score_status, ScoreStatus::Fair);
    }

    #[test]
    fn test_score_caps_at_800() {
        let mut s = empty_store();
        for i in 0..12 {
            s.add_investment(&format!("Fund {i}"), 500000.0, 5.0, InvestmentType::Stocks)
                .unwrap();
        }
        // 500 + 12*30 + 100 = 960, capped
        assert_eq!(financial_score(&s.snapshot()), 800);
    }

    #[test]
    fn test_score_status_thresholds_are_exclusive_lower() {
        assert_eq!(score_status(750), ScoreStatus::Good);
        assert_eq!(score_status(751), ScoreStatus::Excellent);
        assert_eq!(score_status(650), ScoreStatus::Fair);
        assert_eq!(score_status(651), ScoreStatus::Good);
        assert_eq!(score_status(500), ScoreStatus::NeedsImprovement);
        assert_eq!(score_status(501), ScoreStatus::Fair);
    }

    #[test]
    fn test_totals_sum_expenses_and_investments() {
        let mut s = empty_store();
        s.add_expense("Lunch", 120.0, ExpenseCategory::Food).unwrap();
        s.add_expense("Bus", 30.0, ExpenseCategory::Transport).unwrap();
        s.add_investment("Gold", 2000.0, 8.0, InvestmentType::FixedDeposits)
            .unwrap();
        let m = derive(&s.snapshot());
        assert_eq!(m.total_expenses, 150.0);
        assert_eq!(m.total_investment, 2000.0);
        assert_eq!(m.projected_total, 2160.0);
    }

    #[test]
    fn test_portfolio_growth_is_mean_of_returns() {
        let mut s = empty_store();
        s.add_investment("A", 100.0, 10.0, InvestmentType::Stocks).unwrap();
        s.add_investment("B", 100.0, -4.0, InvestmentType::Crypto).unwrap();
        assert_eq!(portfolio_growth(&s.snapshot()), 3.0);
    }

    #[test]
    fn test_forecast_series_follows_creation_order() {
        let mut s = empty_store();
        s.add_investment("A", 100.0, 10.0, InvestmentType::Stocks).unwrap();
        s.add_investment("B", 200.0, 0.0, InvestmentType::Stocks).unwrap();
        assert_eq!(forecast_series(&s.snapshot()), vec![110.0, 200.0]);
    }
}
