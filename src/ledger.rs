use chrono::Utc;

use crate::error::{FinwellError, Result};
use crate::models::{ExpenseCategory, ExpenseRecord, InvestmentRecord, InvestmentType};
use crate::storage::Storage;

pub const EXPENSES_KEY: &str = "expenses";
pub const INVESTMENTS_KEY: &str = "investments";

/// A full, self-consistent read of both ledger collections at one instant.
/// The derivation layer only ever sees one of these.
pub struct Snapshot<'a> {
    pub expenses: &'a [ExpenseRecord],
    pub investments: &'a [InvestmentRecord],
}

/// Owns the expense and investment collections. Every mutation is validated
/// first, applied, then written through to storage, so an external reader
/// always observes the latest state.
pub struct LedgerStore<S: Storage> {
    storage: S,
    expenses: Vec<ExpenseRecord>,
    investments: Vec<InvestmentRecord>,
}

fn parse_collection<T: serde::de::DeserializeOwned>(storage: &impl Storage, key: &str) -> Vec<T> {
    match storage.read(key) {
        Ok(Some(content)) => serde_json::from_str(&content).unwrap_or_else(|e| {
            eprintln!("Warning: ignoring malformed {key} data: {e}");
            Vec::new()
        }),
        Ok(None) => Vec::new(),
        Err(e) => {
            eprintln!("Warning: could not read {key}: {e}");
            Vec::new()
        }
    }
}

impl<S: Storage> LedgerStore<S> {
    /// Reconstruct the ledger from storage. Missing or malformed data
    /// yields empty collections, never an error.
    pub fn load(storage: S) -> Self {
        let expenses = parse_collection(&storage, EXPENSES_KEY);
        let investments = parse_collection(&storage, INVESTMENTS_KEY);
        Self { storage, expenses, investments }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            expenses: &self.expenses,
            investments: &self.investments,
        }
    }

    pub fn add_expense(
        &mut self,
        title: &str,
        amount: f64,
        category: ExpenseCategory,
    ) -> Result<ExpenseRecord> {
        let title = title.trim();
        if title.is_empty() {
            return Err(FinwellError::Validation("Please enter a description".to_string()));
        }
        if amount <= 0.0 {
            return Err(FinwellError::Validation("Please enter a valid amount".to_string()));
        }

        let record = ExpenseRecord {
            id: next_id(self.expenses.last().map(|e| e.id)),
            title: title.to_string(),
            amount,
            category,
            created_at: Utc::now().to_rfc3339(),
        };
        self.expenses.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    /// No-op when the id is absent; deleting twice is not an error.
    pub fn delete_expense(&mut self, id: i64) -> Result<()> {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        if self.expenses.len() != before {
            self.persist()?;
        }
        Ok(())
    }

    pub fn add_investment(
        &mut self,
        name: &str,
        amount: f64,
        returns_pct: f64,
        investment_type: InvestmentType,
    ) -> Result<InvestmentRecord> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FinwellError::Validation("Please enter investment name".to_string()));
        }
        if name.chars().count() > 50 {
            return Err(FinwellError::Validation(
                "Investment name must be 50 characters or fewer".to_string(),
            ));
        }
        if amount <= 0.0 {
            return Err(FinwellError::Validation("Please enter a valid amount".to_string()));
        }
        if !(-100.0..=1000.0).contains(&returns_pct) {
            return Err(FinwellError::Validation(
                "Please enter valid returns percentage (-100 to 1000)".to_string(),
            ));
        }

        let record = InvestmentRecord {
            id: next_id(self.investments.last().map(|i| i.id)),
            name: name.to_string(),
            amount,
            returns_pct,
            investment_type,
            created_at: Utc::now().to_rfc3339(),
            // Frozen here; later edits to returns in storage must not move it.
            projected_value: amount * (1.0 + returns_pct / 100.0),
        };
        self.investments.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    pub fn delete_investment(&mut self, id: i64) -> Result<()> {
        let before = self.investments.len();
        self.investments.retain(|i| i.id != id);
        if self.investments.len() != before {
            self.persist()?;
        }
        Ok(())
    }

    /// Whole-snapshot overwrite of both storage keys.
    pub fn persist(&mut self) -> Result<()> {
        let expenses = serde_json::to_string_pretty(&self.expenses)?;
        let investments = serde_json::to_string_pretty(&self.investments)?;
        self.storage.write(EXPENSES_KEY, &expenses)?;
        self.storage.write(INVESTMENTS_KEY, &investments)?;
        Ok(())
    }
}

/// Creation-timestamp ids, bumped past the previous id so two records
/// created within the same millisecond still get distinct increasing ids.
fn next_id(last: Option<i64>) -> i64 {
    let now = Utc::now().timestamp_millis();
    match last {
        Some(prev) if now <= prev => prev + 1,
        _ => now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> LedgerStore<MemoryStorage> {
        LedgerStore::load(MemoryStorage::new())
    }

    #[test]
    fn test_add_expense_validates_input() {
        let mut s = store();
        assert!(s.add_expense("", 10.0, ExpenseCategory::Food).is_err());
        assert!(s.add_expense("   ", 10.0, ExpenseCategory::Food).is_err());
        assert!(s.add_expense("Lunch", 0.0, ExpenseCategory::Food).is_err());
        assert!(s.add_expense("Lunch", -5.0, ExpenseCategory::Food).is_err());
        assert!(s.snapshot().expenses.is_empty(), "store must be unchanged after rejects");
    }

    #[test]
    fn test_add_expense_assigns_increasing_ids() {
        let mut s = store();
        let a = s.add_expense("Lunch", 120.0, ExpenseCategory::Food).unwrap();
        let b = s.add_expense("Bus", 30.0, ExpenseCategory::Transport).unwrap();
        let c = s.add_expense("Movie", 250.0, ExpenseCategory::Entertainment).unwrap();
        assert!(a.id < b.id && b.id < c.id);
    }

    #[test]
    fn test_delete_missing_expense_is_noop() {
        let mut s = store();
        s.add_expense("Lunch", 120.0, ExpenseCategory::Food).unwrap();
        s.delete_expense(42).unwrap();
        assert_eq!(s.snapshot().expenses.len(), 1);
    }

    #[test]
    fn test_delete_expense_removes_record() {
        let mut s = store();
        let rec = s.add_expense("Lunch", 120.0, ExpenseCategory::Food).unwrap();
        s.delete_expense(rec.id).unwrap();
        assert!(s.snapshot().expenses.is_empty());
        // A second delete of the same id is still fine.
        s.delete_expense(rec.id).unwrap();
    }

    #[test]
    fn test_returns_pct_boundaries() {
        let mut s = store();
        assert!(s
            .add_investment("X", 100.0, -100.0, InvestmentType::Stocks)
            .is_ok());
        assert!(s
            .add_investment("X", 100.0, -100.01, InvestmentType::Stocks)
            .is_err());
        assert!(s
            .add_investment("X", 100.0, 1000.0, InvestmentType::Stocks)
            .is_ok());
        assert!(s
            .add_investment("X", 100.0, 1000.5, InvestmentType::Stocks)
            .is_err());
    }

    #[test]
    fn test_investment_name_length_limit() {
        let mut s = store();
        let long = "x".repeat(51);
        assert!(s.add_investment(&long, 100.0, 5.0, InvestmentType::Crypto).is_err());
        let ok = "x".repeat(50);
        assert!(s.add_investment(&ok, 100.0, 5.0, InvestmentType::Crypto).is_ok());
    }

    #[test]
    fn test_projected_value_frozen_at_insert() {
        let mut s = store();
        let rec = s
            .add_investment("Index fund", 100000.0, 10.0, InvestmentType::MutualFunds)
            .unwrap();
        assert_eq!(rec.projected_value, 110000.0);
        // returnsPct = -100 projects to zero, not negative
        let wiped = s
            .add_investment("Bad bet", 500.0, -100.0, InvestmentType::Crypto)
            .unwrap();
        assert_eq!(wiped.projected_value, 0.0);
    }

    #[test]
    fn test_editing_returns_in_storage_keeps_stored_projection() {
        let mut storage = MemoryStorage::new();
        {
            let mut s = LedgerStore::load(std::mem::take(&mut storage));
            s.add_investment("Index fund", 1000.0, 10.0, InvestmentType::Stocks)
                .unwrap();
            storage = s.storage;
        }
        // Edit returns directly in the stored JSON without touching projectedValue.
        let raw = storage.read(INVESTMENTS_KEY).unwrap().unwrap();
        let mut doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        doc[0]["returns"] = serde_json::json!(50.0);
        storage
            .write(INVESTMENTS_KEY, &doc.to_string())
            .unwrap();

        let s = LedgerStore::load(storage);
        let snap = s.snapshot();
        assert_eq!(snap.investments[0].returns_pct, 50.0);
        assert_eq!(snap.investments[0].projected_value, 1100.0);
    }

    #[test]
    fn test_load_keeps_legacy_expense_records() {
        let mut storage = MemoryStorage::new();
        storage
            .write(
                EXPENSES_KEY,
                r#"[{"id": 1700000000000, "description": "Chai", "amount": 40.0, "category": "food"}]"#,
            )
            .unwrap();
        let s = LedgerStore::load(storage);
        let snap = s.snapshot();
        assert_eq!(snap.expenses.len(), 1);
        assert_eq!(snap.expenses[0].title, "Chai");
    }

    #[test]
    fn test_load_tolerates_malformed_storage() {
        let mut storage = MemoryStorage::new();
        storage.write(EXPENSES_KEY, "{not json").unwrap();
        storage.write(INVESTMENTS_KEY, "42").unwrap();
        let s = LedgerStore::load(storage);
        assert!(s.snapshot().expenses.is_empty());
        assert!(s.snapshot().investments.is_empty());
    }

    #[test]
    fn test_persist_load_round_trip_is_idempotent() {
        let mut storage = MemoryStorage::new();
        {
            let mut s = LedgerStore::load(std::mem::take(&mut storage));
            s.add_expense("Lunch", 120.0, ExpenseCategory::Food).unwrap();
            s.add_investment("Gold", 2000.0, 8.0, InvestmentType::FixedDeposits)
                .unwrap();
            storage = s.storage;
        }
        let first = storage.read(EXPENSES_KEY).unwrap().unwrap();
        let mut s = LedgerStore::load(storage);
        s.persist().unwrap();
        let second = s.storage.read(EXPENSES_KEY).unwrap().unwrap();
        assert_eq!(first, second);
    }
}
