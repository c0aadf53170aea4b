//! Expense ledger: the data core of the expense-tracking app.
//!
//! Ids are handed out by the ledger and never reused, also across a
//! snapshot/restore cycle. Updates keep the original date.

use std::path::Path;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::filter::Order;
use crate::model::{Expense, DEFAULT_CATEGORY};
use crate::notes::{local_now, Clock};
use crate::parser::parse_decimal;
use crate::stats::Statistics;
use crate::storage;
use crate::store::RecordStore;

#[derive(Serialize, Deserialize, Debug)]
struct Snapshot {
    next_id: u32,
    expenses: RecordStore<Expense>,
}

#[derive(Debug, Clone)]
pub struct ExpenseLedger {
    expenses: RecordStore<Expense>,
    next_id: u32,
    clock: Clock,
}

impl Default for ExpenseLedger {
    fn default() -> Self {
        Self::with_clock(local_now)
    }
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self { expenses: RecordStore::new(), next_id: 1, clock }
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// `amount` is the raw text typed by the user.
    pub fn add(&mut self, title: &str, amount: &str, observations: &str) -> Result<&Expense> {
        let following = self.next_id.checked_add(1).ok_or_else(id_space_exhausted)?;
        let expense = Expense {
            id: self.next_id,
            title: title.trim().to_string(),
            amount: parse_decimal(amount)?,
            category: DEFAULT_CATEGORY.to_string(),
            date: (self.clock)(),
            observations: observations.trim().to_string(),
        };
        let stored = self.expenses.insert(expense)?;
        self.next_id = following;
        Ok(stored)
    }

    /// Edit title, amount and observations. Date and category stay.
    pub fn update(&mut self, id: u32, title: &str, amount: &str, observations: &str) -> Result<&Expense> {
        let current = self
            .expenses
            .find_by_key(&id)
            .ok_or_else(|| Error::NotFound(format!("expense {id}")))?;
        let updated = Expense {
            id,
            title: title.trim().to_string(),
            amount: parse_decimal(amount)?,
            category: current.category.clone(),
            date: current.date,
            observations: observations.trim().to_string(),
        };
        self.expenses.update_by_key(updated)
    }

    pub fn delete(&mut self, id: u32) -> Result<()> {
        self.expenses.delete_by_key(&id)
    }

    pub fn get(&self, id: u32) -> Option<&Expense> {
        self.expenses.find_by_key(&id)
    }

    /// Newest first.
    pub fn list(&self) -> Vec<&Expense> {
        self.expenses.sorted_by(|e| e.id, Order::Descending)
    }

    pub fn largest_first(&self) -> Vec<&Expense> {
        self.expenses.sorted_by(|e| OrderedFloat(e.amount), Order::Descending)
    }

    pub fn search(&self, text: &str) -> Vec<&Expense> {
        self.expenses.find_containing(|e| e.title.as_str(), text).collect()
    }

    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Expenses per category; `matching` counts the ones with observations.
    pub fn by_category(&self) -> Statistics {
        self.expenses
            .aggregate(|e| !e.observations.is_empty(), |e| e.category.as_str())
    }

    pub fn snapshot(&self) -> Result<Vec<u8>> {
        let snapshot = Snapshot { next_id: self.next_id, expenses: self.expenses.clone() };
        Ok(serde_json::to_vec(&snapshot)?)
    }

    /// Replace the ledger contents with a snapshot.
    pub fn restore(&mut self, data: &[u8]) -> Result<()> {
        let snapshot: Snapshot = serde_json::from_slice(data)?;
        self.install(snapshot)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let snapshot = SnapshotRef { next_id: self.next_id, expenses: &self.expenses };
        storage::write_snapshot(path, &snapshot)
    }

    /// Open the ledger stored at `path`, or an empty one if there is none yet.
    pub fn load(path: &Path, clock: Clock) -> Result<Self> {
        let mut ledger = Self::with_clock(clock);
        if let Some(snapshot) = storage::read_snapshot::<Snapshot>(path)? {
            ledger.install(snapshot)?;
        }
        Ok(ledger)
    }

    fn install(&mut self, snapshot: Snapshot) -> Result<()> {
        let mut expenses = RecordStore::new();
        for expense in snapshot.expenses.iter().cloned() {
            expenses.insert(expense)?;
        }
        let after_last = match expenses.iter().map(|e| e.id).max() {
            Some(id) => id.checked_add(1).ok_or_else(id_space_exhausted)?,
            None => 1,
        };
        self.next_id = snapshot.next_id.max(after_last);
        self.expenses = expenses;
        info!(count = self.expenses.len(), next_id = self.next_id, "ledger restored");
        Ok(())
    }
}

fn id_space_exhausted() -> Error {
    Error::InvalidArgument("expense id space exhausted".to_string())
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    next_id: u32,
    expenses: &'a RecordStore<Expense>,
}
