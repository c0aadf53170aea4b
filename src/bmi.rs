use crate::error::Result;
use crate::model::{BmiCategory, BmiEntry};
use crate::stats::Statistics;
use crate::store::RecordStore;

/// Append-only measurement history.
#[derive(Debug, Clone, Default)]
pub struct BmiTracker {
    history: RecordStore<BmiEntry>,
}

impl BmiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, weight_kg: f64, height_m: f64) -> Result<&BmiEntry> {
        let entry = BmiEntry::measure(weight_kg, height_m)?;
        self.history.insert(entry)
    }

    pub fn history(&self) -> &RecordStore<BmiEntry> {
        &self.history
    }

    /// Weight change between the last two entries.
    pub fn weight_trend(&self) -> Option<f64> {
        let n = self.history.len();
        if n < 2 {
            return None;
        }
        let last = self.history.get(n - 1)?;
        let previous = self.history.get(n - 2)?;
        Some(last.weight_kg - previous.weight_kg)
    }

    /// Every entry paired with its weight change against the entry before it.
    pub fn changes(&self) -> Vec<(&BmiEntry, Option<f64>)> {
        let mut previous: Option<f64> = None;
        self.history
            .iter()
            .map(|entry| {
                let delta = previous.map(|p| entry.weight_kg - p);
                previous = Some(entry.weight_kg);
                (entry, delta)
            })
            .collect()
    }

    pub fn in_category(&self, category: BmiCategory) -> Vec<&BmiEntry> {
        self.history.find_by(move |e| e.category == category).collect()
    }

    /// Entries per category; `matching` counts normal-weight entries.
    pub fn summary(&self) -> Statistics {
        self.history
            .aggregate(|e| e.category == BmiCategory::Normal, |e| e.category.label())
    }
}
