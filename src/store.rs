//! The in-memory record store shared by every exercise.
//!
//! A `RecordStore` is an ordered `Vec` of one record type. Records are
//! appended after validation and never reordered; sorted views are
//! separate `Vec<&R>` borrows. Queries return lazy iterators that can be
//! cloned to restart them.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::filter::{in_range, Order, TextQuery};
use crate::stats::{count_groups, max_group, Statistics};

/// A row in a `RecordStore`.
pub trait Record {
    /// Uniqueness key type. Stores without a key still name one (usually `str`).
    type Key: ?Sized + PartialEq + Display;

    /// Name used in logs.
    const KIND: &'static str;

    /// Field constraints checked before the record enters a store.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Unique key, if this record type has one.
    fn key(&self) -> Option<&Self::Key> {
        None
    }
}

/// Records carrying a single toggleable boolean (favorite, important).
pub trait Flagged: Record {
    fn flag(&self) -> bool;
    fn set_flag(&mut self, value: bool);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn get(&self, position: usize) -> Option<&R> {
        self.records.get(position)
    }

    pub fn last(&self) -> Option<&R> {
        self.records.last()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Validate and append. Nothing is stored when validation or the
    /// uniqueness check fails.
    pub fn insert(&mut self, record: R) -> Result<&R> {
        if let Err(e) = record.validate() {
            warn!(kind = R::KIND, error = %e, "record rejected");
            return Err(e);
        }

        if let Some(key) = record.key() {
            if self.position_of(key).is_some() {
                warn!(kind = R::KIND, %key, "duplicate key");
                return Err(Error::DuplicateKey(key.to_string()));
            }
        }

        let position = self.records.len();
        self.records.push(record);
        debug!(kind = R::KIND, position, "record inserted");
        Ok(&self.records[position])
    }

    pub fn find_by_key(&self, key: &R::Key) -> Option<&R> {
        self.position_of(key).map(|i| &self.records[i])
    }

    /// Replace the record sharing `record`'s key, keeping its position.
    pub fn update_by_key(&mut self, record: R) -> Result<&R> {
        record.validate()?;
        let position = {
            let key = record
                .key()
                .ok_or_else(|| Error::InvalidArgument(format!("{} records have no key", R::KIND)))?;
            self.position_of(key)
                .ok_or_else(|| Error::NotFound(key.to_string()))?
        };
        self.records[position] = record;
        debug!(kind = R::KIND, position, "record updated");
        Ok(&self.records[position])
    }

    /// Remove the record with this key. Keys are unique so at most one goes.
    pub fn delete_by_key(&mut self, key: &R::Key) -> Result<()> {
        let position = self
            .position_of(key)
            .ok_or_else(|| Error::NotFound(key.to_string()))?;
        self.records.remove(position);
        debug!(kind = R::KIND, %key, "record deleted");
        Ok(())
    }

    /// Records whose `field` contains `query`, ignoring case.
    pub fn find_containing<'a, F>(
        &'a self,
        field: F,
        query: &str,
    ) -> impl Iterator<Item = &'a R> + Clone + 'a
    where
        F: Fn(&R) -> &str + Clone + 'a,
    {
        let query = TextQuery::new(query);
        self.records.iter().filter(move |r| query.matches(field(*r)))
    }

    /// Records whose `field` lies in `lo..=hi`.
    pub fn find_in_range<'a, T, F>(
        &'a self,
        field: F,
        lo: T,
        hi: T,
    ) -> impl Iterator<Item = &'a R> + Clone + 'a
    where
        T: PartialOrd + Clone + 'a,
        F: Fn(&R) -> T + Clone + 'a,
    {
        self.records.iter().filter(move |r| in_range(&field(*r), &lo, &hi))
    }

    pub fn find_by<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a R> + Clone + 'a
    where
        P: Fn(&R) -> bool + Clone + 'a,
    {
        self.records.iter().filter(move |r| predicate(*r))
    }

    /// Stable sorted view. Ties keep insertion order in both directions.
    pub fn sorted_by<K, F>(&self, key: F, order: Order) -> Vec<&R>
    where
        K: Ord,
        F: Fn(&R) -> K,
    {
        let mut view: Vec<&R> = self.records.iter().collect();
        view.sort_by(|a, b| order.apply(key(*a).cmp(&key(*b))));
        view
    }

    /// Count everything, count matches, and group by `group_by`.
    pub fn aggregate<P, G>(&self, matching: P, group_by: G) -> Statistics
    where
        P: Fn(&R) -> bool,
        G: Fn(&R) -> &str,
    {
        let groups = count_groups(self.records.iter().map(|r| group_by(r).to_string()));
        let top_group = max_group(&groups).map(|(k, n)| (k.clone(), n));
        Statistics {
            total: self.records.len(),
            matching: self.records.iter().filter(|r| matching(*r)).count(),
            groups,
            top_group,
        }
    }

    fn position_of(&self, key: &R::Key) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.key().is_some_and(|k| k == key))
    }
}

impl<R: Flagged> RecordStore<R> {
    /// Flip the flag of the record with this key and return the new value.
    pub fn toggle_flag(&mut self, key: &R::Key) -> Result<bool> {
        let position = self
            .position_of(key)
            .ok_or_else(|| Error::NotFound(key.to_string()))?;
        Ok(self.flip(position))
    }

    /// Flip the flag of the record at `position` (for stores without keys).
    pub fn toggle_flag_at(&mut self, position: usize) -> Result<bool> {
        if position >= self.records.len() {
            return Err(Error::NotFound(format!("position {position}")));
        }
        Ok(self.flip(position))
    }

    fn flip(&mut self, position: usize) -> bool {
        let record = &mut self.records[position];
        let value = !record.flag();
        record.set_flag(value);
        debug!(kind = R::KIND, position, value, "flag toggled");
        value
    }
}

impl<'a, R> IntoIterator for &'a RecordStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        code: String,
        label: String,
        weight: u32,
        marked: bool,
    }

    fn item(code: &str, label: &str, weight: u32) -> Item {
        Item { code: code.into(), label: label.into(), weight, marked: false }
    }

    impl Record for Item {
        type Key = str;
        const KIND: &'static str = "item";

        fn validate(&self) -> Result<()> {
            if self.label.trim().is_empty() {
                return Err(Error::validation("label", "must not be empty"));
            }
            Ok(())
        }

        fn key(&self) -> Option<&str> {
            Some(&self.code)
        }
    }

    impl Flagged for Item {
        fn flag(&self) -> bool {
            self.marked
        }

        fn set_flag(&mut self, value: bool) {
            self.marked = value;
        }
    }

    fn sample() -> RecordStore<Item> {
        let mut store = RecordStore::new();
        store.insert(item("a", "Alpha", 3)).unwrap();
        store.insert(item("b", "beta", 1)).unwrap();
        store.insert(item("c", "Gamma", 3)).unwrap();
        store.insert(item("d", "alphabet", 2)).unwrap();
        store
    }

    #[test]
    fn insert_appends_in_order() {
        let store = sample();
        let codes: Vec<_> = store.iter().map(|i| i.code.as_str()).collect();
        assert_eq!(codes, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn every_record_is_found_by_its_own_field() {
        let store = sample();
        for record in &store {
            let found: Vec<_> = store.find_containing(|i| i.label.as_str(), &record.label).collect();
            assert!(found.contains(&record));
        }
    }

    #[test]
    fn search_is_case_insensitive_and_empty_matches_all() {
        let store = sample();
        let hits: Vec<_> = store
            .find_containing(|i| i.label.as_str(), "ALPHA")
            .map(|i| i.code.as_str())
            .collect();
        assert_eq!(hits, vec!["a", "d"]);
        assert_eq!(store.find_containing(|i| i.label.as_str(), "").count(), 4);
    }

    #[test]
    fn query_iterators_restart_when_cloned() {
        let store = sample();
        let hits = store.find_in_range(|i| i.weight, 2, 3);
        assert_eq!(hits.clone().count(), 3);
        assert_eq!(hits.count(), 3);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let store = sample();
        let hits: Vec<_> = store
            .find_in_range(|i| i.weight, 1, 2)
            .map(|i| i.code.as_str())
            .collect();
        assert_eq!(hits, vec!["b", "d"]);
    }

    #[test]
    fn duplicate_key_is_rejected_without_change() {
        let mut store = sample();
        let err = store.insert(item("b", "Other", 9)).unwrap_err();
        assert!(matches!(err, Error::DuplicateKey(ref k) if k == "b"));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn invalid_record_is_rejected() {
        let mut store = sample();
        let err = store.insert(item("z", "   ", 0)).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "label", .. }));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn sort_is_stable_for_constant_and_tied_keys() {
        let store = sample();
        let constant: Vec<_> = store.sorted_by(|_| 0, Order::Descending).iter().map(|i| i.code.clone()).collect();
        assert_eq!(constant, vec!["a", "b", "c", "d"]);

        let by_weight: Vec<_> = store
            .sorted_by(|i| i.weight, Order::Descending)
            .iter()
            .map(|i| i.code.clone())
            .collect();
        assert_eq!(by_weight, vec!["a", "c", "d", "b"]);
    }

    #[test]
    fn toggle_twice_restores_flag() {
        let mut store = sample();
        assert!(store.toggle_flag("c").unwrap());
        assert!(!store.toggle_flag("c").unwrap());
        assert!(!store.find_by_key("c").unwrap().marked);
    }

    #[test]
    fn toggle_unknown_key_or_position_fails() {
        let mut store = sample();
        assert!(matches!(store.toggle_flag("nope"), Err(Error::NotFound(_))));
        assert!(matches!(store.toggle_flag_at(4), Err(Error::NotFound(_))));
        assert!(store.toggle_flag_at(0).unwrap());
    }

    #[test]
    fn delete_missing_key_leaves_store_alone() {
        let mut store = sample();
        assert!(matches!(store.delete_by_key("zz"), Err(Error::NotFound(_))));
        assert_eq!(store.len(), 4);

        store.delete_by_key("b").unwrap();
        let codes: Vec<_> = store.iter().map(|i| i.code.as_str()).collect();
        assert_eq!(codes, vec!["a", "c", "d"]);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = sample();
        store.update_by_key(item("c", "Gamma prime", 7)).unwrap();
        assert_eq!(store.get(2).unwrap().label, "Gamma prime");
        assert!(matches!(store.update_by_key(item("q", "x", 1)), Err(Error::NotFound(_))));
    }

    #[test]
    fn aggregate_groups_and_picks_first_largest() {
        let store = sample();
        let stats = store.aggregate(|i| i.weight > 1, |i| if i.weight == 3 { "heavy" } else { "light" });
        assert_eq!(stats.total, 4);
        assert_eq!(stats.matching, 3);
        assert_eq!(stats.groups.len(), 2);
        // two of each, "heavy" was seen first
        assert_eq!(stats.top_group, Some(("heavy".to_string(), 2)));
    }

    #[test]
    fn aggregate_over_empty_store_has_no_maximum() {
        let store: RecordStore<Item> = RecordStore::new();
        let stats = store.aggregate(|_| true, |i| i.label.as_str());
        assert!(stats.is_empty());
        assert!(stats.groups.is_empty());
        assert_eq!(stats.top_group, None);
    }
}
