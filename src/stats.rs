use std::hash::Hash;

use indexmap::IndexMap;

/// Summary of a store: total size, how many records satisfy a predicate,
/// and member counts per group in first-encounter order.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total: usize,
    pub matching: usize,
    pub groups: IndexMap<String, usize>,
    pub top_group: Option<(String, usize)>,
}

impl Statistics {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Count occurrences of each key, keeping the order keys were first seen.
pub fn count_groups<K, I>(keys: I) -> IndexMap<K, usize>
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
{
    let mut groups = IndexMap::new();
    for key in keys {
        *groups.entry(key).or_insert(0) += 1;
    }
    groups
}

/// Largest group. Ties go to the group encountered first.
pub fn max_group<K>(groups: &IndexMap<K, usize>) -> Option<(&K, usize)> {
    let mut best: Option<(&K, usize)> = None;
    for (key, &count) in groups {
        match best {
            Some((_, top)) if count <= top => {}
            _ => best = Some((key, count)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_keep_first_seen_order() {
        let groups = count_groups(["b", "a", "b", "c", "a", "b"]);
        let keys: Vec<_> = groups.keys().copied().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(groups["b"], 3);
        assert_eq!(groups["a"], 2);
    }

    #[test]
    fn max_group_prefers_first_on_tie() {
        let groups = count_groups(["x", "y", "y", "x", "z"]);
        assert_eq!(max_group(&groups), Some((&"x", 2)));
    }

    #[test]
    fn max_group_of_nothing_is_none() {
        let groups: IndexMap<&str, usize> = count_groups(Vec::new());
        assert!(groups.is_empty());
        assert_eq!(max_group(&groups), None);
    }
}
