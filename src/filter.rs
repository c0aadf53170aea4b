use std::cmp::Ordering;

/// Direction of a sorted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    /// Orient an ascending comparison. Equal elements stay `Equal` in both
    /// directions so a stable sort keeps insertion order for ties.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Order::Ascending => ordering,
            Order::Descending => ordering.reverse(),
        }
    }
}

/// Case-insensitive substring test.
/// An empty needle matches everything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Inclusive range test. Bounds given in the wrong order match nothing.
pub fn in_range<T: PartialOrd>(value: &T, lo: &T, hi: &T) -> bool {
    lo <= value && value <= hi
}

/// Reusable text query, lowered once so scanning a store does not
/// re-lowercase the needle for every record.
#[derive(Debug, Clone)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    pub fn new(query: &str) -> Self {
        Self { needle: query.to_lowercase() }
    }

    pub fn matches(&self, haystack: &str) -> bool {
        contains_ci(haystack, &self.needle)
    }
}
