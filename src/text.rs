//! Word statistics over free text.

use indexmap::IndexMap;
use regex::RegexBuilder;

use crate::error::{Error, Result};
use crate::stats::{count_groups, max_group};

#[derive(Debug, Clone, PartialEq)]
pub struct TextStats {
    pub word_count: usize,
    pub char_count: usize,
    pub char_count_without_spaces: usize,
    /// Token counts, in order of first appearance.
    pub frequencies: IndexMap<String, usize>,
    pub most_frequent: Option<(String, usize)>,
}

impl TextStats {
    /// The `n` most used words, highest count first. Equal counts keep
    /// first-appearance order.
    pub fn top_words(&self, n: usize) -> Vec<(&str, usize)> {
        let mut words: Vec<(&str, usize)> =
            self.frequencies.iter().map(|(w, &c)| (w.as_str(), c)).collect();
        words.sort_by(|a, b| b.1.cmp(&a.1));
        words.truncate(n);
        words
    }
}

/// Lowercase and drop everything except letters, digits and whitespace.
/// Accented letters count as letters.
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}

pub fn analyze(text: &str) -> Result<TextStats> {
    if text.trim().is_empty() {
        return Err(Error::EmptyInput("text"));
    }

    let normalized = normalize(text);
    let frequencies = count_groups(tokenize(&normalized).map(str::to_string));
    let word_count = frequencies.values().sum();
    let most_frequent = max_group(&frequencies).map(|(w, n)| (w.clone(), n));

    Ok(TextStats {
        word_count,
        char_count: text.chars().count(),
        char_count_without_spaces: text.chars().filter(|&c| c != ' ').count(),
        frequencies,
        most_frequent,
    })
}

/// Non-overlapping, case-insensitive occurrences of `phrase` in the raw text.
pub fn count_occurrences(text: &str, phrase: &str) -> usize {
    if phrase.trim().is_empty() {
        return 0;
    }
    match RegexBuilder::new(&regex::escape(phrase)).case_insensitive(true).build() {
        Ok(re) => re.find_iter(text).count(),
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_greeting() {
        let stats = analyze("Hola hola HOLA mundo").unwrap();
        assert_eq!(stats.word_count, 4);
        assert_eq!(stats.most_frequent, Some(("hola".to_string(), 3)));
        assert_eq!(stats.frequencies["mundo"], 1);
        assert_eq!(stats.char_count, 20);
        assert_eq!(stats.char_count_without_spaces, 17);
    }

    #[test]
    fn punctuation_is_stripped_but_accents_stay() {
        let stats = analyze("¡Qué día! ¿Qué tal, día?").unwrap();
        assert_eq!(stats.word_count, 5);
        assert_eq!(stats.frequencies["qué"], 2);
        assert_eq!(stats.frequencies["día"], 2);
        // tie goes to the first word seen
        assert_eq!(stats.most_frequent, Some(("qué".to_string(), 2)));
    }

    #[test]
    fn blank_input_is_rejected() {
        assert!(matches!(analyze(""), Err(Error::EmptyInput("text"))));
        assert!(matches!(analyze("  \t\n "), Err(Error::EmptyInput(_))));
    }

    #[test]
    fn punctuation_only_input_has_no_words() {
        let stats = analyze("!!! ...").unwrap();
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.most_frequent, None);
    }

    #[test]
    fn top_words_orders_by_count() {
        let stats = analyze("b a b c a b d").unwrap();
        assert_eq!(stats.top_words(3), vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn occurrences_ignore_case_and_escape_the_phrase() {
        assert_eq!(count_occurrences("El gato. EL perro. el", "el"), 3);
        assert_eq!(count_occurrences("a.b a-b a.b", "a.b"), 2);
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("texto", "  "), 0);
    }
}
