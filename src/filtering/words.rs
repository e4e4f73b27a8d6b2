//! Word count filter
use super::Filter;

/// Returns `false` if the text has less than [WordCount::min_words] whitespace separated words.
///
/// [WordCount::min_words] is 1 by default.
pub struct WordCount {
    min_words: usize,
}

impl WordCount {
    pub fn with_min_words(min_words: usize) -> Self {
        Self { min_words }
    }

    pub fn min_words(&self) -> usize {
        self.min_words
    }
}

impl Default for WordCount {
    fn default() -> Self {
        Self { min_words: 1 }
    }
}

impl Filter<&str> for WordCount {
    fn detect(&self, text: &str) -> bool {
        text.split_whitespace().count() >= self.min_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_needs_one_word() {
        let f = WordCount::default();
        assert!(f.detect("word"));
        assert!(!f.detect("   "));
    }

    #[test]
    fn threshold_is_inclusive() {
        let f = WordCount::with_min_words(3);
        assert!(f.detect("one two\tthree"));
        assert!(!f.detect("one two"));
    }
}
