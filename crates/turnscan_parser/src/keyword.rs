//! Keyword matching for the rule definition vocabulary.
//!
//! Vocabulary words are written with their mandatory part in uppercase:
//! `PLAYerscore` accepts `play`, `player` and `playerscore`, but not `pla`.

/// How definition-file keywords are compared against the vocabulary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeywordMatching {
    /// Any case-insensitive prefix at least as long as the uppercase part.
    #[default]
    Abbreviated,
    /// The full word, case-insensitively.
    Exact,
}

impl KeywordMatching {
    /// Checks `input` against one vocabulary word.
    #[must_use]
    pub fn matches(self, input: &str, word: &str) -> bool {
        match self {
            Self::Exact => input.eq_ignore_ascii_case(word),
            Self::Abbreviated => {
                let required = word.chars().take_while(char::is_ascii_uppercase).count();
                let len = input.chars().count();
                len >= required.max(1)
                    && len <= word.chars().count()
                    && input
                        .chars()
                        .zip(word.chars())
                        .all(|(a, b)| a.eq_ignore_ascii_case(&b))
            }
        }
    }

    /// Finds the first table entry whose word matches `input`.
    #[must_use]
    pub fn lookup<T: Copy>(self, input: &str, table: &[(&str, T)]) -> Option<T> {
        let input = input.trim();
        table
            .iter()
            .find(|(word, _)| self.matches(input, word))
            .map(|(_, value)| *value)
    }
}
