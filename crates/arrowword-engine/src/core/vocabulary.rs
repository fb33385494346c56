use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use unicode_normalization::{UnicodeNormalization as _, char::is_combining_mark};

/// Shortest word the generator accepts.
pub const MIN_WORD_LEN: usize = 2;

/// Longest word accepted by the default (high-density) board variant.
pub const DEFAULT_MAX_WORD_LEN: usize = 8;

/// Converts a word into its placement key.
///
/// The word is uppercased, canonically decomposed and stripped of combining
/// marks, so `"Café"` becomes `"CAFE"` and `"niño"` becomes `"NINO"`.
/// Applying it twice gives the same result as applying it once.
///
/// ```
/// use arrowword_engine::normalize;
///
/// assert_eq!(normalize("árbol"), "ARBOL");
/// assert_eq!(normalize(&normalize("pingüino")), normalize("pingüino"));
/// ```
#[must_use]
pub fn normalize(word: &str) -> String {
    word.trim()
        .to_uppercase()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect()
}

/// Raw vocabulary record as supplied by an external source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    #[serde(alias = "palabra")]
    pub word: String,
    #[serde(alias = "traduccion_ingles")]
    pub translation: String,
}

impl VocabularyEntry {
    #[must_use]
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
        }
    }
}

/// A placement-ready vocabulary word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyWord {
    /// The word as supplied, accents included.
    pub display: String,
    /// Uppercase, diacritic-free form written onto the board.
    pub normalized: String,
    /// Clue text shown in the clue cell.
    pub hint: String,
}

impl VocabularyWord {
    /// Number of board cells the word occupies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.normalized.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Normalized, filtered word list handed to the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<VocabularyWord>,
}

impl Vocabulary {
    /// Normalizes `entries` and keeps only those usable on a board.
    ///
    /// An entry is dropped when its normalized form is shorter than
    /// [`MIN_WORD_LEN`], longer than `max_word_len`, contains anything other
    /// than letters, or repeats a word seen earlier in the list.
    pub fn from_entries<I>(entries: I, max_word_len: usize) -> Self
    where
        I: IntoIterator<Item = VocabularyEntry>,
    {
        let mut seen = HashSet::new();
        let mut words = vec![];
        let mut skipped = 0_usize;
        for VocabularyEntry { word, translation } in entries {
            let normalized = normalize(&word);
            let len = normalized.chars().count();
            let usable = (MIN_WORD_LEN..=max_word_len).contains(&len)
                && normalized.chars().all(char::is_alphabetic);
            if !usable || !seen.insert(normalized.clone()) {
                skipped += 1;
                continue;
            }
            words.push(VocabularyWord {
                display: word.trim().to_owned(),
                normalized,
                hint: translation.trim().to_owned(),
            });
        }
        if skipped > 0 {
            tracing::debug!(kept = words.len(), skipped, "filtered vocabulary");
        }
        Self { words }
    }

    #[must_use]
    pub fn words(&self) -> &[VocabularyWord] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<VocabularyEntry> for Vocabulary {
    fn from_iter<T: IntoIterator<Item = VocabularyEntry>>(iter: T) -> Self {
        Self::from_entries(iter, DEFAULT_MAX_WORD_LEN)
    }
}
