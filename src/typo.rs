//! Synthetic typo generation
//!
//! Applies one randomly chosen corruption to a text unit per call. All edits
//! work on char boundaries so multi-byte Cyrillic text never gets torn.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lowercase Cyrillic alphabet (33 letters, а-я plus ё) used for inserted
/// and substituted characters
pub const ALPHABET: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

/// The family of corruption operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypoKind {
    /// Remove the first space, if any
    RemoveSpace,
    /// Insert a space at a random position
    InsertSpace,
    /// Delete the character at a random position
    DeleteChar,
    /// Insert a random alphabet letter at a random position
    InsertChar,
    /// Replace the character at a random position with a random letter
    ReplaceChar,
}

impl TypoKind {
    /// Get all operations
    pub fn all() -> &'static [TypoKind] {
        &[
            TypoKind::RemoveSpace,
            TypoKind::InsertSpace,
            TypoKind::DeleteChar,
            TypoKind::InsertChar,
            TypoKind::ReplaceChar,
        ]
    }
}

/// Generator applying one random corruption per call
pub struct TypoGenerator<R: Rng> {
    rng: R,
    alphabet: Vec<char>,
}

impl TypoGenerator<StdRng> {
    /// Create a generator seeded for reproducible output
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> TypoGenerator<R> {
    /// Create a generator over the given random source
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            alphabet: ALPHABET.chars().collect(),
        }
    }

    /// Replace the letter alphabet (test injection)
    pub fn with_alphabet(mut self, alphabet: &str) -> Self {
        self.alphabet = alphabet.chars().collect();
        self
    }

    /// Corrupt a text unit with one randomly chosen operation.
    /// Empty input is returned unchanged.
    pub fn make_typo(&mut self, query: &str) -> String {
        if query.is_empty() {
            return query.to_string();
        }
        let kinds = TypoKind::all();
        let kind = kinds[self.rng.random_range(0..kinds.len())];
        match kind {
            TypoKind::RemoveSpace => remove_space(query),
            TypoKind::InsertSpace => self.insert_space(query),
            TypoKind::DeleteChar => self.delete_char(query),
            TypoKind::InsertChar => self.insert_char(query),
            TypoKind::ReplaceChar => self.replace_char(query),
        }
    }

    fn insert_space(&mut self, query: &str) -> String {
        let mut chars: Vec<char> = query.chars().collect();
        let idx = self.rng.random_range(0..=chars.len());
        chars.insert(idx, ' ');
        chars.into_iter().collect()
    }

    // caller guarantees non-empty input
    fn delete_char(&mut self, query: &str) -> String {
        let mut chars: Vec<char> = query.chars().collect();
        let idx = self.rng.random_range(0..chars.len());
        chars.remove(idx);
        chars.into_iter().collect()
    }

    fn insert_char(&mut self, query: &str) -> String {
        let mut chars: Vec<char> = query.chars().collect();
        let idx = self.rng.random_range(0..=chars.len());
        let letter = self.random_letter();
        chars.insert(idx, letter);
        chars.into_iter().collect()
    }

    fn replace_char(&mut self, query: &str) -> String {
        let mut chars: Vec<char> = query.chars().collect();
        let idx = self.rng.random_range(0..chars.len());
        chars[idx] = self.random_letter();
        chars.into_iter().collect()
    }

    fn random_letter(&mut self) -> char {
        self.alphabet[self.rng.random_range(0..self.alphabet.len())]
    }
}

/// Remove the first space scanning left to right; no-op when none exists
fn remove_space(query: &str) -> String {
    match query.find(' ') {
        Some(idx) => {
            let mut out = query.to_string();
            out.remove(idx);
            out
        }
        None => query.to_string(),
    }
}
