//! Spell checking on top of a [`Trie`].
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::dictionary::{load_dictionary, DictionaryError};
use crate::speller::suggestion::Suggestion;
use crate::trie::{ApproximateMatcher, Trie};

pub mod suggestion;

/// Tuning for suggestion lookups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellerConfig {
    /// largest edit distance a suggestion may have
    pub max_distance: usize,
    /// count a swap of two adjacent characters as one edit
    pub transpositions: bool,
}

impl SpellerConfig {
    /// The default configuration: plain Levenshtein distance up to 2.
    pub const fn default() -> SpellerConfig {
        SpellerConfig {
            max_distance: 2,
            transpositions: false,
        }
    }
}

impl Default for SpellerConfig {
    fn default() -> Self {
        SpellerConfig::default()
    }
}

/// Spell checking interface shared by the front ends.
pub trait Speller {
    /// Whether `word` is in the dictionary.
    fn is_correct(self: Arc<Self>, word: &str) -> bool;
    /// Corrections for `word` using [`SpellerConfig::default`].
    fn suggest(self: Arc<Self>, word: &str) -> Vec<Suggestion>;
    /// Corrections for `word`. Empty if `word` is itself correct.
    fn suggest_with_config(self: Arc<Self>, word: &str, config: &SpellerConfig) -> Vec<Suggestion>;
}

/// [`Speller`] backed by an in-memory [`Trie`].
#[derive(Debug)]
pub struct TrieSpeller {
    trie: Trie,
}

impl TrieSpeller {
    /// Wraps a fully built trie.
    pub fn new(trie: Trie) -> Arc<TrieSpeller> {
        Arc::new(TrieSpeller { trie })
    }

    /// Loads a word list, one word per line.
    pub fn open(path: &Path) -> Result<Arc<TrieSpeller>, DictionaryError> {
        load_dictionary(path).map(TrieSpeller::new)
    }

    /// The underlying dictionary.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Every stored word within the configured distance of `word`, ordered by
    /// value. Unlike [`Speller::suggest_with_config`] this keeps `word` itself
    /// when it is stored.
    pub fn nearest(&self, word: &str, config: &SpellerConfig) -> Vec<Suggestion> {
        let mut suggestions = ApproximateMatcher::new(&self.trie, word, config.max_distance)
            .with_transpositions(config.transpositions)
            .suggestions();
        suggestions.sort();
        suggestions
    }
}

impl Speller for TrieSpeller {
    #[inline]
    fn is_correct(self: Arc<Self>, word: &str) -> bool {
        self.trie.search(word)
    }

    #[inline]
    fn suggest(self: Arc<Self>, word: &str) -> Vec<Suggestion> {
        self.suggest_with_config(word, &SpellerConfig::default())
    }

    fn suggest_with_config(self: Arc<Self>, word: &str, config: &SpellerConfig) -> Vec<Suggestion> {
        if self.trie.search(word) {
            return vec![];
        }

        self.nearest(word, config)
    }
}
