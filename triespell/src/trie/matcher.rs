//! Edit-distance search over a [`Trie`].
//!
//! The matcher walks the trie depth first, carrying one row of the
//! Levenshtein table per node: `row[j]` is the distance between the path
//! spelled so far and the first `j` characters of the query. A child's row is
//! derived from its parent's row before descending, and a subtree is skipped
//! as soon as every entry of its row exceeds the distance bound.
use hashbrown::HashSet;
use smol_str::SmolStr;

use super::{Trie, TrieNode};
use crate::speller::suggestion::Suggestion;

/// Finds every stored word within a fixed edit distance of a query word.
#[derive(Debug, Clone)]
pub struct ApproximateMatcher<'t> {
    trie: &'t Trie,
    input: Vec<char>,
    max_distance: usize,
    transpositions: bool,
}

struct SearchState {
    path: String,
    found: Vec<Suggestion>,
    visited: usize,
    pruned: usize,
}

impl<'t> ApproximateMatcher<'t> {
    /// Creates a matcher for `word` accepting distances up to `max_distance`.
    pub fn new(trie: &'t Trie, word: &str, max_distance: usize) -> ApproximateMatcher<'t> {
        ApproximateMatcher {
            trie,
            input: word.chars().collect(),
            max_distance,
            transpositions: false,
        }
    }

    /// Counts a swap of two adjacent characters as a single edit.
    pub fn with_transpositions(mut self, transpositions: bool) -> ApproximateMatcher<'t> {
        self.transpositions = transpositions;
        self
    }

    /// Distinct stored words within the distance bound.
    pub fn suggest(&self) -> HashSet<SmolStr> {
        self.suggestions().into_iter().map(|s| s.value).collect()
    }

    /// Stored words within the distance bound along with their distance.
    ///
    /// Every trie path spells a different word, so the result holds no
    /// duplicates. Its order is unspecified.
    pub fn suggestions(&self) -> Vec<Suggestion> {
        log::trace!(
            "Beginning suggest for {:?}, max distance {}",
            self.input.iter().collect::<String>(),
            self.max_distance
        );

        let root = self.trie.root();
        let row = (0..=self.input.len()).collect::<Vec<usize>>();
        let mut state = SearchState {
            path: String::new(),
            found: vec![],
            visited: 1,
            pruned: 0,
        };

        if root.is_end_of_word() && row[self.input.len()] <= self.max_distance {
            state
                .found
                .push(Suggestion::new(SmolStr::default(), row[self.input.len()]));
        }

        self.descend(root, None, &row, None, &mut state);

        log::trace!(
            "Visited {} nodes, pruned {} subtrees, found {}",
            state.visited,
            state.pruned,
            state.found.len()
        );

        state.found
    }

    /// Visits the children of `node`. `ch` is the character leading into
    /// `node` and `grandparent` is the row of its parent, both only needed
    /// for transpositions.
    fn descend(
        &self,
        node: &TrieNode,
        ch: Option<char>,
        row: &[usize],
        grandparent: Option<&[usize]>,
        state: &mut SearchState,
    ) {
        let last = self.input.len();

        for (next_ch, child) in node.children() {
            state.visited += 1;
            let child_row = self.next_row(next_ch, ch, row, grandparent);

            if child_row.iter().all(|d| *d > self.max_distance) {
                state.pruned += 1;
                continue;
            }

            state.path.push(next_ch);

            if child.is_end_of_word() && child_row[last] <= self.max_distance {
                state
                    .found
                    .push(Suggestion::new(SmolStr::new(&state.path), child_row[last]));
            }

            self.descend(child, Some(next_ch), &child_row, Some(row), state);
            state.path.pop();
        }
    }

    #[inline(always)]
    fn next_row(
        &self,
        ch: char,
        prev: Option<char>,
        parent: &[usize],
        grandparent: Option<&[usize]>,
    ) -> Vec<usize> {
        let mut row = Vec::with_capacity(parent.len());
        row.push(parent[0] + 1);

        for j in 1..parent.len() {
            let cost = usize::from(self.input[j - 1] != ch);
            let mut distance = (row[j - 1] + 1)
                .min(parent[j] + 1)
                .min(parent[j - 1] + cost);

            if self.transpositions && j > 1 {
                if let (Some(prev), Some(grandparent)) = (prev, grandparent) {
                    if ch == self.input[j - 2] && prev == self.input[j - 1] {
                        distance = distance.min(grandparent[j - 2] + 1);
                    }
                }
            }

            row.push(distance);
        }

        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Trie {
        ["cat", "cart", "cats", "dog"].iter().collect()
    }

    fn set(words: &[&str]) -> HashSet<SmolStr> {
        words.iter().map(SmolStr::new).collect()
    }

    fn suggest(trie: &Trie, word: &str, max_distance: usize) -> HashSet<SmolStr> {
        ApproximateMatcher::new(trie, word, max_distance).suggest()
    }

    const WORDS: &[&str] = &[
        "a", "ab", "abc", "abs", "ac", "act", "bat", "bath", "baths", "cab", "car", "care",
        "cared", "cart", "cat", "cats", "coat", "cot", "dog", "dot", "ebb", "ea", "tac", "taco",
        "über", "uber",
    ];

    const QUERIES: &[&str] = &[
        "", "a", "b", "ba", "cta", "tca", "caer", "crat", "bahts", "xyz", "ubre", "ueber",
        "dgo", "tac", "abcd", "eab", "abracadabra",
    ];

    #[test]
    fn vocabulary_examples() {
        let trie = vocabulary();
        assert_eq!(suggest(&trie, "cap", 1), set(&["cat"]));
        assert_eq!(suggest(&trie, "cot", 1), set(&["cat"]));
        assert_eq!(suggest(&trie, "xyz", 2), set(&[]));
        assert_eq!(suggest(&trie, "cas", 1), set(&["cat", "cats"]));
        assert_eq!(suggest(&trie, "cas", 2), set(&["cat", "cats", "cart"]));
        assert_eq!(suggest(&trie, "dot", 2), set(&["dog", "cat"]));
    }

    #[test]
    fn distances_are_reported() {
        let trie = vocabulary();
        let mut found = ApproximateMatcher::new(&trie, "cas", 2).suggestions();
        found.sort();

        let found = found
            .iter()
            .map(|s| (s.value(), s.distance()))
            .collect::<Vec<_>>();
        assert_eq!(found, vec![("cart", 2), ("cat", 1), ("cats", 1)]);
    }

    #[test]
    fn zero_distance_is_exact_search() {
        let trie: Trie = WORDS.iter().collect();

        for query in WORDS.iter().chain(QUERIES) {
            let expected = if trie.search(query) {
                set(&[*query])
            } else {
                set(&[])
            };
            assert_eq!(suggest(&trie, query, 0), expected, "query {:?}", query);
        }
    }

    #[test]
    fn matches_reference_levenshtein() {
        let trie: Trie = WORDS.iter().collect();

        for max_distance in 0..=3 {
            for query in WORDS.iter().chain(QUERIES) {
                let expected = WORDS
                    .iter()
                    .filter(|w| strsim::levenshtein(query, w) <= max_distance)
                    .map(SmolStr::new)
                    .collect::<HashSet<_>>();

                assert_eq!(
                    suggest(&trie, query, max_distance),
                    expected,
                    "query {:?} within {}",
                    query,
                    max_distance
                );
            }
        }
    }

    #[test]
    fn matches_reference_osa_with_transpositions() {
        let trie: Trie = WORDS.iter().collect();

        for max_distance in 0..=3 {
            for query in WORDS.iter().chain(QUERIES) {
                let mut expected = WORDS
                    .iter()
                    .map(|w| (SmolStr::new(w), strsim::osa_distance(query, w)))
                    .filter(|(_, d)| *d <= max_distance)
                    .collect::<Vec<_>>();
                expected.sort();

                let mut found = ApproximateMatcher::new(&trie, query, max_distance)
                    .with_transpositions(true)
                    .suggestions()
                    .into_iter()
                    .map(|s| (s.value, s.distance))
                    .collect::<Vec<_>>();
                found.sort();

                assert_eq!(found, expected, "query {:?} within {}", query, max_distance);
            }
        }
    }

    #[test]
    fn transpositions_are_opt_in() {
        let trie = vocabulary();
        assert_eq!(suggest(&trie, "act", 1), set(&[]));
        assert_eq!(
            ApproximateMatcher::new(&trie, "act", 1)
                .with_transpositions(true)
                .suggest(),
            set(&["cat"])
        );
    }

    #[test]
    fn empty_query() {
        let mut trie = vocabulary();
        assert_eq!(suggest(&trie, "", 2), set(&[]));
        assert_eq!(suggest(&trie, "", 3), set(&["cat", "dog"]));

        trie.insert("");
        trie.insert("a");
        assert_eq!(suggest(&trie, "", 0), set(&[""]));
        assert_eq!(suggest(&trie, "", 1), set(&["", "a"]));
    }

    #[test]
    fn empty_vocabulary() {
        let trie = Trie::new();
        for query in QUERIES {
            assert!(suggest(&trie, query, 0).is_empty());
            assert!(suggest(&trie, query, 5).is_empty());
        }
    }

    #[test]
    fn long_words() {
        let long = "ab".repeat(512);
        let mut typo = long.clone();
        typo.replace_range(500..501, "x");

        let trie: Trie = [long.as_str(), "ab"].iter().collect();
        assert!(trie.search(&long));
        assert_eq!(suggest(&trie, &typo, 1), set(&[long.as_str()]));
        assert_eq!(suggest(&trie, &typo, 0), set(&[]));
    }
}
