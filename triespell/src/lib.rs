/*! Dictionary lookup and spelling suggestions over a prefix tree.

Words are stored in a [`Trie`](trie::Trie). Exact lookups follow a single
path; corrections are found by [`ApproximateMatcher`](trie::ApproximateMatcher),
which walks the tree once and carries a row of the edit-distance table down
each branch, abandoning branches that can no longer come within the bound.

# Usage examples

```
use triespell::speller::{Speller, TrieSpeller};
use triespell::trie::Trie;

let trie: Trie = ["cat", "cart", "cats", "dog"].iter().collect();
let speller = TrieSpeller::new(trie);

assert!(speller.clone().is_correct("cat"));

let suggestions = speller.suggest("cas");
let values: Vec<&str> = suggestions.iter().map(|s| s.value()).collect();
assert_eq!(values, vec!["cart", "cat", "cats"]);
```

Word lists are loaded with [`dictionary::load_dictionary`]. The
`triespell-bin` crate in the same repository wraps all of this in a CLI.
*/

#![warn(missing_docs)]
pub mod dictionary;
pub mod speller;
pub mod tokenizer;
pub mod trie;
