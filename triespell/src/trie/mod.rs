//! Character-indexed prefix tree holding the vocabulary.
use hashbrown::HashMap;

pub mod matcher;

pub use self::matcher::ApproximateMatcher;

/// A single node of the prefix tree.
///
/// Each node exclusively owns its children. A node has no identity beyond its
/// position in the tree.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    pub(crate) children: HashMap<char, TrieNode>,
    pub(crate) is_end_of_word: bool,
}

impl TrieNode {
    /// Whether the path from the root to this node spells a stored word.
    #[inline(always)]
    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    /// The child reached through `ch`, if any.
    #[inline(always)]
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Iterates over `(edge character, child)` pairs in no particular order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(ch, node)| (*ch, node))
    }

    fn node_count(&self) -> usize {
        1 + self.children.values().map(TrieNode::node_count).sum::<usize>()
    }
}

/// Prefix tree over `char`s.
///
/// Built through [`Trie::insert`], queried through `&self`.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Trie {
        Trie::default()
    }

    /// Adds `word`, creating nodes along its path as needed.
    ///
    /// Inserting a word that is already present has no effect. The trie does
    /// not normalize its input; see [`crate::tokenizer::normalize_word`].
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;

        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }

        if !node.is_end_of_word {
            node.is_end_of_word = true;
            self.len += 1;
        }
    }

    /// Returns `true` iff `word` was inserted.
    pub fn search(&self, word: &str) -> bool {
        self.walk(word).map_or(false, TrieNode::is_end_of_word)
    }

    /// Returns `true` iff some stored word starts with `prefix`.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Number of distinct stored words.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no word has been inserted.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// The node representing the empty prefix.
    #[inline(always)]
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Every stored word, in lexicographic order.
    pub fn words(&self) -> Words<'_> {
        Words::new(&self.root)
    }

    fn walk(&self, word: &str) -> Option<&TrieNode> {
        let mut node = &self.root;

        for ch in word.chars() {
            node = node.child(ch)?;
        }

        Some(node)
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

/// Iterator over the words of a [`Trie`], see [`Trie::words`].
pub struct Words<'a> {
    // (node, depth of node, edge char that led to it)
    stack: Vec<(&'a TrieNode, usize, Option<char>)>,
    path: String,
    depth: usize,
}

impl<'a> Words<'a> {
    fn new(root: &'a TrieNode) -> Words<'a> {
        Words {
            stack: vec![(root, 0, None)],
            path: String::new(),
            depth: 0,
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((node, depth, ch)) = self.stack.pop() {
            while self.depth > depth {
                self.path.pop();
                self.depth -= 1;
            }

            if let Some(ch) = ch {
                self.path.push(ch);
                self.depth += 1;
            }

            let depth = self.depth;
            let mut children = node.children().collect::<Vec<_>>();
            children.sort_unstable_by(|a, b| b.0.cmp(&a.0));
            self.stack
                .extend(children.into_iter().map(|(ch, n)| (n, depth, Some(ch))));

            if node.is_end_of_word {
                return Some(self.path.clone());
            }
        }

        None
    }
}
