use smallvec::SmallVec;

use super::node::TrieNode;

/// A prefix tree that grows one word at a time.
///
/// No suffixes are shared: every node is reachable by exactly one path and owned
/// by its parent, so words can be inserted in any order.
/// Queries run in time proportional to the length of the queried word,
/// independent of how many words have been inserted.
///
/// # Examples
///
/// ```
/// use compound_words::trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("cat");
/// trie.insert("cats");
///
/// assert!(trie.exists("cat"));
/// assert!(!trie.exists("ca"));
/// assert_eq!(trie.prefixes_of("catsup"), ["cat", "cats"]);
/// ```
#[derive(Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
    node_count: usize,
}

impl Trie {
    /// Creates an empty trie holding only the root node.
    pub fn new() -> Self {
        Trie {
            root: TrieNode::default(),
            len: 0,
            node_count: 1,
        }
    }

    /// Inserts a word, creating any missing nodes along its path.
    ///
    /// Returns `true` if the word was not present before. Inserting a word twice
    /// is harmless and leaves the trie unchanged.
    ///
    /// The empty word is accepted and marks the root itself as a word.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for ch in word.chars() {
            let (child, created) = node.get_or_insert(ch);
            self.node_count += created as usize;
            node = child;
        }
        let added = node.mark_word();
        self.len += added as usize;
        added
    }

    /// Returns true if exactly this word was inserted.
    ///
    /// A path that exists only as the prefix of a longer word doesn't count.
    #[inline]
    pub fn exists(&self, word: &str) -> bool {
        self.root.descend(word).is_some_and(TrieNode::is_word)
    }

    /// Returns every prefix of `word` that is itself a word, shortest first.
    ///
    /// The walk stops where the path leaves the tree, so longer prefixes are never
    /// reported once a letter is missing. The empty prefix is never reported, even
    /// if the empty word was inserted. The returned slices borrow from `word`.
    pub fn prefixes_of<'w>(&self, word: &'w str) -> Vec<&'w str> {
        self.prefix_ends(word)
            .into_iter()
            .map(|end| &word[..end])
            .collect()
    }

    /// Byte offsets just past every word prefix of `word`, in increasing order.
    pub(crate) fn prefix_ends(&self, word: &str) -> SmallVec<[usize; 8]> {
        let mut ends = SmallVec::new();
        let mut node = &self.root;
        for (i, ch) in word.char_indices() {
            match node.get(ch) {
                Some(child) => node = child,
                None => break,
            }
            if node.is_word() {
                ends.push(i + ch.len_utf8());
            }
        }
        ends
    }

    /// Returns the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: AsRef<str>> Extend<W> for Trie {
    fn extend<T: IntoIterator<Item = W>>(&mut self, words: T) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<W: AsRef<str>> FromIterator<W> for Trie {
    fn from_iter<T: IntoIterator<Item = W>>(words: T) -> Self {
        let mut trie = Trie::new();
        trie.extend(words);
        trie
    }
}

impl std::fmt::Debug for Trie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trie")
            .field("len", &self.len)
            .field("node_count", &self.node_count)
            .finish()
    }
}
