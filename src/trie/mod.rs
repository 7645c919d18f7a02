/// Trie node and the compact child storage behind it.
pub mod node;
/// The prefix tree with word and prefix queries.
pub mod tree;

pub use node::TrieNode;
pub use tree::Trie;
