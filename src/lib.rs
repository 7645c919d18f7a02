//! # compound-words
//!
//! Finds the longest *compound word* in a word list: a word that splits completely
//! into two or more other words from the same list.
//!
//! Two pieces do the work:
//!
//! - a [prefix tree](trie::Trie) answering "is this a word?" and "which prefixes of
//!   this string are words?" in time proportional to the query length, and
//! - a [breadth-first resolver](resolver) that peels word prefixes off each
//!   candidate until the remainder is itself a word.
//!
//! ## Quick Start
//!
//! ```
//! use compound_words::find_longest_compound_word;
//!
//! let words = ["cat", "cats", "dog", "catsdog"];
//! assert_eq!(find_longest_compound_word(words), "catsdog");
//! ```
//!
//! Reading a list with one word per line:
//!
//! ```
//! use compound_words::find_longest_compound_word_in;
//!
//! let list = "rat\ncat\ndog\nratcatdog\n";
//! let resolution = find_longest_compound_word_in(list.as_bytes()).unwrap();
//! assert_eq!(resolution.longest(), "ratcatdog");
//! ```

#![warn(missing_docs)]

/// Errors from reading word lists.
pub mod error;
/// Compound word search over a growing trie.
pub mod resolver;
/// Line-oriented word list input.
pub mod source;
/// Prefix tree over `char` letters.
pub mod trie;

pub use error::Error;
pub use resolver::{
    find_longest_compound_word, find_longest_compound_word_in, Resolution, ResolveStats, Resolver,
};
pub use trie::{Trie, TrieNode};
