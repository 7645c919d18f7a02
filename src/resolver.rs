//! Breadth-first search for the longest compound word.
//!
//! A compound word is a word from the list that splits into two or more other
//! words from the same list. The search runs in two phases:
//!
//! 1. **Ingest.** Each word is checked against the trie as it stood *before* the
//!    word was inserted, so a word can never be its own first part. Every word
//!    prefix found seeds a work item `(word, rest)`, then the word is inserted.
//! 2. **Resolve.** Work items are taken strictly first in, first out. If the rest
//!    is a word, the word is compound. Otherwise every word prefix of the rest
//!    queues a new item with a shorter rest; items that match nothing are dropped.
//!
//! The first part of a decomposition must therefore appear earlier in the input
//! than the compound itself, while later parts may be any word in the list. On
//! sorted input this finds the longest compound word overall.
//!
//! Ties on length go to the first compound confirmed during resolution.

use std::collections::VecDeque;
use std::fmt;
use std::io::BufRead;

use hashbrown::HashSet;
use tracing::{debug, trace};

use crate::error::Error;
use crate::source::read_words;
use crate::trie::Trie;

/// A decomposition hypothesis: the word at `word` has had one or more word
/// prefixes stripped, leaving `word[suffix..]` to be matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pair {
    /// Index into the ingested words.
    word: usize,
    /// Byte offset where the unmatched rest starts.
    suffix: usize,
}

/// Counters collected over one resolver run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Words ingested, duplicates included.
    pub words: usize,
    /// Distinct work items queued across both phases.
    pub pairs_enqueued: usize,
    /// Work items taken off the queue.
    pub pairs_processed: usize,
    /// Distinct ingested words confirmed to be compound.
    pub compounds: usize,
    /// Largest queue length seen.
    pub peak_worklist: usize,
}

impl fmt::Display for ResolveStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "words: {}, compounds: {}, pairs enqueued: {}, pairs processed: {}, peak worklist: {}",
            self.words, self.compounds, self.pairs_enqueued, self.pairs_processed, self.peak_worklist
        )
    }
}

/// The outcome of a resolver run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The longest compound word, or `None` if the list has none.
    pub longest: Option<String>,
    /// Counters for the run.
    pub stats: ResolveStats,
}

impl Resolution {
    /// The longest compound word, or the empty string if there is none.
    pub fn longest(&self) -> &str {
        self.longest.as_deref().unwrap_or_default()
    }
}

/// FIFO queue of work items that keeps its own counters.
///
/// Each `(word, offset)` pair is queued at most once, so a word of `n` bytes
/// contributes at most `n` items no matter how many ways its prefixes split.
#[derive(Debug, Default)]
struct Worklist {
    queue: VecDeque<Pair>,
    seen: HashSet<(usize, usize)>,
    enqueued: usize,
    peak: usize,
}

impl Worklist {
    fn push(&mut self, pair: Pair) {
        if !self.seen.insert((pair.word, pair.suffix)) {
            return;
        }
        self.queue.push_back(pair);
        self.enqueued += 1;
        self.peak = self.peak.max(self.queue.len());
    }

    fn pop(&mut self) -> Option<Pair> {
        self.queue.pop_front()
    }
}

/// Incremental compound word search.
///
/// Feed words with [`ingest`](Resolver::ingest) in input order, then call
/// [`resolve`](Resolver::resolve) once.
///
/// # Examples
///
/// ```
/// use compound_words::Resolver;
///
/// let mut resolver = Resolver::new();
/// for word in ["cat", "cats", "dog", "catsdog"] {
///     resolver.ingest(word);
/// }
/// let resolution = resolver.resolve();
/// assert_eq!(resolution.longest(), "catsdog");
/// assert_eq!(resolution.stats.words, 4);
/// ```
#[derive(Debug, Default)]
pub struct Resolver {
    trie: Trie,
    words: Vec<String>,
    worklist: Worklist,
}

impl Resolver {
    /// Creates a resolver with an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingests the next word of the input.
    ///
    /// The word's prefixes are looked up before it is inserted, so only words
    /// ingested earlier can be its first part.
    pub fn ingest(&mut self, word: impl Into<String>) {
        let word = word.into();
        let index = self.words.len();
        for end in self.trie.prefix_ends(&word) {
            self.worklist.push(Pair {
                word: index,
                suffix: end,
            });
        }
        self.trie.insert(word.as_str());
        self.words.push(word);
    }

    /// The trie built from the words ingested so far.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Number of words ingested so far, duplicates included.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Drains the worklist and returns the longest compound word.
    pub fn resolve(mut self) -> Resolution {
        debug!(
            words = self.words.len(),
            distinct = self.trie.len(),
            nodes = self.trie.node_count(),
            seeded = self.worklist.queue.len(),
            "ingested word list"
        );

        let mut stats = ResolveStats {
            words: self.words.len(),
            ..ResolveStats::default()
        };
        // Once a word is confirmed, its other pairs can't change the result.
        let mut confirmed = vec![false; self.words.len()];
        let mut best: Option<(usize, usize)> = None;

        while let Some(pair) = self.worklist.pop() {
            stats.pairs_processed += 1;
            if confirmed[pair.word] {
                continue;
            }
            let word = &self.words[pair.word];
            let rest = &word[pair.suffix..];
            if self.trie.exists(rest) {
                confirmed[pair.word] = true;
                stats.compounds += 1;
                let len = word.chars().count();
                trace!(word = %word, len, "confirmed compound word");
                if best.is_none_or(|(_, best_len)| len > best_len) {
                    trace!(word = %word, len, "new longest compound word");
                    best = Some((pair.word, len));
                }
            } else {
                for end in self.trie.prefix_ends(rest) {
                    self.worklist.push(Pair {
                        word: pair.word,
                        suffix: pair.suffix + end,
                    });
                }
            }
        }

        stats.pairs_enqueued = self.worklist.enqueued;
        stats.peak_worklist = self.worklist.peak;
        let longest = best.map(|(index, _)| std::mem::take(&mut self.words[index]));
        debug!(
            compounds = stats.compounds,
            processed = stats.pairs_processed,
            peak = stats.peak_worklist,
            longest = longest.as_deref().unwrap_or_default(),
            "resolved worklist"
        );
        Resolution { longest, stats }
    }
}

/// Returns the longest word in `words` made up of two or more other words in
/// the list, or the empty string if there is none.
///
/// # Examples
///
/// ```
/// use compound_words::find_longest_compound_word;
///
/// assert_eq!(find_longest_compound_word(["rat", "cat", "dog", "ratcatdog"]), "ratcatdog");
/// assert_eq!(find_longest_compound_word(["cat", "dog", "bird"]), "");
/// ```
pub fn find_longest_compound_word<I, W>(words: I) -> String
where
    I: IntoIterator<Item = W>,
    W: Into<String>,
{
    let mut resolver = Resolver::new();
    for word in words {
        resolver.ingest(word);
    }
    resolver.resolve().longest.unwrap_or_default()
}

/// Reads a word list, one word per line, and resolves it.
///
/// See [`read_words`] for how lines are turned into words.
pub fn find_longest_compound_word_in<R: BufRead>(reader: R) -> Result<Resolution, Error> {
    let mut resolver = Resolver::new();
    for word in read_words(reader) {
        resolver.ingest(word?);
    }
    Ok(resolver.resolve())
}
