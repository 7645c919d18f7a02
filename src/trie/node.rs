use hashbrown::HashMap;

/// A compact representation of the children of a [`TrieNode`] that doesn't hash
/// until there are at least three children.
///
/// Inline variants keep their letters in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum Children {
    /// No children.
    #[default]
    None,
    /// Exactly one child (letter, node).
    One(char, Box<TrieNode>),
    /// Exactly two children (letter1, node1, letter2, node2), `letter1 < letter2`.
    Two(char, Box<TrieNode>, char, Box<TrieNode>),
    /// Three or more children, keyed by letter.
    Many(HashMap<char, TrieNode>),
}

impl Children {
    /// Returns new `Children` with an additional edge.
    ///
    /// Panics in debug builds if `letter` already exists.
    fn with_added_child(self, letter: char, child: TrieNode) -> Children {
        match self {
            Children::None => Children::One(letter, Box::new(child)),
            Children::One(c1, n1) => {
                debug_assert!(c1 != letter, "with_added_child: letter already exists");
                if letter < c1 {
                    Children::Two(letter, Box::new(child), c1, n1)
                } else {
                    Children::Two(c1, n1, letter, Box::new(child))
                }
            }
            Children::Two(c1, n1, c2, n2) => {
                debug_assert!(
                    c1 != letter && c2 != letter,
                    "with_added_child: letter already exists"
                );
                let mut children = HashMap::with_capacity(4);
                children.insert(c1, *n1);
                children.insert(c2, *n2);
                children.insert(letter, child);
                Children::Many(children)
            }
            Children::Many(mut children) => {
                let previous = children.insert(letter, child);
                debug_assert!(previous.is_none(), "with_added_child: letter already exists");
                Children::Many(children)
            }
        }
    }
}

/// A node in the prefix tree.
///
/// The root represents the empty string; every other node represents the letter
/// on the edge leading to it. Each node exclusively owns its children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrieNode {
    children: Children,
    word: bool,
}

impl TrieNode {
    /// Returns the node that letter's edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(&self, letter: char) -> Option<&TrieNode> {
        match &self.children {
            Children::None => None,
            Children::One(ch, node) => (*ch == letter).then_some(&**node),
            Children::Two(c1, n1, c2, n2) => {
                if letter == *c1 {
                    Some(&**n1)
                } else if letter == *c2 {
                    Some(&**n2)
                } else {
                    None
                }
            }
            Children::Many(children) => children.get(&letter),
        }
    }

    #[inline]
    fn get_mut(&mut self, letter: char) -> Option<&mut TrieNode> {
        match &mut self.children {
            Children::None => None,
            Children::One(ch, node) => (*ch == letter).then_some(&mut **node),
            Children::Two(c1, n1, c2, n2) => {
                if letter == *c1 {
                    Some(&mut **n1)
                } else if letter == *c2 {
                    Some(&mut **n2)
                } else {
                    None
                }
            }
            Children::Many(children) => children.get_mut(&letter),
        }
    }

    /// Returns the child for `letter`, creating an empty non-word child first if
    /// the edge doesn't exist. The flag tells whether a node was created.
    pub(crate) fn get_or_insert(&mut self, letter: char) -> (&mut TrieNode, bool) {
        let created = self.get(letter).is_none();
        if created {
            let children = std::mem::take(&mut self.children);
            self.children = children.with_added_child(letter, TrieNode::default());
        }
        let child = self
            .get_mut(letter)
            .expect("Child exists after get_or_insert");
        (child, created)
    }

    /// Follows `path` letter by letter. Returns None as soon as an edge is missing.
    #[inline]
    pub fn descend(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(self, |node, ch| node.get(ch))
    }

    /// True if the path to this node spells a word that was inserted.
    #[inline]
    pub fn is_word(&self) -> bool {
        self.word
    }

    /// Marks this node as the end of a word. Returns false if it already was.
    pub(crate) fn mark_word(&mut self) -> bool {
        !std::mem::replace(&mut self.word, true)
    }
}
