use crate::error::{Error, Result};

pub const ALPHABET_SIZE: usize = 26;
pub const DEFAULT_MAX_WORD_LEN: usize = 100;

/// One prefix position in a [`Trie`]. Children are indexed by `letter - b'a'`.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    weight: f64,
    is_word: bool,
}

impl TrieNode {
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Raw insertion count, or a score in [0, 1] once the trie is normalized.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn child(&self, letter: u8) -> Option<&TrieNode> {
        if !letter.is_ascii_lowercase() {
            return None;
        }
        self.children[(letter - b'a') as usize].as_deref()
    }

    /// Present children in a..z order.
    pub fn children(&self) -> impl Iterator<Item = (u8, &TrieNode)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(idx, child)| child.as_deref().map(|node| (b'a' + idx as u8, node)))
    }

    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    pub(crate) fn children_mut(&mut self) -> impl Iterator<Item = &mut TrieNode> {
        self.children.iter_mut().filter_map(|child| child.as_deref_mut())
    }
}

/// 26-way prefix tree over lowercase ASCII words carrying a frequency weight
/// on every word-ending node.
#[derive(Debug, Clone)]
pub struct Trie {
    root: TrieNode,
    max_word_len: usize,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self::with_max_word_len(DEFAULT_MAX_WORD_LEN)
    }

    pub fn with_max_word_len(max_word_len: usize) -> Self {
        Trie {
            root: TrieNode::default(),
            max_word_len,
            words: 0,
        }
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut TrieNode {
        &mut self.root
    }

    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Counts one occurrence of `word`. Empty input is a no-op.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        self.insert_with_count(word, 1.0)
    }

    /// Adds `count` to the weight of `word`, creating its path if missing.
    /// The word is validated before any node is created.
    pub fn insert_with_count(&mut self, word: &str, count: f64) -> Result<()> {
        if word.is_empty() {
            return Ok(());
        }
        if word.len() > self.max_word_len {
            return Err(Error::WordTooLong {
                len: word.len(),
                max: self.max_word_len,
            });
        }
        check_letters(word)?;

        let mut node = &mut self.root;
        for &b in word.as_bytes() {
            node = node.children[(b - b'a') as usize]
                .get_or_insert_with(Box::default)
                .as_mut();
        }
        if !node.is_word {
            node.is_word = true;
            self.words += 1;
        }
        node.weight += count;
        Ok(())
    }

    /// Node at the end of `prefix`'s path. The empty prefix resolves to the root.
    pub fn find_prefix_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for &b in prefix.as_bytes() {
            node = node.child(b)?;
        }
        Some(node)
    }

    /// Weight of `word` if it was inserted as a complete word.
    pub fn lookup(&self, word: &str) -> Option<f64> {
        self.find_prefix_node(word)
            .filter(|node| node.is_word)
            .map(|node| node.weight)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }
}

/// Rejects the first character outside a-z.
fn check_letters(word: &str) -> Result<()> {
    match word.chars().find(|c| !c.is_ascii_lowercase()) {
        Some(bad) => Err(Error::InvalidCharacter(bad)),
        None => Ok(()),
    }
}

/// A query word must be a non-empty run of a-z, the same alphabet the trie stores.
pub(crate) fn check_query(word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(Error::EmptyInput);
    }
    check_letters(word)
}
