mod subwords;
mod trievec;

use self::trievec::TrieVec;
use crate::labelset::{Label, LabelSet};
use crate::Error;
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::fs::read_to_string;
use std::path::Path;

/// Index of a node in the [`Lexicon`].
pub type NodeId = usize;

/// Words shorter than this are not accepted in the lexicon.
pub const MIN_WORD_LEN: usize = 2;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// A trie that holds all the playable words.
///
/// The trie is flattened in breadth first order: the children of a node are stored
/// next to each other, sorted by label. A node is a tuple with the index of its first
/// child and the set of child labels, so the child for a label is found by its rank
/// in that set.
///
/// Words are stored in uppercase. Lookups by text are case insensitive.
pub struct Lexicon {
    nodes: Vec<(u32, LabelSet)>,
    terminal: Vec<bool>,
    /// Path of the file used to build the lexicon.
    /// Empty if the lexicon is not built from a file.
    wordfile: String,
    word_count: usize,
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Lexicon: {} words, {} nodes from '{}'>",
            self.word_count,
            self.node_count(),
            self.wordfile
        )
    }
}

impl From<TrieVec<Label>> for Lexicon {
    fn from(trie: TrieVec<Label>) -> Self {
        let mut nodes: Vec<(u32, LabelSet)> = Vec::new();
        let mut terminal: Vec<bool> = Vec::new();
        let mut word_count = 0;

        // index the first child of the next dequeued node will get
        let mut next: usize = 1;
        let mut queue = VecDeque::new();
        queue.push_back(&trie);
        while let Some(node) = queue.pop_front() {
            let mut labels = LabelSet::new();
            for (label, child) in node.children() {
                labels.insert(*label);
                queue.push_back(child);
            }
            if node.terminal() {
                word_count += 1;
            }
            nodes.push((next as u32, labels));
            terminal.push(node.terminal());
            next += node.children().len();
        }
        Lexicon {
            nodes,
            terminal,
            wordfile: String::new(),
            word_count,
        }
    }
}

/// Convert text to labels, `None` if it holds anything but the letters `A`..`Z`.
fn to_labels(word: &str) -> Option<Vec<Label>> {
    word.chars()
        .map(|ch| match ch.to_ascii_uppercase() {
            ch @ 'A'..='Z' => Some(ch as u8 - b'A' + 1),
            _ => None,
        })
        .collect()
}

impl Lexicon {
    /// The root node, matching the empty prefix.
    pub const ROOT: NodeId = 0;

    /// Build a lexicon from a list of words.
    ///
    /// Words are trimmed and uppercased. Words shorter than two letters, and words
    /// with characters other than `A`..`Z`, are skipped.
    /// ## Example
    /// ```
    /// use scrabble_engine::Lexicon;
    /// let lexicon = Lexicon::from_words(&["cat", "CATS", "a"]);
    /// assert!(lexicon.is_word("Cat"));
    /// assert!(lexicon.is_prefix("CA"));
    /// assert!(!lexicon.is_word("A"));
    /// assert_eq!(lexicon.word_count(), 2);
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Lexicon {
        let mut builder = TrieVec::new();
        let mut skipped = 0;
        for word in words {
            match to_labels(word.as_ref().trim()) {
                Some(labels) if labels.len() >= MIN_WORD_LEN => {
                    builder.insert(&labels);
                }
                _ => skipped += 1,
            }
        }
        if skipped > 0 {
            debug!("skipped {} words that can not be played", skipped);
        }
        Lexicon::from(builder)
    }

    /// Read the lexicon from a file with one word per line.
    /// ## Errors
    /// If the file can not be read.
    pub fn from_file<P: AsRef<Path>>(wordfile: P) -> Result<Lexicon, Error> {
        let path = wordfile.as_ref().display().to_string();
        let contents = read_to_string(&wordfile).map_err(|source| Error::ReadError {
            path: path.clone(),
            source,
        })?;
        let words: Vec<&str> = contents.lines().collect();
        let mut lexicon = Lexicon::from_words(&words);
        lexicon.wordfile = path;
        debug!("loaded {}", lexicon);
        Ok(lexicon)
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the lexicon from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from<P: AsRef<Path>>(wordfile: P) -> Result<Lexicon, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let path = wordfile.as_ref().display().to_string();
        let file = File::open(&wordfile).map_err(|source| Error::ReadError {
            path: path.clone(),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut lexicon: Lexicon = bincode::deserialize_from(reader)
            .map_err(|_| Error::LexiconDeserializeError(path.clone()))?;
        lexicon.wordfile = path;
        Ok(lexicon)
    }

    /// The number of words in the lexicon.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The number of nodes in the trie, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Path of the file the lexicon was read from, if any.
    pub fn wordfile(&self) -> &str {
        &self.wordfile
    }

    /// Get the child of `node` with `label` if present.
    #[inline]
    pub fn get(&self, node: NodeId, label: Label) -> Option<NodeId> {
        let (start, labels) = &self.nodes[node];
        labels.index_of(label).map(|rank| *start as usize + rank)
    }

    /// The labels of all children of `node`.
    #[inline]
    pub fn children(&self, node: NodeId) -> LabelSet {
        self.nodes[node].1
    }

    /// Returns true if the path to `node` spells a word.
    #[inline]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.terminal[node]
    }

    /// Follow `labels` from `node`, returns the node reached.
    pub fn walk_from(&self, node: NodeId, labels: &[Label]) -> Option<NodeId> {
        labels
            .iter()
            .try_fold(node, |node, &label| self.get(node, label))
    }

    /// Follow `labels` from the root.
    pub fn walk(&self, labels: &[Label]) -> Option<NodeId> {
        self.walk_from(Lexicon::ROOT, labels)
    }

    /// Returns true if `labels` spell a word.
    pub fn is_word_labels(&self, labels: &[Label]) -> bool {
        self.walk(labels).map_or(false, |node| self.is_terminal(node))
    }

    /// Returns true if `word` is in the lexicon.
    pub fn is_word(&self, word: &str) -> bool {
        to_labels(word).map_or(false, |labels| self.is_word_labels(&labels))
    }

    /// Returns true if some word in the lexicon starts with `prefix`.
    /// The empty prefix is a prefix of every word.
    pub fn is_prefix(&self, prefix: &str) -> bool {
        to_labels(prefix).map_or(false, |labels| self.walk(&labels).is_some())
    }

    /// The letters that can be put between the runs `before` and `after`, so that
    /// `before + letter + after` is a word.
    ///
    /// This is the cross-check set of a square with tiles next to it: the runs are the
    /// tiles directly above and below (or left and right of) the square.
    /// ## Example
    /// ```
    /// use scrabble_engine::Lexicon;
    /// let lexicon = Lexicon::from_words(&["cat", "cot", "cut", "at"]);
    /// let letters: Vec<u8> = lexicon.legal_labels(&[3], &[20]).into();
    /// assert_eq!(letters, vec![1, 15, 21]);
    /// ```
    pub fn legal_labels(&self, before: &[Label], after: &[Label]) -> LabelSet {
        match self.walk(before) {
            None => LabelSet::new(),
            Some(node) => self
                .children(node)
                .iter()
                .filter(|&label| {
                    self.get(node, label)
                        .and_then(|child| self.walk_from(child, after))
                        .map_or(false, |end| self.is_terminal(end))
                })
                .collect(),
        }
    }
}
