use super::{Lexicon, NodeId};
use crate::tiles::{Label, Letter};
use crate::Rack;
use std::collections::BTreeMap;

struct Search<'a> {
    lexicon: &'a Lexicon,
    min_len: usize,
    rack: Rack,
    word: String,
    blanks_used: usize,
    /// uppercase word -> (blanks used, spelling)
    found: BTreeMap<String, (usize, String)>,
}

impl<'a> Search<'a> {
    fn visit(&mut self, node: NodeId) {
        for label in self.lexicon.children(node).iter() {
            let child = match self.lexicon.get(node, label) {
                Some(child) => child,
                None => continue,
            };
            let letter = Letter::from_label(label);
            if self.rack.count(letter) > 0 {
                self.rack.take(letter);
                self.step(child, label, false);
                self.rack.add(letter);
            }
            if self.rack.blanks() > 0 {
                self.rack.take(Letter::blank());
                self.step(child, label, true);
                self.rack.add(Letter::blank());
            }
        }
    }

    fn step(&mut self, child: NodeId, label: Label, blank: bool) {
        let ch = (b'A' + label - 1) as char;
        if blank {
            self.word.push(ch.to_ascii_lowercase());
            self.blanks_used += 1;
        } else {
            self.word.push(ch);
        }
        if self.lexicon.is_terminal(child) && self.word.len() >= self.min_len {
            self.record();
        }
        self.visit(child);
        self.word.pop();
        if blank {
            self.blanks_used -= 1;
        }
    }

    /// Keep the spelling that needs the fewest blanks.
    fn record(&mut self) {
        let key = self.word.to_uppercase();
        let better = self
            .found
            .get(&key)
            .map_or(true, |&(blanks, _)| self.blanks_used < blanks);
        if better {
            self.found
                .insert(key, (self.blanks_used, self.word.clone()));
        }
    }
}

impl Lexicon {
    /// All words that can be spelled with the letters on `rack`, of at least `min_len`
    /// letters, sorted alphabetically.
    ///
    /// Letters taken from a blank are reported in lowercase. When a word can be
    /// spelled in several ways, the spelling with the fewest blanks is reported.
    /// ## Example
    /// ```
    /// use scrabble_engine::{Lexicon, Rack};
    /// let lexicon = Lexicon::from_words(&["at", "cat", "act", "tax", "taxi"]);
    /// let rack: Rack = "TAC*".parse()?;
    /// assert_eq!(
    ///     lexicon.words_from_letters(&rack, 3),
    ///     vec!["ACT", "CAT", "TAx"]
    /// );
    /// # Ok::<(), scrabble_engine::Error>(())
    /// ```
    pub fn words_from_letters(&self, rack: &Rack, min_len: usize) -> Vec<String> {
        let mut search = Search {
            lexicon: self,
            min_len,
            rack: *rack,
            word: String::new(),
            blanks_used: 0,
            found: BTreeMap::new(),
        };
        search.visit(Lexicon::ROOT);
        search
            .found
            .into_iter()
            .map(|(_, (_, spelling))| spelling)
            .collect()
    }
}
