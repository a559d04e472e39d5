use crate::board::{Board, CrossChecks, Direction, Square, N};
use crate::leave;
use crate::lexicon::{Lexicon, NodeId};
use crate::scorer::score_unchecked;
use crate::tiles::{Item, Letter, Letters, List, Tile, Word};
use crate::Rack;

#[cfg(feature = "flame_it")]
use flamer::flame;
use log::{debug, warn};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// A candidate move: `word` placed from `row`, `col` in `direction`.
///
/// The word holds the tiles on every square it covers, including tiles that are
/// already on the board. Tiles played from a blank print in lowercase.
#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    pub word: Word,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    /// Points scored by the move.
    pub score: u32,
    /// The rack letters the move takes, in the order they are placed.
    pub used: Letters,
    /// Value of the tiles left on the rack, see [`leave::equity`].
    pub equity: f32,
}

impl Move {
    /// Ranking key: score plus leave equity.
    pub fn total(&self) -> f32 {
        self.score as f32 + self.equity
    }

    /// Best move first. Ties are broken by score, then alphabetically on the word,
    /// then on row, column and direction.
    pub fn rank_cmp(&self, other: &Move) -> Ordering {
        other
            .total()
            .total_cmp(&self.total())
            .then(other.score.cmp(&self.score))
            .then_with(|| self.word.to_uppercase().cmp(&other.word.to_uppercase()))
            .then(self.row.cmp(&other.row))
            .then(self.col.cmp(&other.col))
            .then(self.direction.cmp(&other.direction))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}) {} {} [{:+.1}]",
            self.word, self.row, self.col, self.direction, self.score, self.equity
        )
    }
}

/// Limits for the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Maximum number of search steps per call to [`MoveGenerator::generate`].
    /// When exhausted the moves found so far are returned.
    pub node_budget: usize,
    /// Maximum length of the rack-built part before an anchor.
    pub max_left_part: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            node_budget: 2_000_000,
            max_left_part: 7,
        }
    }
}

/// Finds the moves that can be played on a board with a rack.
///
/// For every anchor and direction, a left part is built from rack letters on the empty
/// squares before the anchor, then the word is extended through the anchor letter by
/// letter, following the lexicon. Candidates are scored but not validated.
pub struct MoveGenerator<'a> {
    board: &'a Board,
    lexicon: &'a Lexicon,
    cross_checks: CrossChecks,
    config: GeneratorConfig,
}

impl<'a> MoveGenerator<'a> {
    /// Prepare a search on `board`. Computes the cross-checks.
    pub fn new(board: &'a Board, lexicon: &'a Lexicon) -> MoveGenerator<'a> {
        MoveGenerator {
            board,
            lexicon,
            cross_checks: board.cross_checks(lexicon),
            config: GeneratorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> MoveGenerator<'a> {
        self.config = config;
        self
    }

    pub fn cross_checks(&self) -> &CrossChecks {
        &self.cross_checks
    }

    /// All candidate moves for `rack`, ranked best first.
    /// ## Examples
    /// ```
    /// use scrabble_engine::{Board, Lexicon, MoveGenerator, Rack};
    /// let board = Board::new();
    /// let lexicon = Lexicon::from_words(&["cat", "act", "at"]);
    /// let rack: Rack = "TAC".parse()?;
    /// let moves = MoveGenerator::new(&board, &lexicon).generate(&rack);
    /// assert_eq!(moves.len(), 16);
    /// assert_eq!(moves[0].word.to_string(), "ACT");
    /// assert_eq!(moves[0].score, 10);
    /// # Ok::<(), scrabble_engine::Error>(())
    /// ```
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn generate(&self, rack: &Rack) -> Vec<Move> {
        let mut search = Search::new(self, *rack);
        for (row, col) in self.board.anchors() {
            for &direction in &[Direction::Across, Direction::Down] {
                search.from_anchor(row, col, direction);
            }
        }
        let nodes = search.nodes;
        let mut moves = search.moves;
        for mv in moves.iter_mut() {
            let mut leave = *rack;
            for &letter in mv.used.iter() {
                leave.take(letter);
            }
            mv.equity = leave::equity(&leave);
        }
        moves.sort_by(Move::rank_cmp);
        debug!(
            "rack {}: {} candidates, {} search steps",
            rack,
            moves.len(),
            nodes
        );
        moves
    }
}

/// State of one backtracking search.
struct Search<'g, 'a> {
    gen: &'g MoveGenerator<'a>,
    rack: Rack,
    /// Tiles of the word under construction.
    word: Word,
    direction: Direction,
    /// Index of the row or column searched.
    line: usize,
    /// Position of the anchor in the line.
    anchor: usize,
    moves: Vec<Move>,
    seen: HashSet<(Word, Square, Direction)>,
    nodes: usize,
    exhausted: bool,
}

impl<'g, 'a> Search<'g, 'a> {
    fn new(gen: &'g MoveGenerator<'a>, rack: Rack) -> Search<'g, 'a> {
        Search {
            gen,
            rack,
            word: Word::new(),
            direction: Direction::Across,
            line: 0,
            anchor: 0,
            moves: Vec::new(),
            seen: HashSet::new(),
            nodes: 0,
            exhausted: false,
        }
    }

    /// Count a search step, false when the budget is used up.
    fn tick(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        self.nodes += 1;
        if self.nodes > self.gen.config.node_budget {
            warn!(
                "search budget of {} steps exhausted, returning {} moves found so far",
                self.gen.config.node_budget,
                self.moves.len()
            );
            self.exhausted = true;
            return false;
        }
        true
    }

    fn from_anchor(&mut self, row: usize, col: usize, direction: Direction) {
        let (line, pos) = direction.line_pos(row, col);
        let cells = self.gen.board.line(direction, line);
        if pos > 0 && !cells[pos - 1].is_empty() {
            return;
        }
        let free = cells[0..pos].iter().rev().take_while(|c| c.is_empty()).count();
        self.direction = direction;
        self.line = line;
        self.anchor = pos;
        self.left_part(Lexicon::ROOT, free.min(self.gen.config.max_left_part));
    }

    /// True if each letter of the left part is allowed on its square.
    fn left_part_fits(&self) -> bool {
        let start = self.anchor - self.word.len();
        self.word.iter().enumerate().all(|(k, tile)| {
            let (row, col) = self.direction.square(self.line, start + k);
            self.gen
                .cross_checks
                .get(row, col, self.direction)
                .contains(tile.label())
        })
    }

    fn left_part(&mut self, node: NodeId, limit: usize) {
        if !self.tick() {
            return;
        }
        if self.left_part_fits() {
            self.extend_right(node, self.anchor);
        }
        if limit == 0 {
            return;
        }
        let lexicon = self.gen.lexicon;
        for label in lexicon.children(node).iter() {
            let child = match lexicon.get(node, label) {
                Some(child) => child,
                None => continue,
            };
            let letter = Letter::from_label(label);
            if self.rack.count(letter) > 0 {
                self.rack.take(letter);
                self.word.push(Tile::from_label(label));
                self.left_part(child, limit - 1);
                self.word.pop();
                self.rack.add(letter);
            }
            if self.rack.blanks() > 0 {
                self.rack.take(Letter::blank());
                self.word.push(Tile::wildcard_from_label(label));
                self.left_part(child, limit - 1);
                self.word.pop();
                self.rack.add(Letter::blank());
            }
        }
    }

    fn extend_right(&mut self, node: NodeId, pos: usize) {
        if pos >= N || !self.tick() {
            return;
        }
        let lexicon = self.gen.lexicon;
        let cell = self.gen.board.line(self.direction, self.line)[pos];
        if let Some(tile) = cell.tile() {
            if let Some(child) = lexicon.get(node, tile.label()) {
                self.word.push(tile);
                self.reached(child, pos);
                self.word.pop();
            }
            return;
        }
        let (row, col) = self.direction.square(self.line, pos);
        let allowed = self
            .gen
            .cross_checks
            .get(row, col, self.direction)
            .intersection(lexicon.children(node));
        for label in allowed.iter() {
            let child = match lexicon.get(node, label) {
                Some(child) => child,
                None => continue,
            };
            let letter = Letter::from_label(label);
            if self.rack.count(letter) > 0 {
                self.rack.take(letter);
                self.word.push(Tile::from_label(label));
                self.reached(child, pos);
                self.word.pop();
                self.rack.add(letter);
            }
            if self.rack.blanks() > 0 {
                self.rack.take(Letter::blank());
                self.word.push(Tile::wildcard_from_label(label));
                self.reached(child, pos);
                self.word.pop();
                self.rack.add(Letter::blank());
            }
        }
    }

    /// The word now ends on `pos`, at lexicon node `node`.
    fn reached(&mut self, node: NodeId, pos: usize) {
        let lexicon = self.gen.lexicon;
        if lexicon.is_terminal(node) && lexicon.is_word_labels(&self.word.labels()) {
            self.emit(pos);
        }
        self.extend_right(node, pos + 1);
    }

    fn emit(&mut self, end: usize) {
        let start = end + 1 - self.word.len();
        let (row, col) = self.direction.square(self.line, start);
        if !self.seen.insert((self.word, (row, col), self.direction)) {
            return;
        }
        let board = self.gen.board;
        let direction = self.direction;
        let used: Letters = self
            .word
            .iter()
            .enumerate()
            .filter(|&(k, _)| {
                let (r, c) = direction.step(row, col, k);
                !board.is_occupied(r, c)
            })
            .map(|(_, &tile)| Letter::from_tile(tile))
            .collect();
        let score = score_unchecked(board, row, col, direction, &self.word);
        self.moves.push(Move {
            word: self.word,
            row,
            col,
            direction,
            score,
            used,
            equity: 0.0,
        });
    }
}
