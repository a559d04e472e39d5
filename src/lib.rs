//! A word game engine for Rust.
//! <br>
//! This crate finds, scores and validates moves on a 15x15 crossword game board,
//! and picks the move to play for a rack of tiles.
//! Moves are generated with the classic anchor based search: a left part is built
//! from rack letters before each anchor square, then the word is extended through
//! the anchor while following a lexicon trie. Cross-check sets prune letters that
//! would form an illegal perpendicular word.
//!
//! # How to use `scrabble_engine`
//! Build a [`Lexicon`] once from a word list, with one word per line, and share it
//! by reference. Create a [`Board`] and put tiles on it, either from the text format
//! or by playing words. Then ask a [`Bot`] to decide a turn, or use the
//! [`MoveGenerator`] and the [`validator`] directly.
//! All randomness (tile draws and exchanges) comes from a random generator passed in
//! by the caller.
//!
//! # Basic usage
//!  ```
//! use scrabble_engine::{Board, Bot, Codec, Decision, Direction, Letters, Lexicon, TileBag};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let lexicon = Lexicon::from_words(&["rust", "rest", "rusts", "tress"]);
//! let mut board = Board::new();
//! board.play_word("RUST", 7, 7, Direction::Across)?;
//!
//! let rack: Letters = Codec::default().encode_items("STERS")?;
//! let bag = TileBag::unseen(&board, &rack);
//! let bot = Bot::new(&lexicon);
//! for mv in bot.candidates(&board, &rack).iter().take(3) {
//!     println!("{}", mv);
//! }
//! let mut rng = StdRng::seed_from_u64(42);
//! if let Decision::Play { mv, .. } = bot.decide(&board, rack, bag, &mut rng) {
//!     board.apply_move(&mv)?;
//! }
//! println!("{}", board);
//! # Ok::<(), scrabble_engine::Error>(())
//! ```
//!
//! # Features
//! - `rayon`: compute the cross-checks of the board lines in parallel.
//! - `serde`: serialize the public result types, like [`MoveRecord`].
//! - `bincode`: load a prebuilt [`Lexicon`].
//! - `bitintr`: hardware bit counting in the letter sets.
//! - `flame_it`: profiling spans with `flame`.
mod board;
mod bot;
mod error;
mod grid;
mod labelset;
pub mod leave;
mod lexicon;
mod movegen;
mod rack;
pub mod scorer;
mod tilebag;
mod tiles;
pub mod validator;

pub use board::{Board, CrossChecks, Direction, Square, CENTER, N};
pub use bot::{Bot, Decision, MoveRecord};
pub use error::Error;
pub use grid::{Grid, Premium};
pub use labelset::LabelSet;
pub use lexicon::{Lexicon, NodeId};
pub use movegen::{GeneratorConfig, Move, MoveGenerator};
pub use rack::{Rack, RackTile, RACK_SIZE};
pub use tilebag::TileBag;
pub use tiles::{Cell, Codec, Item, ItemList, Label, Letter, Letters, List, Row, Tile, Word};
pub use validator::{FormedWord, Verdict};
