use crate::board::{Board, Direction};
use crate::lexicon::Lexicon;
use crate::movegen::{GeneratorConfig, Move, MoveGenerator};
use crate::rack::{letter_symbol, Rack, RackTile, RACK_SIZE};
use crate::tilebag::TileBag;
use crate::tiles::{Letters, List};
use crate::validator;

#[cfg(feature = "flame_it")]
use flamer::flame;
use log::debug;
use rand::{seq::index::sample, Rng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of a turn, with the rack and bag after it.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Play `mv`. Its used letters are gone from the rack, and the rack is refilled.
    Play {
        mv: Move,
        rack: Letters,
        bag: TileBag,
    },
    /// Swap `exchanged` for the same number of tiles from the bag.
    Exchange {
        exchanged: Letters,
        rack: Letters,
        bag: TileBag,
    },
    /// Do nothing, rack and bag are unchanged.
    Pass { rack: Letters, bag: TileBag },
}

impl Decision {
    pub fn rack(&self) -> &Letters {
        match self {
            Decision::Play { rack, .. } => rack,
            Decision::Exchange { rack, .. } => rack,
            Decision::Pass { rack, .. } => rack,
        }
    }

    pub fn bag(&self) -> &TileBag {
        match self {
            Decision::Play { bag, .. } => bag,
            Decision::Exchange { bag, .. } => bag,
            Decision::Pass { bag, .. } => bag,
        }
    }

    /// "play", "exchange" or "pass".
    pub fn action(&self) -> &'static str {
        match self {
            Decision::Play { .. } => "play",
            Decision::Exchange { .. } => "exchange",
            Decision::Pass { .. } => "pass",
        }
    }

    /// The decision in its external form.
    pub fn to_record(&self) -> MoveRecord {
        let rack_tiles =
            |rack: &Letters| -> Vec<RackTile> { rack.iter().map(|&l| RackTile::from(l)).collect() };
        match self {
            Decision::Play { mv, rack, bag } => MoveRecord::Play {
                word: mv.word.to_string(),
                row: mv.row,
                col: mv.col,
                direction: mv.direction,
                score: mv.score,
                rack: rack_tiles(rack),
                bag: bag.to_symbols(),
            },
            Decision::Exchange {
                exchanged,
                rack,
                bag,
            } => MoveRecord::Exchange {
                exchanged: exchanged.iter().map(|&l| letter_symbol(l)).collect(),
                rack: rack_tiles(rack),
                bag: bag.to_symbols(),
            },
            Decision::Pass { rack, bag } => MoveRecord::Pass {
                rack: rack_tiles(rack),
                bag: bag.to_symbols(),
            },
        }
    }
}

/// A [`Decision`] as exchanged with a game server. Blanks are empty strings, and a
/// letter played from a blank is lowercase in `word`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "action", rename_all = "lowercase")
)]
pub enum MoveRecord {
    Play {
        word: String,
        row: usize,
        col: usize,
        direction: Direction,
        score: u32,
        rack: Vec<RackTile>,
        bag: Vec<String>,
    },
    Exchange {
        exchanged: Vec<String>,
        rack: Vec<RackTile>,
        bag: Vec<String>,
    },
    Pass {
        rack: Vec<RackTile>,
        bag: Vec<String>,
    },
}

/// Picks a move for a rack: the best legal move by score plus leave equity, else an
/// exchange, else a pass.
/// ## Example
/// ```
/// use scrabble_engine::{Board, Bot, Codec, Letters, Lexicon, List, TileBag};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let lexicon = Lexicon::from_words(&["cat", "act", "at"]);
/// let bot = Bot::new(&lexicon);
/// let rack: Letters = Codec::default().encode_items("TAC")?;
/// let mut rng = StdRng::seed_from_u64(1);
/// let decision = bot.decide(&Board::new(), rack, TileBag::full(), &mut rng);
/// assert_eq!(decision.action(), "play");
/// assert_eq!(decision.rack().len(), 7);
/// assert_eq!(decision.bag().len(), 93);
/// # Ok::<(), scrabble_engine::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Bot<'a> {
    lexicon: &'a Lexicon,
    config: GeneratorConfig,
    rack_size: usize,
    max_exchange: usize,
    exchange_threshold: usize,
}

impl<'a> Bot<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Bot<'a> {
        Bot {
            lexicon,
            config: GeneratorConfig::default(),
            rack_size: RACK_SIZE,
            max_exchange: 3,
            exchange_threshold: 7,
        }
    }

    /// Limit the number of search steps per decision.
    pub fn with_node_budget(mut self, node_budget: usize) -> Bot<'a> {
        self.config.node_budget = node_budget;
        self
    }

    /// Number of tiles the rack is refilled to.
    pub fn with_rack_size(mut self, rack_size: usize) -> Bot<'a> {
        self.rack_size = rack_size;
        self
    }

    /// Most tiles swapped by an exchange.
    pub fn with_max_exchange(mut self, max_exchange: usize) -> Bot<'a> {
        self.max_exchange = max_exchange;
        self
    }

    /// Least number of tiles in the bag that allows an exchange.
    pub fn with_exchange_threshold(mut self, exchange_threshold: usize) -> Bot<'a> {
        self.exchange_threshold = exchange_threshold;
        self
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// The legal moves for `rack` on `board`, best first.
    /// ## Panics
    /// If `rack` holds more tiles than the rack size.
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn candidates(&self, board: &Board, rack: &Letters) -> Vec<Move> {
        assert!(
            rack.len() <= self.rack_size,
            "rack {} holds {} tiles, more than {}",
            rack,
            rack.len(),
            self.rack_size
        );
        let generated = MoveGenerator::new(board, self.lexicon)
            .with_config(self.config)
            .generate(&Rack::from(rack));
        let found = generated.len();
        let legal: Vec<Move> = generated
            .into_iter()
            .filter(|mv| validator::is_valid(board, self.lexicon, mv))
            .collect();
        debug!(
            "{} anchors, {} candidates, {} legal",
            board.anchors().len(),
            found,
            legal.len()
        );
        legal
    }

    /// Decide the turn for `rack` on `board`. Tiles are drawn from `bag` with `rng`.
    /// ## Panics
    /// If `rack` holds more tiles than the rack size.
    pub fn decide<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rack: Letters,
        bag: TileBag,
        rng: &mut R,
    ) -> Decision {
        match self.candidates(board, &rack).into_iter().next() {
            Some(mv) => self.play(mv, rack, bag, rng),
            None if bag.len() >= self.exchange_threshold => self.exchange(rack, bag, rng),
            None => {
                debug!("no legal move and {} tiles in the bag: pass", bag.len());
                Decision::Pass { rack, bag }
            }
        }
    }

    /// Take the letters used by `mv` from `rack` and refill it from `bag`.
    /// ## Panics
    /// If `mv` uses a letter that is not on the rack.
    pub fn play<R: Rng + ?Sized>(
        &self,
        mv: Move,
        mut rack: Letters,
        mut bag: TileBag,
        rng: &mut R,
    ) -> Decision {
        for &letter in mv.used.iter() {
            assert!(
                rack.remove_first(letter),
                "move {} uses {} which is not on rack {}",
                mv,
                letter,
                rack
            );
        }
        bag.refill(&mut rack, self.rack_size, rng);
        debug!("play {}, new rack {}", mv, rack);
        Decision::Play { mv, rack, bag }
    }

    /// Swap up to `max_exchange` random rack tiles for tiles from the bag. With an empty
    /// rack there is nothing to swap and the turn is a pass.
    pub fn exchange<R: Rng + ?Sized>(
        &self,
        mut rack: Letters,
        mut bag: TileBag,
        rng: &mut R,
    ) -> Decision {
        let n = self.max_exchange.min(rack.len());
        if n == 0 {
            return Decision::Pass { rack, bag };
        }
        let exchanged: Letters = sample(rng, rack.len(), n).iter().map(|i| rack[i]).collect();
        for &letter in exchanged.iter() {
            rack.remove_first(letter);
        }
        bag.put_back(&exchanged.0);
        for _ in 0..n {
            if let Some(letter) = bag.draw(rng) {
                rack.push(letter);
            }
        }
        debug!("exchange {}, new rack {}", exchanged, rack);
        Decision::Exchange {
            exchanged,
            rack,
            bag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Codec, Error};
    use rand::{rngs::StdRng, SeedableRng};
    use Direction::{Across, Down};

    type Result<T> = std::result::Result<T, Error>;

    fn letters(s: &str) -> Letters {
        Codec::default().encode_items(s).unwrap()
    }

    fn rack_of(letters: &Letters) -> Rack {
        Rack::from(letters)
    }

    #[test]
    fn test_play_best_move() -> Result<()> {
        let lexicon = Lexicon::from_words(&["cat", "act", "at", "ta"]);
        let bot = Bot::new(&lexicon);
        let mut rng = StdRng::seed_from_u64(3);
        let bag = TileBag::from_text("EEE")?;
        let decision = bot.decide(&Board::new(), letters("CATXYZQ"), bag, &mut rng);
        match &decision {
            Decision::Play { mv, rack, bag } => {
                assert_eq!(mv.word.to_string(), "ACT");
                assert_eq!((mv.row, mv.col, mv.direction), (5, 7, Down));
                assert_eq!(mv.score, 10);
                assert_eq!(rack_of(rack), "EEEQXYZ".parse::<Rack>()?);
                assert!(bag.is_empty());
            }
            other => panic!("expected a play, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_play_blank() -> Result<()> {
        let lexicon = Lexicon::from_words(&["cat"]);
        let bot = Bot::new(&lexicon);
        let mut rng = StdRng::seed_from_u64(3);
        let decision = bot.decide(&Board::new(), letters("CA*"), TileBag::new(), &mut rng);
        match &decision {
            Decision::Play { mv, rack, .. } => {
                assert_eq!(mv.word.to_string(), "CAt");
                assert!(rack.is_empty());
            }
            other => panic!("expected a play, got {:?}", other),
        }
        let record = decision.to_record();
        match record {
            MoveRecord::Play { word, score, .. } => {
                assert_eq!(word, "CAt");
                assert_eq!(score, 8);
            }
            other => panic!("expected a play record, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_pass_with_small_bag() -> Result<()> {
        let lexicon = Lexicon::from_words(&["cat"]);
        let bot = Bot::new(&lexicon);
        let mut rng = StdRng::seed_from_u64(3);
        let rack = letters("QVVWXJZ");
        let bag = TileBag::from_text("ABCDEF")?;
        let decision = bot.decide(&Board::new(), rack, bag.clone(), &mut rng);
        assert_eq!(
            decision,
            Decision::Pass {
                rack,
                bag: bag.clone()
            }
        );
        assert_eq!(
            decision.to_record(),
            MoveRecord::Pass {
                rack: rack.iter().map(|&l| RackTile::from(l)).collect(),
                bag: vec!["A", "B", "C", "D", "E", "F"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
            }
        );
        Ok(())
    }

    #[test]
    fn test_exchange() -> Result<()> {
        let lexicon = Lexicon::from_words(&["cat"]);
        let bot = Bot::new(&lexicon);
        let mut rng = StdRng::seed_from_u64(11);
        let rack = letters("QVVWXJZ");
        let decision = bot.decide(&Board::new(), rack, TileBag::full(), &mut rng);
        match &decision {
            Decision::Exchange {
                exchanged,
                rack: new_rack,
                bag,
            } => {
                assert_eq!(exchanged.len(), 3);
                assert_eq!(new_rack.len(), 7);
                assert_eq!(bag.len(), 100);
                let mut before = rack_of(&rack);
                for &letter in exchanged.iter() {
                    before.take(letter);
                }
                assert_eq!(before.len(), 4);
            }
            other => panic!("expected an exchange, got {:?}", other),
        }
        // all tiles are accounted for
        let after = decision.bag().counts();
        let full = TileBag::full().counts();
        for letter in full.distinct_elements() {
            let on_rack = |r: &Letters| r.iter().filter(|&l| l == letter).count();
            assert_eq!(
                after.count_of(letter) + on_rack(decision.rack()),
                full.count_of(letter) + on_rack(&rack)
            );
        }
        Ok(())
    }

    #[test]
    fn test_exchange_limits() -> Result<()> {
        let lexicon = Lexicon::from_words(&["cat"]);
        let mut rng = StdRng::seed_from_u64(5);
        let bot = Bot::new(&lexicon).with_max_exchange(7).with_exchange_threshold(10);
        let rack = letters("QV");
        let decision = bot.exchange(rack, TileBag::full(), &mut rng);
        assert_eq!(decision.action(), "exchange");
        assert_eq!(decision.rack().len(), 2);

        let decision = bot.decide(&Board::new(), rack, TileBag::from_text("ABCDEFGHI")?, &mut rng);
        assert_eq!(decision.action(), "pass");

        let decision = bot.exchange(Letters::new(), TileBag::full(), &mut rng);
        assert_eq!(decision.action(), "pass");
        Ok(())
    }

    #[test]
    fn test_candidates_are_valid() -> Result<()> {
        let mut board = Board::new();
        board.play_word("CAT", 7, 6, Across)?;
        let lexicon = Lexicon::from_words(&["cat", "cats", "at", "ta", "as", "tas", "scat"]);
        let bot = Bot::new(&lexicon);
        let moves = bot.candidates(&board, &letters("SAT"));
        assert!(!moves.is_empty());
        for mv in &moves {
            assert!(validator::is_valid(&board, &lexicon, mv), "{}", mv);
        }
        for pair in moves.windows(2) {
            assert_ne!(pair[0].rank_cmp(&pair[1]), std::cmp::Ordering::Greater);
        }
        Ok(())
    }

    #[test]
    #[should_panic(expected = "not on rack")]
    fn test_play_missing_letter() {
        let lexicon = Lexicon::from_words(&["cat"]);
        let bot = Bot::new(&lexicon);
        let board = Board::new();
        let moves = bot.candidates(&board, &letters("CAT"));
        let mut rng = StdRng::seed_from_u64(1);
        let mv = moves[0].clone();
        bot.play(mv, letters("CAX"), TileBag::new(), &mut rng);
    }

    #[test]
    #[should_panic(expected = "more than 7")]
    fn test_oversize_rack() {
        let lexicon = Lexicon::from_words(&["cat"]);
        let bot = Bot::new(&lexicon);
        let mut rng = StdRng::seed_from_u64(1);
        bot.decide(&Board::new(), letters("CATEEEEEEE"), TileBag::full(), &mut rng);
    }

    #[test]
    #[should_panic(expected = "more than 2")]
    fn test_rack_size_limits_candidates() {
        let lexicon = Lexicon::from_words(&["cat"]);
        let bot = Bot::new(&lexicon).with_rack_size(2);
        bot.candidates(&Board::new(), &letters("CAT"));
    }

    #[test]
    fn test_budget() {
        let lexicon = Lexicon::from_words(&["cat"]);
        let bot = Bot::new(&lexicon).with_node_budget(0);
        assert!(bot.candidates(&Board::new(), &letters("CAT")).is_empty());
    }
}
