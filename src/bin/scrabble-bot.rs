//! Decide a turn from the command line.
//!
//! Reads a word list and a board in the text format, prints the best candidates for
//! a rack and the move the bot picks. Set `RUST_LOG=debug` to see the search summary.
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use scrabble_engine::{
    Board, Bot, Codec, Decision, Error, Letters, Lexicon, List, TileBag, RACK_SIZE,
};
use std::fs::read_to_string;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "scrabble-bot", about = "Pick a move for a rack on a board")]
struct Args {
    /// Word list, one word per line
    #[arg(short, long)]
    wordlist: PathBuf,

    /// Board in text format: 15 lines of 15 tokens, `.` for an empty square.
    /// An empty board when omitted
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// Rack letters, `*` or `?` for a blank
    #[arg(short, long)]
    rack: String,

    /// Tiles in the bag. Defaults to all tiles not on the board or the rack
    #[arg(long)]
    bag: Option<String>,

    /// Seed for tile draws and exchanges
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of candidates to print
    #[arg(long, default_value_t = 10)]
    top: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let lexicon = Lexicon::from_file(&args.wordlist)
        .with_context(|| format!("cannot load word list {}", args.wordlist.display()))?;
    info!("{}", lexicon);

    let board = match &args.board {
        Some(path) => {
            let text = read_to_string(path)
                .with_context(|| format!("cannot read board {}", path.display()))?;
            Board::from_text(&text)?
        }
        None => Board::new(),
    };
    let rack: Letters = Codec::default().encode_items(&args.rack.to_uppercase())?;
    if rack.len() > RACK_SIZE {
        return Err(Error::RackTooLarge(args.rack.clone(), RACK_SIZE).into());
    }
    let bag = match &args.bag {
        Some(text) => TileBag::from_text(&text.to_uppercase())?,
        None => TileBag::unseen(&board, &rack),
    };
    println!("{}", board);
    println!("rack: {}  bag: {} tiles", rack, bag.len());

    let bot = Bot::new(&lexicon);
    for mv in bot.candidates(&board, &rack).iter().take(args.top) {
        println!("{}", mv);
    }

    let mut rng = StdRng::seed_from_u64(args.seed);
    let decision = bot.decide(&board, rack, bag, &mut rng);
    match &decision {
        Decision::Play { mv, rack, bag } => println!(
            "play {} at ({}, {}) {} for {}, rack {}, {} in bag",
            mv.word,
            mv.row,
            mv.col,
            mv.direction,
            mv.score,
            rack,
            bag.len()
        ),
        Decision::Exchange {
            exchanged,
            rack,
            bag,
        } => println!(
            "exchange {}, rack {}, {} in bag",
            exchanged,
            rack,
            bag.len()
        ),
        Decision::Pass { rack, .. } => println!("pass, rack {}", rack),
    }
    Ok(())
}
