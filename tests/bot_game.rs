use rand::{rngs::StdRng, SeedableRng};
use scrabble_engine::{
    scorer, validator, Board, Bot, Decision, Letters, Lexicon, List, TileBag, CENTER, RACK_SIZE,
};

const WORDFILE: &str = "wordlists/words.txt";

/// Play `turns` turns between two bots sharing a lexicon, checking every move.
fn play_game(lexicon: &Lexicon, seed: u64, turns: usize) -> (Board, Vec<Decision>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let bot = Bot::new(lexicon);
    let mut board = Board::new();
    let mut bag = TileBag::full();
    let mut racks = [Letters::new(), Letters::new()];
    for rack in racks.iter_mut() {
        bag.refill(rack, RACK_SIZE, &mut rng);
    }
    let mut decisions = Vec::new();
    let mut passes = 0;
    for turn in 0..turns {
        let player = turn % 2;
        let decision = bot.decide(&board, racks[player], bag.clone(), &mut rng);
        if let Decision::Play { mv, .. } = &decision {
            assert!(validator::is_valid(&board, lexicon, mv), "{}", mv);
            let score = scorer::score(&board, mv.row, mv.col, mv.direction, &mv.word).unwrap();
            assert_eq!(score, mv.score);
            if board.is_first_move() {
                let covers_center = (0..mv.word.len())
                    .any(|k| mv.direction.step(mv.row, mv.col, k) == (CENTER, CENTER));
                assert!(covers_center, "{}", mv);
            }
            let used = board.apply_move(mv).unwrap();
            assert_eq!(used, mv.used);
            passes = 0;
        } else {
            passes += 1;
        }
        racks[player] = *decision.rack();
        bag = decision.bag().clone();
        assert!(racks[player].len() <= RACK_SIZE);
        let in_play = board.tiles().count() + racks[0].len() + racks[1].len() + bag.len();
        assert_eq!(in_play, 100, "tiles lost on turn {}", turn);
        decisions.push(decision);
        if passes >= 4 {
            break;
        }
    }
    (board, decisions)
}

#[test]
fn test_game_moves_are_legal() {
    let lexicon = Lexicon::from_file(WORDFILE).unwrap();
    let (board, decisions) = play_game(&lexicon, 2024, 12);
    assert!(!decisions.is_empty());
    assert!(decisions.iter().any(|d| d.action() == "play"));
    assert!(!board.is_first_move());
    // the board survives its text form
    let board2 = Board::from_text(&board.to_text()).unwrap();
    assert_eq!(board2.to_text(), board.to_text());
}

#[test]
fn test_game_is_deterministic() {
    let lexicon = Lexicon::from_file(WORDFILE).unwrap();
    let (board1, decisions1) = play_game(&lexicon, 7, 6);
    let (board2, decisions2) = play_game(&lexicon, 7, 6);
    assert_eq!(decisions1, decisions2);
    assert_eq!(board1.to_text(), board2.to_text());
}

#[test]
fn test_every_board_word_is_in_lexicon() {
    let lexicon = Lexicon::from_file(WORDFILE).unwrap();
    let (board, _) = play_game(&lexicon, 99, 10);
    let text = board.to_text();
    let rows: Vec<Vec<char>> = text
        .lines()
        .map(|line| {
            line.split_whitespace()
                .map(|t| t.chars().next().unwrap_or('.'))
                .collect()
        })
        .collect();
    let runs = |line: Vec<char>| -> Vec<String> {
        line.split(|&ch| ch == '.')
            .filter(|run| run.len() > 1)
            .map(|run| run.iter().collect())
            .collect()
    };
    let mut words = Vec::new();
    for r in 0..15 {
        words.extend(runs(rows[r].clone()));
    }
    for c in 0..15 {
        words.extend(runs(rows.iter().map(|row| row[c]).collect()));
    }
    for word in words {
        assert!(lexicon.is_word(&word), "{} is not a word", word);
    }
}
