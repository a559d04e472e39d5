use criterion::{criterion_group, criterion_main, Criterion};
use scrabble_engine::{Board, Bot, Codec, Direction, Letters, Lexicon, MoveGenerator, Rack};

const WORDFILE: &str = "wordlists/words.txt";

fn test_board() -> Board {
    let mut board = Board::new();
    let words = [
        ("HEART", 7, 5, Direction::Across),
        ("BOAST", 3, 9, Direction::Down),
        ("HOUSE", 7, 5, Direction::Down),
        ("EAGER", 11, 5, Direction::Across),
    ];
    for &(word, row, col, direction) in words.iter() {
        board.play_word(word, row, col, direction).unwrap();
    }
    board
}

fn bench_cross_checks(c: &mut Criterion, lexicon: &Lexicon) {
    let board = test_board();
    c.bench_function("board.cross_checks", |b| b.iter(|| board.cross_checks(lexicon)));
}

fn bench_generate(c: &mut Criterion, name: &str, lexicon: &Lexicon, letters: &str) {
    let board = test_board();
    let rack: Rack = letters.parse().unwrap();
    let generator = MoveGenerator::new(&board, lexicon);
    c.bench_function(&format!("movegen.{}", name), |b| {
        b.iter(|| generator.generate(&rack))
    });
}

fn bench_candidates(c: &mut Criterion, name: &str, lexicon: &Lexicon, letters: &str) {
    let board = test_board();
    let rack: Letters = Codec::default().encode_items(letters).unwrap();
    let bot = Bot::new(lexicon);
    c.bench_function(&format!("bot.candidates.{}", name), |b| {
        b.iter(|| bot.candidates(&board, &rack))
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let lexicon = Lexicon::from_file(WORDFILE).unwrap();
    bench_cross_checks(c, &lexicon);
    bench_generate(c, "1", &lexicon, "ABEL");
    bench_candidates(c, "1", &lexicon, "ABEL");
}

fn slow_benchmarks(c: &mut Criterion) {
    let lexicon = Lexicon::from_file(WORDFILE).unwrap();
    bench_generate(c, "2", &lexicon, "RETAIN*");
    bench_generate(c, "3", &lexicon, "SEAT**R");
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_group! {
    name = slow;
    config = Criterion::default()
        .sample_size(10);
    targets = slow_benchmarks
}

criterion_main!(benches, slow);
