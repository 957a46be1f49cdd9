use criterion::{Criterion, criterion_group, criterion_main};
use pairs_core::*;
use std::hint::black_box;

fn solve(board: Board) -> u32 {
    let mut engine = RoundEngine::new(board.clone());
    for symbol in SYMBOLS {
        let mut cells = iter_coords().filter(|&coords| board[coords] == symbol);
        let (Some(a), Some(b)) = (cells.next(), cells.next()) else {
            unreachable!("every symbol is on the board twice");
        };
        engine.reveal_first(a).unwrap();
        engine.reveal_second(b).unwrap();
    }
    engine.compute_score()
}

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            RandomBoardGenerator::new(black_box(seed)).generate()
        })
    });
}

fn bench_full_round(c: &mut Criterion) {
    let board = RandomBoardGenerator::new(7).generate();
    c.bench_function("full_round", |b| b.iter(|| solve(black_box(board.clone()))));
}

criterion_group!(benches, bench_generate, bench_full_round);
criterion_main!(benches);
