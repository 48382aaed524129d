use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use okiya::{negamax, Board, Game, Node, Solver};

fn sample_game() -> Game {
    let board: Board = "KH JS JH QC QD JC KS AS JD QS KD QH KC AD AH AC"
        .parse()
        .expect("valid board");
    Game::new(board)
}

/// Midgame position reached by always playing the first legal move.
fn midgame(game: &Game, plies: usize) -> Node {
    let mut node = Node::initial();
    for _ in 0..plies {
        let mv = *game.legal_moves(&node).first().expect("legal move");
        node = game.make_move(node, mv).expect("apply move");
    }
    node
}

fn bench_negamax(c: &mut Criterion) {
    let game = sample_game();
    let shallow = midgame(&game, 8);
    let deep = midgame(&game, 6);

    c.bench_function("negamax/8_plies_played", |b| {
        b.iter(|| black_box(negamax(&game, black_box(&shallow))))
    });
    c.bench_function("negamax/6_plies_played", |b| {
        b.iter(|| black_box(negamax(&game, black_box(&deep))))
    });
}

fn bench_full_line(c: &mut Criterion) {
    let game = sample_game();
    let root = midgame(&game, 8);
    let solver = Solver::new(&game);

    c.bench_function("search/full_line_8_plies_played", |b| {
        b.iter(|| black_box(solver.search(black_box(&root))))
    });
}

fn bench_move_generation(c: &mut Criterion) {
    let game = sample_game();
    let node = midgame(&game, 4);

    c.bench_function("legal_moves/midgame", |b| {
        b.iter(|| {
            let mut buf = [0u8; 16];
            black_box(game.populate_legal_moves(black_box(&node), &mut buf))
        })
    });
}

criterion_group!(benches, bench_negamax, bench_full_line, bench_move_generation);
criterion_main!(benches);
