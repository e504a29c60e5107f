use criterion::{criterion_group, criterion_main, Criterion};

use tictactoe::board::grid::parse_grid;
use tictactoe::board::TicTacToe;
use tictactoe::searcher::{AlphaBeta, Minimax};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("minimax empty board", |b| b.iter(search_minimax_empty_board));
    c.bench_function("alpha beta empty board", |b| {
        b.iter(search_alpha_beta_empty_board)
    });
    c.bench_function("alpha beta midgame", |b| b.iter(search_alpha_beta_midgame));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn search_minimax_empty_board() {
    let game = TicTacToe::classic();
    let state = game.initial_state();
    Minimax::new().search(&game, &state).unwrap();
}

fn search_alpha_beta_empty_board() {
    let game = TicTacToe::classic();
    let state = game.initial_state();
    AlphaBeta::new().search(&game, &state).unwrap();
}

fn search_alpha_beta_midgame() {
    let (game, state) = parse_grid("x.o/.x./...", 3).unwrap();
    AlphaBeta::new().search(&game, &state).unwrap();
}
