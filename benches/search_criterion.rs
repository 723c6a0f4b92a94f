use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use mailbox_chess::game_state::chess_types::MoveContext;
use mailbox_chess::search::board_scoring::MaterialScorer;
use mailbox_chess::search::negamax::{search_best_move, SearchConfig};
use mailbox_chess::utils::placement_parser::parse_position;

const POSITIONS: &[(&str, &str)] = &[
    ("opening", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
    ("italian", "r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4"),
    ("back_rank", "1r5k/5ppp/8/8/8/8/5PPP/1R3RK1 w - - 0 1"),
];

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("negamax");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for &(name, position) in POSITIONS {
        let parsed = parse_position(position).expect("benchmark position should parse");
        let context = MoveContext {
            castling: parsed.castling,
            ..MoveContext::default()
        };

        for depth in [1u8, 2, 3] {
            let config = SearchConfig { depth };
            group.bench_with_input(
                BenchmarkId::new(name, depth),
                &config,
                |b, &config| {
                    b.iter(|| {
                        let result = search_best_move(
                            black_box(&parsed.board),
                            black_box(&context),
                            parsed.side_to_move,
                            &MaterialScorer,
                            config,
                        )
                        .expect("search should run");
                        black_box(result.best_move)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
