use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::move_generation::perft::perft;
use mailbox_chess::search::board_scoring::PositionalScorer;
use mailbox_chess::search::negamax::{SearchConfig, SearchContext};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        fen: STARTPOS_FEN,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_2",
        fen: KIWIPETE_FEN,
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "position_3",
        fen: POSITION_3_FEN,
        expected_nodes: &[14, 191, 2812],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        fen: STARTPOS_FEN,
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "position_2",
        fen: KIWIPETE_FEN,
        expected_nodes: &[48, 2039, 97_862],
    },
    BenchCase {
        name: "position_3",
        fen: POSITION_3_FEN,
        expected_nodes: &[14, 191, 2812, 43_238],
    },
    BenchCase {
        name: "position_4",
        fen: "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        expected_nodes: &[6, 264, 9467],
    },
    BenchCase {
        name: "position_5",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        expected_nodes: &[44, 1486, 62_379],
    },
];

fn standard_suite() -> bool {
    matches!(std::env::var("MAILBOX_BENCH_SUITE"), Ok(value) if value.eq_ignore_ascii_case("standard"))
}

fn bench_perft(c: &mut Criterion) {
    let (suite_name, cases) = if standard_suite() {
        ("standard", CASES_STANDARD)
    } else {
        ("quick", CASES_QUICK)
    };

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in cases {
        let mut game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&mut game, depth);
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&mut game), black_box(depth));
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("negamax");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    let config = SearchConfig {
        use_opening_book: false,
        seed: Some(1),
        ..SearchConfig::default()
    };

    for (name, fen, depth) in [
        ("startpos_d3", STARTPOS_FEN, 3u8),
        ("kiwipete_d2", KIWIPETE_FEN, 2),
        ("position_3_d4", POSITION_3_FEN, 4),
    ] {
        let mut game = GameState::from_fen(fen).expect("benchmark FEN should parse");
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut context = SearchContext::new(config, PositionalScorer::default(), None);
                black_box(context.evaluate_position(black_box(&mut game), depth))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_perft, bench_search);
criterion_main!(benches);
