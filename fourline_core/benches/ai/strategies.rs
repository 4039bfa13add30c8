//! `ai` の各戦略の性能計測（1手選択）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use fourline_core::ai::types::Ai;
use fourline_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// ベンチ用に代表局面をいくつか用意する（不正な棋譜は空盤で代用する）。
fn position_samples() -> [engine::Position; 3] {
    let p0 = engine::Position::standard();
    let p1 = engine::Position::from_moves(&[3, 3, 2, 4]).unwrap_or(p0);
    let p2 = engine::Position::from_moves(&[3, 3, 2, 4, 4, 2, 5, 1, 0, 6]).unwrap_or(p0);
    [p0, p1, p2]
}

/// 指定戦略の `Agent::select_move` を計測する。
fn bench_strategy(criterion: &mut Criterion, name: &str, config: ai::SearchConfig) {
    let samples = position_samples();
    let mut group = criterion.benchmark_group(format!("ai/{name}/select_move"));

    for (index, position) in samples.iter().enumerate() {
        let bench_id = BenchmarkId::new("pos", index);
        group.bench_with_input(bench_id, position, |bench, input| {
            bench.iter_batched(
                || (ai::Agent::seeded(config, u64::MIN), *input),
                |(mut agent, mut board)| black_box(agent.select_move(&mut board)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_strategy(&mut criterion, "minimax", ai::SearchConfig::default());
    bench_strategy(
        &mut criterion,
        "hill_climbing",
        ai::SearchConfig::new(ai::StrategyKind::HillClimbing),
    );
    bench_strategy(
        &mut criterion,
        "simulated_annealing",
        ai::SearchConfig::new(ai::StrategyKind::Annealing),
    );
    criterion.final_summary();
}
