//! `marubatsu_core::ai::alphabeta` の性能計測（1手選択）。

use core::hint::black_box;
use criterion::BenchmarkId;
use criterion::Criterion;
use marubatsu_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 1始まり番号の列で局面を作る（交互に着手）。
fn position_after(displays: &[u8]) -> engine::Position {
    let mut position = engine::Position::initial();

    for &display in displays {
        let square = match engine::Square::from_display_index(display) {
            Some(value) => value,
            None => continue,
        };
        position = match position.apply_move(square) {
            Ok(value) => value,
            Err(_err) => position,
        };
    }

    position
}

/// ベンチ用に代表局面をいくつか用意する（空盤、序盤、終盤）。
fn position_samples() -> [engine::Position; 3] {
    let p0 = engine::Position::initial();
    let p1 = position_after(&[5, 1]);
    let p2 = position_after(&[5, 1, 2, 8, 7, 3]);
    [p0, p1, p2]
}

/// `alphabeta::choose_move` を計測する。
fn bench_choose_move(criterion: &mut Criterion) {
    let samples = position_samples();
    let mut group = criterion.benchmark_group("ai/alphabeta/choose_move");

    for (index, position) in samples.iter().enumerate() {
        let bench_id = BenchmarkId::new("pos", index);
        group.bench_with_input(bench_id, position, |bench, input| {
            bench.iter(|| black_box(ai::alphabeta::choose_move(*input)));
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_choose_move(&mut criterion);
    criterion.final_summary();
}
