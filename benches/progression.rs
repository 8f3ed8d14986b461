use criterion::{black_box, criterion_group, criterion_main, Criterion};

use clan_progression::{ClanProgressState, LevelDefinition, LevelTable, ProgressionEngine};

fn wide_engine() -> ProgressionEngine {
    let levels = (1..=100u32)
        .map(|level| LevelDefinition::new(level, (level as i64 - 1) * 1_000))
        .collect();
    ProgressionEngine::new(LevelTable::new(levels).expect("valid table"))
}

fn bench_calculate_level(c: &mut Criterion) {
    let default_engine = ProgressionEngine::default();
    let wide = wide_engine();

    c.bench_function("calculate_level default table", |b| {
        b.iter(|| default_engine.calculate_level(black_box(8_500)))
    });
    c.bench_function("calculate_level 100 levels", |b| {
        b.iter(|| wide.calculate_level(black_box(42_500)))
    });
}

fn bench_add_experience(c: &mut Criterion) {
    let engine = ProgressionEngine::default();
    c.bench_function("add_experience", |b| {
        b.iter(|| {
            let mut state = ClanProgressState::new();
            for _ in 0..20 {
                engine.add_experience(&mut state, black_box(750));
            }
            state
        })
    });
}

criterion_group!(benches, bench_calculate_level, bench_add_experience);
criterion_main!(benches);
