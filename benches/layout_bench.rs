// Benchmark for the per-render layout pass
// Measures column assignment over increasingly crowded days

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shift_grid::models::settings::GridConfig;
use shift_grid::models::shift::{ClockTime, Shift};
use shift_grid::services::layout::{assign_columns, layout_day};

fn crowded_day(count: usize) -> Vec<Shift> {
    let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    (0..count)
        .map(|i| {
            let start = ((i * 37) % 1380) as i64;
            let end = (start + 60 + ((i * 13) % 4) as i64 * 30).min(1440);
            Shift::builder()
                .id(format!("s{}", i))
                .date(date)
                .start(ClockTime::from_minutes(start).unwrap())
                .end(ClockTime::from_minutes(end).unwrap())
                .title("Bench")
                .build()
                .unwrap()
        })
        .collect()
}

fn bench_assign_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign_columns");

    for count in [10, 50, 200].iter() {
        let shifts = crowded_day(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &shifts, |b, shifts| {
            b.iter(|| assign_columns(black_box(shifts)));
        });
    }

    group.finish();
}

fn bench_layout_day(c: &mut Criterion) {
    let config = GridConfig::default();
    let shifts = crowded_day(50);
    c.bench_function("layout_day_50", |b| {
        b.iter(|| layout_day(black_box(&shifts), black_box(&config)));
    });
}

criterion_group!(benches, bench_assign_columns, bench_layout_day);
criterion_main!(benches);
