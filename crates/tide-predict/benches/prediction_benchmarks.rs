//! Benchmarks for the tide prediction crate.
//!
//! Run with: cargo bench --package tide-predict
//! Or: cargo bench --package tide-predict --bench prediction_benchmarks

use chrono::{DateTime, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use tide_common::{cnes_julian_day, from_cnes_julian_day};
use tide_predict::{
    CoordinateBroadcaster, PredictionTable, RoundingMode, TideComponents,
    TidePredictionAssembler, TimeGrid, TimeGridBuilder,
};

fn year_range() -> (DateTime<Utc>, DateTime<Utc>) {
    (
        Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    )
}

fn year_grid() -> TimeGrid {
    let (start, end) = year_range();
    TimeGridBuilder::new().build(start, end).unwrap()
}

fn year_components(n: usize) -> TideComponents {
    TideComponents {
        short_tide: test_utils::create_ocean_tide_series(n),
        long_period_tide: test_utils::create_long_period_series(n),
        load_tide: test_utils::create_load_tide_series(n),
        load_long_period_tide: test_utils::create_constant_series(n, 0.0),
    }
}

fn year_table() -> PredictionTable {
    let grid = year_grid();
    let coords = CoordinateBroadcaster::default()
        .broadcast(59.195, -7.688, grid.len())
        .unwrap();
    TidePredictionAssembler::default()
        .assemble(&grid, &coords, &year_components(grid.len()))
        .unwrap()
}

// =============================================================================
// TIME CONVERSION BENCHMARKS
// =============================================================================

fn bench_julian_days(c: &mut Criterion) {
    let mut group = c.benchmark_group("julian_days");

    let ts = Utc.with_ymd_and_hms(1983, 1, 1, 13, 0, 0).unwrap();
    group.bench_function("to_cnes_julian_day", |b| {
        b.iter(|| cnes_julian_day(black_box(ts)))
    });

    group.bench_function("from_cnes_julian_day", |b| {
        b.iter(|| from_cnes_julian_day(black_box(12053.541_666_666_666)))
    });

    let values = test_utils::create_precision_series(1000, 7);
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("round_half_even_1000", |b| {
        b.iter(|| {
            for v in &values {
                black_box(RoundingMode::HalfEven.round(*v, 3));
            }
        })
    });

    group.finish();
}

// =============================================================================
// GRID BENCHMARKS
// =============================================================================

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    let (start, end) = year_range();

    group.throughput(Throughput::Elements(365 * 24));
    group.bench_function("build_year", |b| {
        b.iter(|| TimeGridBuilder::new().build(black_box(start), black_box(end)))
    });

    group.bench_function("broadcast_year", |b| {
        let broadcaster = CoordinateBroadcaster::default();
        b.iter(|| broadcaster.broadcast(black_box(59.195), black_box(-7.688), 365 * 24))
    });

    group.finish();
}

// =============================================================================
// ASSEMBLY BENCHMARKS
// =============================================================================

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");

    let grid = year_grid();
    let coords = CoordinateBroadcaster::default()
        .broadcast(59.195, -7.688, grid.len())
        .unwrap();
    let components = year_components(grid.len());
    let assembler = TidePredictionAssembler::default();

    group.throughput(Throughput::Elements(grid.len() as u64));
    group.bench_function("assemble_year", |b| {
        b.iter(|| assembler.assemble(black_box(&grid), &coords, &components))
    });

    group.finish();
}

// =============================================================================
// OUTPUT BENCHMARKS
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let table = year_table();

    group.throughput(Throughput::Elements(table.len() as u64));
    group.bench_function("to_json_year", |b| b.iter(|| black_box(&table).to_json()));
    group.bench_function("display_year", |b| {
        b.iter(|| black_box(&table).to_string())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_julian_days,
    bench_grid,
    bench_assemble,
    bench_output,
);
criterion_main!(benches);
