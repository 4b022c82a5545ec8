//! Benchmarks for the closed-form week numbering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mysql_time::{week_number, MysqlTime, WeekFlags};

fn bench_week_flags_from_mode(c: &mut Criterion) {
    c.bench_function("bench_week_flags_from_mode", |b| {
        b.iter(|| {
            for mode in 0u32..8 {
                black_box(WeekFlags::from_mode(black_box(mode)));
            }
        })
    });
}

fn bench_week_number(c: &mut Criterion) {
    // December 31 exercises the year-boundary branch for half the modes.
    let t = MysqlTime::new(2008, 12, 31, 0, 0, 0, 0);
    c.bench_function("bench_week_number", |b| {
        b.iter(|| {
            for mode in 0u32..8 {
                black_box(week_number(black_box(&t), WeekFlags::from_mode(mode)));
            }
        })
    });
}

criterion_group!(benches, bench_week_flags_from_mode, bench_week_number);
criterion_main!(benches);
