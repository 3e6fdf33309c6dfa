use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tourney_engine::{
    session::{LiveTournamentSession, evaluate},
    structure::{BlindLevel, TournamentSettings, clock, validate_prize_structures},
};

fn timer_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 19, 0, 0).unwrap()
}

/// Helper to build a schedule of `n` levels with a break every fifth stage
fn long_schedule(n: usize) -> Vec<BlindLevel> {
    (0..n)
        .map(|i| {
            if i % 5 == 4 {
                BlindLevel::break_for(10)
            } else {
                let big_blind = 100 * (i as i64 + 1);
                BlindLevel::new(i as u32 + 1, big_blind / 2, big_blind, 20)
            }
        })
        .collect()
}

/// Benchmark the clock at the end of schedules of increasing length
fn bench_current_level(c: &mut Criterion) {
    let mut group = c.benchmark_group("current_level_info");

    for n in [10, 50, 200] {
        let levels = long_schedule(n);
        let now = timer_start() + Duration::seconds(clock::total_duration_seconds(&levels) - 1);

        group.bench_with_input(BenchmarkId::from_parameter(n), &levels, |b, levels| {
            b.iter(|| clock::current_level_info(black_box(levels), timer_start(), now));
        });
    }

    group.finish();
}

/// Benchmark a full once-per-second evaluation pass
fn bench_session_tick(c: &mut Criterion) {
    let store = TournamentSettings::standard("Bench", 100);
    let mut session = LiveTournamentSession::new(1, 25_000).with_field(120, 37);
    session.start_timer(timer_start());
    let now = timer_start() + Duration::minutes(95);

    c.bench_function("session_tick", |b| {
        b.iter(|| evaluate(black_box(&store), black_box(&session), now));
    });
}

/// Benchmark validating the standard prize table
fn bench_validate_prizes(c: &mut Criterion) {
    let structures = TournamentSettings::standard("Bench", 100).prize_structures;

    c.bench_function("validate_prize_structures", |b| {
        b.iter(|| validate_prize_structures(black_box(&structures)));
    });
}

criterion_group!(
    benches,
    bench_current_level,
    bench_session_tick,
    bench_validate_prizes
);
criterion_main!(benches);
