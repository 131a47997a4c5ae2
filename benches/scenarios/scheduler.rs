//! Benchmarks for the beat clock's control-side work per tick.

use std::hint::black_box;

use criterion::Criterion;
use saavy_metronome::{
    audio::SilentSink,
    engine::{IntervalTimer, ManualClock, Scheduler},
    sequencing::{BeatGrid, SubdivisionKind, Tempo, TimeSignature},
};

pub fn bench_scheduler(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/scheduler");

    let grid = BeatGrid::new(TimeSignature::TWELVE_EIGHT, SubdivisionKind::EighthSixteenthSixteenth)
        .unwrap();
    let mut scheduler = Scheduler::new(SilentSink::new(), IntervalTimer::new(ManualClock::new()))
        .with_grid(grid, Tempo::new(180.0));
    scheduler.start();

    group.bench_function("tick", |b| b.iter(|| black_box(&mut scheduler).tick()));

    let clock = ManualClock::new();
    let mut scheduler = Scheduler::new(SilentSink::new(), IntervalTimer::new(clock.clone()));
    scheduler.start();
    let interval = scheduler.interval();
    group.bench_function("poll_fire", |b| {
        b.iter(|| {
            clock.advance(interval);
            black_box(scheduler.poll())
        })
    });

    group.bench_function("snapshot", |b| b.iter(|| black_box(scheduler.snapshot())));

    group.finish();
}
