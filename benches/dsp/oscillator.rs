//! Benchmarks for the click oscillators.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_metronome::dsp::oscillator::OscillatorBlock;
use saavy_metronome::graph::RenderCtx;

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    let ctx = RenderCtx::from_freq(48_000.0, 1_600.0, 1.0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let mut osc = OscillatorBlock::sine();
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| osc.render(black_box(&mut buffer), black_box(&ctx)))
        });

        let mut osc = OscillatorBlock::square();
        group.bench_with_input(BenchmarkId::new("square", size), &size, |b, _| {
            b.iter(|| osc.render(black_box(&mut buffer), black_box(&ctx)))
        });
    }

    group.finish();
}
