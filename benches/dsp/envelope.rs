//! Benchmarks for the percussive click envelope.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_metronome::dsp::envelope::Envelope;
use saavy_metronome::graph::RenderCtx;

use crate::BLOCK_SIZES;

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");
    let ctx = RenderCtx::from_freq(48_000.0, 1_000.0, 1.0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Retriggered every block, so it never goes idle
        let mut env = Envelope::new(0.001, 0.04);
        group.bench_with_input(BenchmarkId::new("click", size), &size, |b, _| {
            b.iter(|| {
                env.trigger();
                env.render(black_box(&mut buffer), black_box(&ctx));
            })
        });

        // Idle between clicks
        let mut env = Envelope::new(0.001, 0.04);
        group.bench_with_input(BenchmarkId::new("idle", size), &size, |b, _| {
            b.iter(|| env.render(black_box(&mut buffer), black_box(&ctx)))
        });
    }

    group.finish();
}
