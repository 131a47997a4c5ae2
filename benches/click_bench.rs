//! Benchmarks for the click DSP and the beat clock.
//!
//! Run with: cargo bench
//!
//! Clicks are rendered inside the audio callback, so every block has to finish
//! well inside its real-time deadline.
//!
//! Reference timing at 48kHz sample rate:
//!   - 64 samples  = 1.33ms deadline
//!   - 128 samples = 2.67ms deadline
//!   - 256 samples = 5.33ms deadline
//!   - 512 samples = 10.67ms deadline
//!
//! Benchmark groups:
//!   - dsp/*        Low-level primitives (oscillator, envelope)
//!   - scenarios/*  Click engine blocks and scheduler ticks

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

criterion_group!(
    benches,
    // Low-level DSP primitives
    dsp::bench_oscillator,
    dsp::bench_envelope,
    // Real-world scenarios
    scenarios::bench_click_engine,
    scenarios::bench_scheduler,
);
criterion_main!(benches);
