//! Low-level DSP primitives used by the graph nodes.
//!
//! Allocation-free and realtime-safe, so they can live inside the click
//! engine that runs in the audio callback.

/// Attack/decay envelope for percussive clicks.
pub mod envelope;
/// Sine and square oscillators.
pub mod oscillator;

pub use envelope::EnvelopeState;
