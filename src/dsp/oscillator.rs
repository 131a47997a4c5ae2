#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::f32::consts::TAU;

use crate::graph::node::RenderCtx;

/*
Click Oscillator
================

A metronome click is a very short burst of a bright tone, so two waveforms
cover it:

  Sine    pure tone, reads as a soft "beep"
  Square  odd harmonics, reads as a hard "tock" once an envelope chops it short

The oscillator keeps a phase in [0, 1) and advances it by frequency /
sample_rate each sample. Retriggering resets the phase so every click starts
on the same waveform point and sounds identical.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OscillatorWaveform {
    Sine,
    Square,
}

#[derive(Debug, Clone)]
pub struct OscillatorBlock {
    waveform: OscillatorWaveform,
    phase: f32,
}

impl OscillatorBlock {
    pub fn new(waveform: OscillatorWaveform) -> Self {
        Self {
            waveform,
            phase: 0.0,
        }
    }

    pub fn sine() -> Self {
        Self::new(OscillatorWaveform::Sine)
    }

    pub fn square() -> Self {
        Self::new(OscillatorWaveform::Square)
    }

    /// Restart from phase zero.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Fill `out` with the waveform at `ctx.frequency`.
    pub fn render(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let increment = ctx.frequency / ctx.sample_rate;

        for sample in out.iter_mut() {
            *sample = match self.waveform {
                OscillatorWaveform::Sine => (TAU * self.phase).sin(),
                OscillatorWaveform::Square => {
                    if self.phase < 0.5 {
                        1.0
                    } else {
                        -1.0
                    }
                }
            };

            self.phase += increment;
            if self.phase >= 1.0 {
                self.phase -= self.phase.floor();
            }
        }
    }
}
