#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{graph::node::RenderCtx, MIN_TIME};

/*
Percussive Envelope
===================

A click has no sustain: it jumps up and dies away. This is an
attack/decay envelope with no gate to hold.

  Level
    1.0 ┐  ╱╲
        │ ╱  ╲
        │╱    ╲
    0.0 └──────╲────→ Time
        A   D

  attack  seconds to ramp 0 → 1
  decay   seconds to ramp 1 → 0

Both ramps are linear. The per-sample step is

    increment = 1.0 / (time_seconds * sample_rate)

so a 2 ms attack at 48 kHz takes 96 samples.

Triggering while a click is still ringing restarts the attack from zero;
clicks at fast tempos stay distinct instead of smearing together.


State Machine
-------------

    ┌──────┐  trigger  ┌────────┐  level=1  ┌───────┐
    │ Idle │ ────────→ │ Attack │ ────────→ │ Decay │
    └──────┘           └────────┘           └───────┘
        ↑                                       │
        └────────────── level=0 ────────────────┘
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeState {
    Idle,
    Attack,
    Decay,
}

#[derive(Debug, Clone)]
pub struct Envelope {
    attack_time: f32,
    decay_time: f32,

    stage: EnvelopeState,
    level: f32,
}

impl Envelope {
    pub fn new(attack: f32, decay: f32) -> Self {
        Self {
            attack_time: attack.max(MIN_TIME),
            decay_time: decay.max(MIN_TIME),
            stage: EnvelopeState::Idle,
            level: 0.0,
        }
    }

    /// Start a new click from silence.
    pub fn trigger(&mut self) {
        self.level = 0.0;
        self.stage = EnvelopeState::Attack;
    }

    /// Advance by one sample.
    pub fn next_sample(&mut self, ctx: &RenderCtx) {
        match self.stage {
            EnvelopeState::Idle => {
                self.level = 0.0;
            }

            EnvelopeState::Attack => {
                self.level += 1.0 / (self.attack_time * ctx.sample_rate);
                if self.level >= 1.0 {
                    self.level = 1.0;
                    self.stage = EnvelopeState::Decay;
                }
            }

            EnvelopeState::Decay => {
                self.level -= 1.0 / (self.decay_time * ctx.sample_rate);
                if self.level <= 0.0 {
                    self.level = 0.0;
                    self.stage = EnvelopeState::Idle;
                }
            }
        }

        debug_assert!((0.0..=1.0).contains(&self.level));
    }

    /// Render a block of envelope levels.
    pub fn render(&mut self, buffer: &mut [f32], ctx: &RenderCtx) {
        for sample in buffer.iter_mut() {
            self.next_sample(ctx);
            *sample = self.level;
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.stage, EnvelopeState::Idle)
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn state(&self) -> EnvelopeState {
        self.stage
    }
}
