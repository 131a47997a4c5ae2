//! ClickEngine - renders clicks in the audio callback
//!
//! Drains [`ClickMessage`]s at the start of every block and starts the
//! requested sound. Clicks therefore land on block boundaries; the
//! scheduler's timer is coarser than that anyway.

use crate::{
    graph::{GraphNode, RenderCtx},
    MAX_BLOCK_SIZE,
};

use super::{
    message::{ClickMessage, ClickReceiver},
    sample::{SampleBank, SamplePlayer},
};

pub struct ClickEngine<R> {
    rx: R,
    sample_rate: f32,
    /// Tone voice, retriggered by `ClickMessage::Tone`
    voice: Box<dyn GraphNode>,
    frequency: f32,
    /// Click level, handed to the voice as velocity
    level: f32,
    /// Sample playback, only present when a bank was supplied
    samples: Option<SamplePlayer>,
    gain: f32,
    scratch: Vec<f32>,
}

impl<R: ClickReceiver> ClickEngine<R> {
    pub fn new(sample_rate: f32, voice: Box<dyn GraphNode>, rx: R) -> Self {
        Self {
            rx,
            sample_rate,
            voice,
            frequency: 1_000.0,
            level: 0.0,
            samples: None,
            gain: 1.0,
            scratch: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    /// Enable sample playback from `bank`.
    pub fn with_samples(mut self, bank: SampleBank) -> Self {
        self.samples = Some(SamplePlayer::new(bank, self.sample_rate));
        self
    }

    /// Master gain, clamped to 0.0-1.0.
    pub fn with_gain(mut self, gain: f32) -> Self {
        self.gain = gain.clamp(0.0, 1.0);
        self
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Whether anything is still sounding.
    pub fn is_active(&self) -> bool {
        self.voice.is_active() || self.samples.as_ref().is_some_and(|p| p.is_active())
    }

    /// Render mono output. Blocks longer than `MAX_BLOCK_SIZE` are split.
    pub fn render_block(&mut self, out: &mut [f32]) {
        self.drain_messages();

        for block in out.chunks_mut(MAX_BLOCK_SIZE) {
            self.render_chunk(block);
        }
    }

    fn drain_messages(&mut self) {
        while let Some(message) = self.rx.pop() {
            match message {
                ClickMessage::Tone { frequency, level } => {
                    self.frequency = frequency;
                    self.level = level;
                    let ctx = self.ctx();
                    self.voice.note_on(&ctx);
                }
                ClickMessage::Sample { accented } => {
                    // Without a bank there is nothing to play
                    if let Some(player) = self.samples.as_mut() {
                        player.trigger(accented);
                    }
                }
            }
        }
    }

    fn render_chunk(&mut self, out: &mut [f32]) {
        out.fill(0.0);

        if self.voice.is_active() {
            let ctx = self.ctx();
            let tone = &mut self.scratch[..out.len()];
            self.voice.render_block(tone, &ctx);
            for (o, t) in out.iter_mut().zip(tone.iter()) {
                *o += *t;
            }
        }

        if let Some(player) = self.samples.as_mut() {
            player.render_add(out);
        }

        for o in out.iter_mut() {
            *o = (*o * self.gain).clamp(-1.0, 1.0);
        }
    }

    fn ctx(&self) -> RenderCtx {
        RenderCtx::from_freq(self.sample_rate, self.frequency, self.level)
    }
}
