//! Audio sinks - where the scheduler's clicks go
//!
//! The scheduler only knows [`AudioSink`]. Two real sinks forward clicks to
//! the audio thread over a [`ClickSender`]: [`ToneSink`] asks for a
//! synthesized tone, [`SampleSink`] asks for a recorded sample. Both return
//! as soon as the request is queued.

use super::{
    message::{ClickMessage, ClickSender},
    AudioError,
};

/// Anything that can make a metronome click
pub trait AudioSink {
    /// Fire-and-forget: returns once the click is requested, not played.
    fn play_click(&mut self, accented: bool) -> Result<(), AudioError>;
}

impl<S: AudioSink + ?Sized> AudioSink for Box<S> {
    fn play_click(&mut self, accented: bool) -> Result<(), AudioError> {
        (**self).play_click(accented)
    }
}

/// Pitch and level of the two synthesized clicks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSettings {
    pub accent_frequency: f32,
    pub regular_frequency: f32,
    pub accent_level: f32,
    pub regular_level: f32,
}

impl Default for ToneSettings {
    fn default() -> Self {
        Self {
            accent_frequency: 1_600.0,
            regular_frequency: 1_000.0,
            accent_level: 1.0,
            regular_level: 0.6,
        }
    }
}

impl ToneSettings {
    pub fn message(&self, accented: bool) -> ClickMessage {
        if accented {
            ClickMessage::Tone {
                frequency: self.accent_frequency,
                level: self.accent_level,
            }
        } else {
            ClickMessage::Tone {
                frequency: self.regular_frequency,
                level: self.regular_level,
            }
        }
    }
}

/// Synthesized clicks: accent and regular differ in pitch and level
pub struct ToneSink<S> {
    tx: S,
    settings: ToneSettings,
}

impl<S: ClickSender> ToneSink<S> {
    pub fn new(tx: S) -> Self {
        Self::with_settings(tx, ToneSettings::default())
    }

    pub fn with_settings(tx: S, settings: ToneSettings) -> Self {
        Self { tx, settings }
    }
}

impl<S: ClickSender> AudioSink for ToneSink<S> {
    fn play_click(&mut self, accented: bool) -> Result<(), AudioError> {
        self.tx.send(self.settings.message(accented))
    }
}

/// Sampled clicks: the audio thread plays the accent or regular sample
pub struct SampleSink<S> {
    tx: S,
}

impl<S: ClickSender> SampleSink<S> {
    pub fn new(tx: S) -> Self {
        Self { tx }
    }
}

impl<S: ClickSender> AudioSink for SampleSink<S> {
    fn play_click(&mut self, accented: bool) -> Result<(), AudioError> {
        self.tx.send(ClickMessage::Sample { accented })
    }
}

/// Sink for running without audio: counts clicks and plays nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink {
    clicks: u64,
}

impl SilentSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clicks(&self) -> u64 {
        self.clicks
    }
}

impl AudioSink for SilentSink {
    fn play_click(&mut self, _accented: bool) -> Result<(), AudioError> {
        self.clicks += 1;
        Ok(())
    }
}
