//! Audio side of the metronome.
//!
//! The scheduler talks to an [`AudioSink`]. The tone and sample sinks queue
//! [`ClickMessage`]s for a [`ClickEngine`] running inside the cpal callback
//! of an [`AudioOutput`].

pub mod engine;
pub mod error;
pub mod message;
pub mod output;
pub mod sample;
pub mod sink;

pub use engine::ClickEngine;
pub use error::AudioError;
#[cfg(feature = "rtrb")]
pub use message::click_queue;
pub use message::{ClickMessage, ClickReceiver, ClickSender};
pub use output::AudioOutput;
pub use sample::{ClickSample, SampleBank, SamplePlayer};
pub use sink::{AudioSink, SampleSink, SilentSink, ToneSettings, ToneSink};
