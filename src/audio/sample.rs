//! Click samples - recorded or pre-rendered one-shots
//!
//! Samples are decoded once on the control thread and moved into the audio
//! thread inside a [`SamplePlayer`]; playback itself never allocates.

use std::path::Path;

use hound::{SampleFormat, WavReader};

use crate::{
    graph::{GraphNode, RenderCtx},
    MAX_BLOCK_SIZE,
};

use super::AudioError;

/// A mono one-shot at its own sample rate
#[derive(Debug, Clone, PartialEq)]
pub struct ClickSample {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl ClickSample {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate: sample_rate.max(1),
        }
    }

    /// Decode a WAV file, mixing all channels down to mono.
    pub fn from_wav(path: impl AsRef<Path>) -> Result<Self, AudioError> {
        let path = path.as_ref();
        let read_err = |source| AudioError::SampleRead {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = WavReader::open(path).map_err(read_err)?;
        let spec = reader.spec();

        let interleaved: Vec<f32> = match spec.sample_format {
            SampleFormat::Float => reader
                .samples::<f32>()
                .collect::<Result<_, _>>()
                .map_err(read_err)?,
            SampleFormat::Int => {
                let scale = (1i64 << (spec.bits_per_sample.max(1) - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / scale))
                    .collect::<Result<_, _>>()
                    .map_err(read_err)?
            }
        };

        let channels = spec.channels.max(1) as usize;
        let samples: Vec<f32> = interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect();

        if samples.is_empty() {
            return Err(AudioError::EmptySample(path.to_path_buf()));
        }

        tracing::debug!(
            ?path,
            frames = samples.len(),
            sample_rate = spec.sample_rate,
            channels,
            "loaded click sample"
        );
        Ok(Self::new(samples, spec.sample_rate))
    }

    /// Render a voice offline into a sample of `seconds` length.
    pub fn render<N: GraphNode>(
        mut voice: N,
        sample_rate: u32,
        frequency: f32,
        level: f32,
        seconds: f32,
    ) -> Self {
        let ctx = RenderCtx::from_freq(sample_rate as f32, frequency, level);
        let frames = (seconds.max(0.0) * sample_rate as f32).round() as usize;
        let mut samples = vec![0.0f32; frames];

        voice.note_on(&ctx);
        for block in samples.chunks_mut(MAX_BLOCK_SIZE) {
            voice.render_block(block, &ctx);
        }

        Self::new(samples, sample_rate)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Linearly interpolated value at fractional frame `position`.
    fn value_at(&self, position: f64) -> Option<f32> {
        let index = position as usize;
        let current = *self.samples.get(index)?;
        let next = self.samples.get(index + 1).copied().unwrap_or(0.0);
        let frac = (position - index as f64) as f32;
        Some(current + (next - current) * frac)
    }
}

/// The accent and regular samples
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBank {
    pub accent: ClickSample,
    pub regular: ClickSample,
}

impl SampleBank {
    pub fn new(accent: ClickSample, regular: ClickSample) -> Self {
        Self { accent, regular }
    }

    /// Load both samples from WAV files.
    pub fn from_wav_files(
        accent: impl AsRef<Path>,
        regular: impl AsRef<Path>,
    ) -> Result<Self, AudioError> {
        Ok(Self::new(
            ClickSample::from_wav(accent)?,
            ClickSample::from_wav(regular)?,
        ))
    }

    /// Built-in woodblock samples, rendered at `sample_rate`.
    pub fn woodblock(sample_rate: u32) -> Self {
        Self::new(
            ClickSample::render(crate::voices::woodblock(), sample_rate, 1_800.0, 1.0, 0.03),
            ClickSample::render(crate::voices::woodblock(), sample_rate, 1_200.0, 0.6, 0.03),
        )
    }

    pub fn get(&self, accented: bool) -> &ClickSample {
        if accented {
            &self.accent
        } else {
            &self.regular
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Playback {
    accented: bool,
    /// Position in source frames (fractional when resampling)
    position: f64,
}

/// Plays samples from a [`SampleBank`] at the device rate
#[derive(Debug)]
pub struct SamplePlayer {
    bank: SampleBank,
    output_rate: f32,
    playback: Option<Playback>,
}

impl SamplePlayer {
    pub fn new(bank: SampleBank, output_rate: f32) -> Self {
        Self {
            bank,
            output_rate: output_rate.max(1.0),
            playback: None,
        }
    }

    /// Start the accent or regular sample from its beginning, cutting off any
    /// sample still playing.
    pub fn trigger(&mut self, accented: bool) {
        self.playback = Some(Playback {
            accented,
            position: 0.0,
        });
    }

    pub fn is_active(&self) -> bool {
        self.playback.is_some()
    }

    /// Mix the playing sample into `out`.
    pub fn render_add(&mut self, out: &mut [f32]) {
        let Some(mut playback) = self.playback else {
            return;
        };

        let sample = self.bank.get(playback.accented);
        let step = sample.sample_rate() as f64 / self.output_rate as f64;

        for o in out.iter_mut() {
            match sample.value_at(playback.position) {
                Some(value) => *o += value,
                None => {
                    self.playback = None;
                    return;
                }
            }
            playback.position += step;
        }

        self.playback = if (playback.position as usize) < sample.len() {
            Some(playback)
        } else {
            None
        };
    }
}
