//! AudioOutput - runs a click engine on the default output device

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use crate::MAX_BLOCK_SIZE;

use super::{engine::ClickEngine, message::ClickReceiver, AudioError};

/// A playing cpal output stream. Dropping it stops audio.
pub struct AudioOutput {
    _stream: cpal::Stream,
    sample_rate: u32,
    channels: u16,
}

impl AudioOutput {
    /// Open the default output device and start rendering.
    ///
    /// `build_engine` receives the device sample rate so voices and samples
    /// can be prepared at the right rate.
    pub fn open<R, F>(build_engine: F) -> Result<Self, AudioError>
    where
        R: ClickReceiver + Send + 'static,
        F: FnOnce(f32) -> ClickEngine<R>,
    {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;
        let config = device.default_output_config()?;

        let sample_rate = config.sample_rate().0;
        let channels = config.channels();
        let channel_count = channels as usize;

        let mut engine = build_engine(sample_rate as f32);
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channel_count;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                    let block = &mut render_buf[..frames_to_render];
                    engine.render_block(block);

                    // Mono to all channels
                    let out_off = frames_written * channel_count;
                    for (i, &s) in block.iter().enumerate() {
                        for ch in 0..channel_count {
                            data[out_off + i * channel_count + ch] = s;
                        }
                    }

                    frames_written += frames_to_render;
                }
            },
            |err| tracing::error!(%err, "audio stream error"),
            None,
        )?;
        stream.play()?;

        let name = device.name().unwrap_or_else(|_| "unknown".into());
        tracing::info!(
            device = %name,
            sample_rate,
            channels,
            "audio output started"
        );

        Ok(Self {
            _stream: stream,
            sample_rate,
            channels,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }
}
