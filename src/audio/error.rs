use std::path::PathBuf;

/// Errors from the audio side: device setup, click delivery, sample loading
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    /// The click queue to the audio thread is full; the click is dropped
    #[error("click queue is full")]
    QueueFull,
    /// The audio thread has gone away
    #[error("audio engine is no longer running")]
    Disconnected,
    #[error("no default output device available")]
    NoOutputDevice,
    #[error("failed to fetch default output config")]
    OutputConfig(#[from] cpal::DefaultStreamConfigError),
    #[error("failed to build output stream")]
    BuildStream(#[from] cpal::BuildStreamError),
    #[error("failed to start output stream")]
    PlayStream(#[from] cpal::PlayStreamError),
    #[error("failed to read click sample {path:?}")]
    SampleRead {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
    #[error("click sample {0:?} contains no audio")]
    EmptySample(PathBuf),
}
