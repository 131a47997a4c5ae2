pub mod accent;
pub mod error;
pub mod grid;
pub mod subdivision;
pub mod tempo;
pub mod time_signature;

pub use accent::AccentSet;
pub use error::MeterError;
pub use grid::{interval_ms, total_subdivisions, BeatGrid, Click};
pub use subdivision::SubdivisionKind;
pub use tempo::Tempo;
pub use time_signature::TimeSignature;
