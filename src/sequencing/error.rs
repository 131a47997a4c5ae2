use super::TimeSignature;

/// Errors raised when a meter configuration is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeterError {
    /// A measure needs at least one beat
    #[error("time signature needs at least one beat per measure")]
    EmptyMeasure,
    /// Beat unit other than a quarter or eighth note
    #[error("unsupported beat unit {0} (expected 4 or 8)")]
    UnsupportedBeatUnit(u8),
    /// Text that is not of the form `N/D`
    #[error("cannot parse time signature from {0:?} (expected e.g. \"4/4\")")]
    Malformed(String),
    /// The measure does not split into a whole number of ticks
    #[error("{time_signature} does not divide into whole 1/{multiplier} ticks")]
    Incompatible {
        time_signature: TimeSignature,
        multiplier: u32,
    },
}
