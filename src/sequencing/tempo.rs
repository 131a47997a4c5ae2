#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::fmt;

/// Tempo in beats per minute, where a beat is the time signature's beat unit.
///
/// Always inside a playable range; construction clamps.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "f64"))]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tempo(f64);

impl Tempo {
    pub const MIN_BPM: f64 = 20.0;
    pub const MAX_BPM: f64 = 300.0;
    pub const DEFAULT_BPM: f64 = 120.0;

    /// Create a tempo. Values outside [`Tempo::MIN_BPM`, `Tempo::MAX_BPM`] are
    /// clamped, NaN falls back to the default.
    pub fn new(bpm: f64) -> Self {
        if bpm.is_nan() {
            return Self::default();
        }
        Self(bpm.clamp(Self::MIN_BPM, Self::MAX_BPM))
    }

    pub fn bpm(&self) -> f64 {
        self.0
    }

    /// This tempo moved by `delta` bpm, clamped.
    pub fn nudged(&self, delta: f64) -> Self {
        Self::new(self.0 + delta)
    }

    /// Length of one beat in milliseconds.
    pub fn beat_ms(&self) -> f64 {
        60_000.0 / self.0
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self(Self::DEFAULT_BPM)
    }
}

impl From<f64> for Tempo {
    fn from(bpm: f64) -> Self {
        Self::new(bpm)
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} bpm", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_range() {
        assert_eq!(Tempo::new(5.0).bpm(), 20.0);
        assert_eq!(Tempo::new(999.0).bpm(), 300.0);
        assert_eq!(Tempo::new(96.0).bpm(), 96.0);
        assert_eq!(Tempo::new(f64::NAN), Tempo::default());
    }

    #[test]
    fn nudge_stays_in_range() {
        let tempo = Tempo::new(295.0);
        assert_eq!(tempo.nudged(10.0).bpm(), 300.0);
        assert_eq!(Tempo::new(25.0).nudged(-10.0).bpm(), 20.0);
    }

    #[test]
    fn beat_length() {
        assert_eq!(Tempo::new(120.0).beat_ms(), 500.0);
        assert_eq!(Tempo::new(60.0).beat_ms(), 1000.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_clamps() {
        assert_eq!(serde_json::to_string(&Tempo::new(96.0)).unwrap(), "96.0");
        assert_eq!(serde_json::from_str::<Tempo>("0.0").unwrap().bpm(), Tempo::MIN_BPM);
        assert_eq!(serde_json::from_str::<Tempo>("1000.0").unwrap().bpm(), Tempo::MAX_BPM);
    }
}
