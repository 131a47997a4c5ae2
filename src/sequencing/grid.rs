//! Beat grid - how one measure divides into ticks
//!
//! Pure arithmetic over tempo, time signature, subdivision and accents.
//! Nothing here knows about timers or audio.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::time::Duration;

use super::{AccentSet, MeterError, SubdivisionKind, Tempo, TimeSignature};

/// The sound a tick makes
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    /// Accented click (louder/higher)
    Accent,
    /// Plain click
    Regular,
}

impl Click {
    pub fn is_accent(&self) -> bool {
        matches!(self, Click::Accent)
    }
}

/// Ticks per measure for `1/multiplier` ticks in `time_signature`.
///
/// numerator * (multiplier / denominator), which must come out whole.
pub fn total_subdivisions(
    time_signature: &TimeSignature,
    multiplier: u32,
) -> Result<usize, MeterError> {
    time_signature.total_subdivisions(multiplier)
}

/// Milliseconds between ticks: 60000 / bpm / (multiplier / denominator).
///
/// `bpm` is clamped the same way [`Tempo`] clamps it.
pub fn interval_ms(bpm: f64, time_signature: &TimeSignature, multiplier: u32) -> f64 {
    Tempo::new(bpm).beat_ms() / time_signature.ticks_per_beat(multiplier)
}

/// A time signature paired with a subdivision that divides it evenly
///
/// Serialized as the signature and subdivision only; the tick count is
/// recomputed on the way in.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "BeatGridRepr", into = "BeatGridRepr")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeatGrid {
    time_signature: TimeSignature,
    subdivision: SubdivisionKind,
    total: usize,
}

impl BeatGrid {
    /// Pair a signature with a subdivision.
    ///
    /// Fails with [`MeterError::Incompatible`] when the measure does not split
    /// into a whole number of ticks.
    pub fn new(
        time_signature: TimeSignature,
        subdivision: SubdivisionKind,
    ) -> Result<Self, MeterError> {
        let total = total_subdivisions(&time_signature, subdivision.multiplier())?;
        Ok(Self {
            time_signature,
            subdivision,
            total,
        })
    }

    /// Grid counting the signature's own beat unit. Never fails.
    pub fn beat_unit(time_signature: TimeSignature) -> Self {
        let subdivision = SubdivisionKind::beat_unit_of(&time_signature);
        Self {
            time_signature,
            subdivision,
            total: time_signature.numerator() as usize,
        }
    }

    pub fn time_signature(&self) -> TimeSignature {
        self.time_signature
    }

    pub fn subdivision(&self) -> SubdivisionKind {
        self.subdivision
    }

    /// Ticks per measure. Always at least one.
    pub fn total_subdivisions(&self) -> usize {
        self.total
    }

    /// Time between ticks at `tempo`, in milliseconds.
    pub fn interval_ms(&self, tempo: Tempo) -> f64 {
        interval_ms(tempo.bpm(), &self.time_signature, self.subdivision.multiplier())
    }

    /// Time between ticks at `tempo`.
    pub fn interval(&self, tempo: Tempo) -> Duration {
        Duration::from_secs_f64(self.interval_ms(tempo) / 1000.0)
    }

    /// The tick after `tick`, wrapping at the end of the measure.
    pub fn next_tick(&self, tick: usize) -> usize {
        (tick + 1) % self.total
    }

    pub fn is_audible(&self, tick: usize) -> bool {
        self.subdivision.is_audible(tick)
    }

    /// What sounds at `tick`, `None` for a silent slot of a compound pattern.
    pub fn click_at(&self, tick: usize, accents: &AccentSet) -> Option<Click> {
        if !self.is_audible(tick) {
            return None;
        }
        Some(if accents.is_accented(tick) {
            Click::Accent
        } else {
            Click::Regular
        })
    }

    /// Zero-based beat that `tick` falls in (for display).
    pub fn beat_of(&self, tick: usize) -> usize {
        tick * self.time_signature.numerator() as usize / self.total
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BeatGridRepr {
    time_signature: TimeSignature,
    subdivision: SubdivisionKind,
}

#[cfg(feature = "serde")]
impl TryFrom<BeatGridRepr> for BeatGrid {
    type Error = MeterError;

    fn try_from(repr: BeatGridRepr) -> Result<Self, Self::Error> {
        Self::new(repr.time_signature, repr.subdivision)
    }
}

#[cfg(feature = "serde")]
impl From<BeatGrid> for BeatGridRepr {
    fn from(grid: BeatGrid) -> Self {
        Self {
            time_signature: grid.time_signature,
            subdivision: grid.subdivision,
        }
    }
}

impl Default for BeatGrid {
    fn default() -> Self {
        Self::beat_unit(TimeSignature::FOUR_FOUR)
    }
}
