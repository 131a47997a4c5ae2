#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use super::TimeSignature;

/*
Subdivisions
============

A subdivision is the note value one timer tick represents. The simple kinds
click on every tick; the multiplier says how many of them fill a whole note.

  Whole      1      Half       2      Quarter    4
  Eighth     8      Sixteenth  16

Compound kinds tick in sixteenths but only sound some of them. Each one
repeats a four-slot mask, so tick `i` sounds when `mask[i % 4]` is set:

  EighthSixteenthSixteenth   x . x x     (eighth, then two sixteenths)
  SixteenthSixteenthEighth   x x x .     (two sixteenths, then an eighth)
*/

/// Number of sixteenth slots a compound pattern repeats over.
pub const PATTERN_SLOTS: usize = 4;

/// The rhythmic unit a single tick represents
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum SubdivisionKind {
    Whole,
    Half,
    #[default]
    Quarter,
    Eighth,
    Sixteenth,
    EighthSixteenthSixteenth,
    SixteenthSixteenthEighth,
}

impl SubdivisionKind {
    /// How many ticks of this kind fill a whole note.
    pub fn multiplier(&self) -> u32 {
        match self {
            Self::Whole => 1,
            Self::Half => 2,
            Self::Quarter => 4,
            Self::Eighth => 8,
            Self::Sixteenth
            | Self::EighthSixteenthSixteenth
            | Self::SixteenthSixteenthEighth => 16,
        }
    }

    /// Slot mask for compound patterns, `None` for simple kinds.
    pub fn pattern(&self) -> Option<[bool; PATTERN_SLOTS]> {
        match self {
            Self::EighthSixteenthSixteenth => Some([true, false, true, true]),
            Self::SixteenthSixteenthEighth => Some([true, true, true, false]),
            _ => None,
        }
    }

    pub fn is_compound(&self) -> bool {
        self.pattern().is_some()
    }

    /// Whether the tick at `tick` makes a sound.
    pub fn is_audible(&self, tick: usize) -> bool {
        match self.pattern() {
            Some(mask) => mask[tick % PATTERN_SLOTS],
            None => true,
        }
    }

    /// Whether a measure of `time_signature` splits into whole ticks of this kind.
    pub fn fits(&self, time_signature: &TimeSignature) -> bool {
        time_signature.total_subdivisions(self.multiplier()).is_ok()
    }

    /// The simple kind matching a signature's beat unit (quarter for /4,
    /// eighth for /8). Always fits that signature.
    pub fn beat_unit_of(time_signature: &TimeSignature) -> Self {
        match time_signature.denominator() {
            8 => Self::Eighth,
            _ => Self::Quarter,
        }
    }

    /// Short label for display, e.g. `"1/8 1/16 1/16"`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Whole => "1/1",
            Self::Half => "1/2",
            Self::Quarter => "1/4",
            Self::Eighth => "1/8",
            Self::Sixteenth => "1/16",
            Self::EighthSixteenthSixteenth => "1/8 1/16 1/16",
            Self::SixteenthSixteenthEighth => "1/16 1/16 1/8",
        }
    }

    /// Next kind (wrapping) that fits `time_signature`.
    pub fn next_fitting(&self, time_signature: &TimeSignature) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let start = all.iter().position(|k| k == self).unwrap_or(0);
        (1..=all.len())
            .map(|step| all[(start + step) % all.len()])
            .find(|kind| kind.fits(time_signature))
            .unwrap_or(*self)
    }

    /// Previous kind (wrapping) that fits `time_signature`.
    pub fn previous_fitting(&self, time_signature: &TimeSignature) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let len = all.len();
        let start = all.iter().position(|k| k == self).unwrap_or(0);
        (1..=len)
            .map(|step| all[(start + len - step) % len])
            .find(|kind| kind.fits(time_signature))
            .unwrap_or(*self)
    }
}
