#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::{fmt, str::FromStr};

use super::error::MeterError;

/// Time signature of a measure
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TimeSignatureRepr"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSignature {
    /// Number of beats per measure (top number)
    numerator: u8,
    /// Note value that gets one beat (bottom number: 4 = quarter, 8 = eighth)
    denominator: u8,
}

impl TimeSignature {
    /// Beat units a signature may use.
    pub const BEAT_UNITS: [u8; 2] = [4, 8];

    pub const TWO_FOUR: TimeSignature = TimeSignature::unchecked(2, 4);
    pub const THREE_FOUR: TimeSignature = TimeSignature::unchecked(3, 4);
    /// Standard 4/4 time
    pub const FOUR_FOUR: TimeSignature = TimeSignature::unchecked(4, 4);
    pub const FIVE_FOUR: TimeSignature = TimeSignature::unchecked(5, 4);
    /// 6/8 time (compound duple)
    pub const SIX_EIGHT: TimeSignature = TimeSignature::unchecked(6, 8);
    pub const SEVEN_EIGHT: TimeSignature = TimeSignature::unchecked(7, 8);
    /// 9/8 time (compound triple)
    pub const NINE_EIGHT: TimeSignature = TimeSignature::unchecked(9, 8);
    /// 12/8 time (compound quadruple)
    pub const TWELVE_EIGHT: TimeSignature = TimeSignature::unchecked(12, 8);

    /// Signatures offered when cycling through presets, in display order.
    pub const PRESETS: [TimeSignature; 8] = [
        Self::TWO_FOUR,
        Self::THREE_FOUR,
        Self::FOUR_FOUR,
        Self::FIVE_FOUR,
        Self::SIX_EIGHT,
        Self::SEVEN_EIGHT,
        Self::NINE_EIGHT,
        Self::TWELVE_EIGHT,
    ];

    const fn unchecked(numerator: u8, denominator: u8) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Create a time signature.
    ///
    /// The numerator must be at least one and the denominator must be one of
    /// [`TimeSignature::BEAT_UNITS`].
    pub fn new(numerator: u8, denominator: u8) -> Result<Self, MeterError> {
        if numerator == 0 {
            return Err(MeterError::EmptyMeasure);
        }
        if !Self::BEAT_UNITS.contains(&denominator) {
            return Err(MeterError::UnsupportedBeatUnit(denominator));
        }
        Ok(Self::unchecked(numerator, denominator))
    }

    pub fn numerator(&self) -> u8 {
        self.numerator
    }

    pub fn denominator(&self) -> u8 {
        self.denominator
    }

    /// Number of ticks in one measure when each tick is a `1/multiplier` note.
    ///
    /// Formula: numerator * (multiplier / denominator). Fails when the
    /// measure does not split into a whole number of ticks (for example whole
    /// notes in 3/4).
    pub fn total_subdivisions(&self, multiplier: u32) -> Result<usize, MeterError> {
        let scaled = self.numerator as u32 * multiplier;
        let denominator = self.denominator as u32;

        if multiplier == 0 || scaled % denominator != 0 {
            return Err(MeterError::Incompatible {
                time_signature: *self,
                multiplier,
            });
        }
        Ok((scaled / denominator) as usize)
    }

    /// How many ticks of a `1/multiplier` note fit in one beat. May be
    /// fractional (a half-note tick spans two quarter beats).
    pub fn ticks_per_beat(&self, multiplier: u32) -> f64 {
        multiplier as f64 / self.denominator as f64
    }

    /// The preset after this one, wrapping around. Signatures that are not
    /// presets restart the cycle.
    pub fn next_preset(&self) -> Self {
        match Self::PRESETS.iter().position(|ts| ts == self) {
            Some(i) => Self::PRESETS[(i + 1) % Self::PRESETS.len()],
            None => Self::PRESETS[0],
        }
    }

    /// The preset before this one, wrapping around.
    pub fn previous_preset(&self) -> Self {
        let len = Self::PRESETS.len();
        match Self::PRESETS.iter().position(|ts| ts == self) {
            Some(i) => Self::PRESETS[(i + len - 1) % len],
            None => Self::PRESETS[len - 1],
        }
    }
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self::FOUR_FOUR
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Unchecked wire form, validated through [`TimeSignature::new`]
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct TimeSignatureRepr {
    numerator: u8,
    denominator: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<TimeSignatureRepr> for TimeSignature {
    type Error = MeterError;

    fn try_from(repr: TimeSignatureRepr) -> Result<Self, Self::Error> {
        Self::new(repr.numerator, repr.denominator)
    }
}

/// Parses `"N/D"`, e.g. `"6/8"`.
impl FromStr for TimeSignature {
    type Err = MeterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MeterError::Malformed(s.to_string());
        let (top, bottom) = s.split_once('/').ok_or_else(malformed)?;
        let numerator = top.trim().parse().map_err(|_| malformed())?;
        let denominator = bottom.trim().parse().map_err(|_| malformed())?;
        Self::new(numerator, denominator)
    }
}
