//! Pre-built click voices.
//!
//! Each voice is a small node graph. The click engine retriggers it with the
//! pitch and level of every click, so accents and plain clicks share a voice.
//!
//! # Example
//!
//! ```ignore
//! use saavy_metronome::voices;
//!
//! let soft = voices::beep();
//! let hard = voices::woodblock();
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use strum::{Display, EnumIter, EnumString};

use crate::graph::GraphNode;

mod beep;
mod woodblock;

pub use beep::beep;
pub use woodblock::woodblock;

/// Voice selection for the tone sink
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum VoiceKind {
    #[default]
    Beep,
    Woodblock,
}

impl VoiceKind {
    /// Build the voice graph, boxed for runtime selection.
    pub fn build(&self) -> Box<dyn GraphNode> {
        match self {
            VoiceKind::Beep => Box::new(beep()),
            VoiceKind::Woodblock => Box::new(woodblock()),
        }
    }
}
