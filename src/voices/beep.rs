//! Beep voice.
//!
//! A sine click: the classic electronic metronome sound. Pure tone, very
//! fast attack and a short decay, so the pitch is readable but it never
//! rings into the next tick.
//!
//! # Variations
//!
//! - Longer decay = softer, more "bell"
//! - Higher click pitch = cuts through a loud band better

use crate::graph::{envelope::EnvNode, extensions::NodeExt, oscillator::OscNode, GraphNode};

/// Create a beep voice. Pitch follows the click (accent vs regular).
pub fn beep() -> impl GraphNode {
    OscNode::sine().amplify(EnvNode::percussive(0.001, 0.04))
}
