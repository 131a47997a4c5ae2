//! Woodblock voice.
//!
//! A square wave chopped by a very short envelope. The odd harmonics give the
//! hollow "tock" of a wooden click and the decay is short enough that even
//! sixteenths at 300 bpm stay separate.

use crate::graph::{envelope::EnvNode, extensions::NodeExt, oscillator::OscNode, GraphNode};

/// Create a woodblock voice. Pitch follows the click (accent vs regular).
pub fn woodblock() -> impl GraphNode {
    OscNode::square().amplify(EnvNode::percussive(0.0005, 0.012))
}
