//! Composable building blocks for click voices.
//!
//! Graph nodes wrap the DSP primitives with trigger handling and block-based
//! rendering. `extensions` adds the fluent `.amplify()` combinator so voices
//! read as a short chain.

/// Multiply two signals together (envelope gating).
pub mod amplify;
/// Percussive envelope node.
pub mod envelope;
/// Fluent combinators (`.amplify()`).
pub mod extensions;
/// Core traits shared by all graph nodes.
pub mod node;
/// Sine and square oscillator nodes.
pub mod oscillator;

pub use node::{GraphNode, RenderCtx};
