use crate::dsp::oscillator::OscillatorBlock;
use crate::graph::node::{GraphNode, RenderCtx};

/// Oscillator node. Plays at `ctx.frequency`, the pitch of the current click.
pub struct OscNode {
    osc: OscillatorBlock,
}

impl OscNode {
    fn new(osc: OscillatorBlock) -> Self {
        Self { osc }
    }

    pub fn sine() -> Self {
        Self::new(OscillatorBlock::sine())
    }

    pub fn square() -> Self {
        Self::new(OscillatorBlock::square())
    }
}

impl GraphNode for OscNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.osc.render(out, ctx);
    }

    fn note_on(&mut self, _ctx: &RenderCtx) {
        // Every click starts on the same waveform point
        self.osc.reset();
    }
}
