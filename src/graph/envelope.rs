use crate::{
    dsp::envelope::Envelope,
    graph::node::{GraphNode, RenderCtx},
};

/// Envelope node: renders the click's amplitude contour, scaled by
/// `ctx.velocity`
pub struct EnvNode {
    env: Envelope,
}

impl EnvNode {
    /// Attack/decay envelope, times in seconds.
    pub fn percussive(attack: f32, decay: f32) -> Self {
        Self {
            env: Envelope::new(attack, decay),
        }
    }
}

impl GraphNode for EnvNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.env.render(out, ctx);
        for sample in out.iter_mut() {
            *sample *= ctx.velocity;
        }
    }

    fn note_on(&mut self, _ctx: &RenderCtx) {
        self.env.trigger();
    }

    fn is_active(&self) -> bool {
        self.env.is_active()
    }
}
