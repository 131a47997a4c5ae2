pub mod audio; // Click sinks, engine and device output
pub mod dsp;
pub mod engine; // Beat clock: scheduler, timer, clock
pub mod graph; // Composable click voices
pub mod sequencing; // Meter, subdivisions, accents, tempo
pub mod voices;

pub const MAX_BLOCK_SIZE: usize = 2048;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;
