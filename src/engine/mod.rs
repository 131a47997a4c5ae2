//! Beat clock: the scheduler and the timer/clock it runs on.

pub mod clock;
pub mod scheduler;
pub mod timer;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use scheduler::{MetronomeSnapshot, PlaybackState, Scheduler};
pub use timer::{IntervalTimer, Timer};
