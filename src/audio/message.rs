#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer};

use super::AudioError;

/// Request sent from the scheduler side to the audio thread
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickMessage {
    /// Retrigger the tone voice at `frequency` Hz with linear gain `level`
    Tone { frequency: f32, level: f32 },
    /// Play the accent or regular sample from the sample bank
    Sample { accented: bool },
}

/// Control-side end of the click queue
pub trait ClickSender {
    /// Queue a click without blocking.
    fn send(&mut self, message: ClickMessage) -> Result<(), AudioError>;
}

/// Audio-thread end of the click queue
pub trait ClickReceiver {
    fn pop(&mut self) -> Option<ClickMessage>;
}

#[cfg(feature = "rtrb")]
impl ClickSender for Producer<ClickMessage> {
    fn send(&mut self, message: ClickMessage) -> Result<(), AudioError> {
        if self.is_abandoned() {
            return Err(AudioError::Disconnected);
        }
        self.push(message).map_err(|_| AudioError::QueueFull)
    }
}

#[cfg(feature = "rtrb")]
impl ClickReceiver for Consumer<ClickMessage> {
    fn pop(&mut self) -> Option<ClickMessage> {
        Consumer::pop(self).ok()
    }
}

/// Capacity of the click queue. Clicks arrive at most a few dozen per second,
/// so this only fills if the audio thread has stalled.
#[cfg(feature = "rtrb")]
pub const CLICK_QUEUE_SIZE: usize = 64;

/// Create a click queue.
#[cfg(feature = "rtrb")]
pub fn click_queue() -> (Producer<ClickMessage>, Consumer<ClickMessage>) {
    rtrb::RingBuffer::new(CLICK_QUEUE_SIZE)
}
