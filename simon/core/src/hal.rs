//! Capabilities the game needs from the board.
//!
//! Everything here is logical: `Level::On` means lit, `true` from
//! [`ButtonInput::is_pressed`] means held down. Pin polarity is the
//! binding's problem, see [`crate::board`].

use crate::symbol::{LedMask, Symbol};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Level {
    On,
    Off,
}

impl Level {
    #[inline]
    pub const fn is_on(self) -> bool {
        matches!(self, Level::On)
    }
}

/// Four LED channels. Writes are assumed immediate and idempotent.
pub trait LedOutput {
    fn set(&mut self, led: Symbol, level: Level);

    fn set_mask(&mut self, leds: LedMask, level: Level) {
        for led in leds.symbols() {
            self.set(led, level);
        }
    }
}

/// Four button channels. Reads are non-blocking and reflect the current level.
pub trait ButtonInput {
    fn is_pressed(&mut self, button: Symbol) -> bool;
}

/// Blocking time source. The game's only timing primitive.
pub trait TimeDaemon {
    fn sleep_ms(&mut self, ms: u32);
}

/// Sleeps the calling thread.
#[cfg(feature = "std")]
#[derive(Debug, Default, Copy, Clone)]
pub struct ThreadDaemon;

#[cfg(feature = "std")]
impl TimeDaemon for ThreadDaemon {
    fn sleep_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(ms as u64));
    }
}
