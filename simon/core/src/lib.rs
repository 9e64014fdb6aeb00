//! # simon-core
//!
//! A "Simon says" memory game for boards with four LEDs and four buttons.
//!
//! The board plays back a sequence of ten LEDs; the player repeats it on the
//! buttons. A wrong button flashes every LED and starts over with a new
//! sequence, finishing the sequence does the same without the flash.
//!
//! ```text
//!   GpioPort ──► Board ──► SequenceEngine ◄── RngCore
//!    (pins)    (polarity)   (one round)   ◄── TimeDaemon
//!                               ▲
//!                             Game  (boot, poll, run)
//! ```
//!
//! Everything is blocking and single threaded. The crate is `no_std` and
//! only needs `alloc` for the [`sim`] module.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod hal;
pub mod input;
pub mod sequence;
pub mod sim;
pub mod symbol;

pub use board::{Board, GpioPort, PinMap};
pub use config::{GameConfig, InputMode, SEQUENCE_LENGTH, Timings};
pub use engine::{SequenceEngine, Verdict};
pub use error::{BindError, Direction};
pub use game::{Game, RoundOutcome, Scoreboard, boot};
pub use hal::{ButtonInput, LedOutput, Level, TimeDaemon};
pub use input::{ButtonState, PressLatch, sample_input};
pub use sequence::Sequence;
pub use symbol::{LedMask, Symbol};

#[cfg(feature = "std")]
pub use hal::ThreadDaemon;
