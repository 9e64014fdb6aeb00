//! Host-side stand-ins for the board, the clock and the random source.
//!
//! Nothing in here sleeps for real: [`VirtualClock`] just adds up the time it
//! was asked to wait. [`VirtualPanel`] and [`VirtualClock`] share a [`Trace`]
//! so LED changes and sleeps can be checked in the order they happened.

use alloc::rc::Rc;
use alloc::vec::Vec;
use bit_field::BitField;
use core::cell::RefCell;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand_core::{RngCore, impls};

use crate::board::GpioPort;
use crate::hal::{ButtonInput, LedOutput, Level, TimeDaemon};
use crate::symbol::{LedMask, Symbol};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SimEvent {
    Led(Symbol, Level),
    Sleep(u32),
}

/// Shared, append-only event log.
#[derive(Debug, Clone, Default)]
pub struct Trace(Rc<RefCell<Vec<SimEvent>>>);

impl Trace {
    pub fn push(&self, event: SimEvent) {
        self.0.borrow_mut().push(event);
    }

    /// Drains everything logged so far.
    pub fn take(&self) -> Vec<SimEvent> {
        core::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

/// Four LEDs and four buttons with nothing behind them.
#[derive(Debug)]
pub struct VirtualPanel {
    trace: Trace,
    lit: LedMask,
    max_lit: u32,
    held: u8,
}

impl VirtualPanel {
    pub fn new(trace: Trace) -> Self {
        Self {
            trace,
            lit: LedMask::empty(),
            max_lit: 0,
            held: 0,
        }
    }

    pub fn press(&mut self, button: Symbol) {
        self.held.set_bit(button.idx(), true);
    }

    pub fn release(&mut self, button: Symbol) {
        self.held.set_bit(button.idx(), false);
    }

    pub fn lit(&self) -> LedMask {
        self.lit
    }

    /// Most LEDs ever lit at the same time.
    pub fn max_lit(&self) -> u32 {
        self.max_lit
    }
}

impl LedOutput for VirtualPanel {
    fn set(&mut self, led: Symbol, level: Level) {
        self.lit.set(led.mask(), level.is_on());
        self.max_lit = self.max_lit.max(self.lit.bits().count_ones());
        self.trace.push(SimEvent::Led(led, level));
    }
}

impl ButtonInput for VirtualPanel {
    fn is_pressed(&mut self, button: Symbol) -> bool {
        self.held.get_bit(button.idx())
    }
}

#[derive(Debug)]
pub struct VirtualClock {
    trace: Trace,
    elapsed_ms: u64,
}

impl VirtualClock {
    pub fn new(trace: Trace) -> Self {
        Self { trace, elapsed_ms: 0 }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }
}

impl TimeDaemon for VirtualClock {
    fn sleep_ms(&mut self, ms: u32) {
        self.elapsed_ms += ms as u64;
        self.trace.push(SimEvent::Sleep(ms));
    }
}

/// Replays a fixed list of words forever and counts how many were drawn.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    words: Vec<u32>,
    pos: usize,
    calls: usize,
}

impl ScriptedRng {
    pub fn new(words: &[u32]) -> Self {
        Self {
            words: words.to_vec(),
            pos: 0,
            calls: 0,
        }
    }

    /// Number of `next_u32` draws so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.calls += 1;
        if self.words.is_empty() {
            return 0;
        }
        let word = self.words[self.pos];
        self.pos = (self.pos + 1) % self.words.len();
        word
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// A reproducible stand-in for the hardware RNG.
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VirtualPortError {
    Rejected(u8),
    NoSuchPin(u8),
}

/// Pins a [`VirtualPort`] has. Anything at or above this does not exist.
pub const VIRTUAL_PINS: u8 = 64;

/// A 64-pin GPIO controller. Pins can be told to refuse configuration.
///
/// Pins past [`VIRTUAL_PINS`] read low, ignore writes and refuse configuration.
#[derive(Debug, Default, Clone)]
pub struct VirtualPort {
    levels: u64,
    outputs: u64,
    inputs: u64,
    rejected: u64,
}

impl VirtualPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(&mut self, pin: u8) {
        if exists(pin) {
            self.rejected.set_bit(pin as usize, true);
        }
    }

    /// Drives a pin from outside, e.g. a button being pushed.
    pub fn drive(&mut self, pin: u8, high: bool) {
        if exists(pin) {
            self.levels.set_bit(pin as usize, high);
        }
    }

    pub fn level(&self, pin: u8) -> bool {
        exists(pin) && self.levels.get_bit(pin as usize)
    }

    pub fn is_output(&self, pin: u8) -> bool {
        exists(pin) && self.outputs.get_bit(pin as usize)
    }

    pub fn is_input(&self, pin: u8) -> bool {
        exists(pin) && self.inputs.get_bit(pin as usize)
    }

    fn check(&self, pin: u8) -> Result<(), VirtualPortError> {
        if !exists(pin) {
            return Err(VirtualPortError::NoSuchPin(pin));
        }
        if self.rejected.get_bit(pin as usize) {
            return Err(VirtualPortError::Rejected(pin));
        }
        Ok(())
    }
}

#[inline]
fn exists(pin: u8) -> bool {
    pin < VIRTUAL_PINS
}

impl GpioPort for VirtualPort {
    type Error = VirtualPortError;

    fn configure_output(&mut self, pin: u8) -> Result<(), Self::Error> {
        self.check(pin)?;
        self.inputs.set_bit(pin as usize, false);
        self.outputs.set_bit(pin as usize, true);
        Ok(())
    }

    fn configure_input(&mut self, pin: u8) -> Result<(), Self::Error> {
        self.check(pin)?;
        self.outputs.set_bit(pin as usize, false);
        self.inputs.set_bit(pin as usize, true);
        Ok(())
    }

    fn write(&mut self, pin: u8, high: bool) {
        if self.is_output(pin) {
            self.levels.set_bit(pin as usize, high);
        }
    }

    fn read(&mut self, pin: u8) -> bool {
        self.level(pin)
    }
}
