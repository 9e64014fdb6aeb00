use log::{debug, info, warn};
use rand_core::RngCore;

use crate::config::{SEQUENCE_LENGTH, Timings};
use crate::hal::{ButtonInput, LedOutput, Level, TimeDaemon};
use crate::input::sample_input;
use crate::sequence::Sequence;
use crate::symbol::{LedMask, Symbol};

/// What a checked press did to the round.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Correct, and more symbols remain. `cursor` is the new position.
    Advanced { cursor: usize },
    /// Correct, and it was the last symbol. A new round has been played back.
    Won,
    /// Wrong button. A new round has been played back.
    Lost { pressed: Symbol, expected: Symbol },
}

impl Verdict {
    pub const fn ends_round(&self) -> bool {
        !matches!(self, Verdict::Advanced { .. })
    }
}

/// One active round: the target sequence and how far the player got.
///
/// Owns the I/O, the random source and the clock; nothing else touches them
/// while a game runs.
pub struct SequenceEngine<Io, R, T> {
    io: Io,
    rng: R,
    clock: T,
    timings: Timings,

    sequence: Sequence,
    cursor: usize,
    generation: u32,
}

impl<Io, R, T> SequenceEngine<Io, R, T>
where
    Io: LedOutput + ButtonInput,
    R: RngCore,
    T: TimeDaemon,
{
    /// Generates the first sequence. Nothing is shown until [`Self::show_sequence`].
    pub fn new(io: Io, mut rng: R, clock: T, timings: Timings) -> Self {
        let sequence = Sequence::generate(&mut rng);
        Self {
            io,
            rng,
            clock,
            timings,
            sequence,
            cursor: 0,
            generation: 1,
        }
    }

    /// Overwrites the sequence with fresh draws. Leaves the cursor alone.
    pub fn generate_sequence(&mut self) {
        self.sequence.regenerate(&mut self.rng);
        self.generation += 1;
    }

    /// Plays the sequence back one LED at a time. Blocks for [`Timings::playback_ms`].
    pub fn show_sequence(&mut self) {
        debug!("playing back sequence #{}", self.generation);
        for i in 0..SEQUENCE_LENGTH {
            let led = self.sequence[i];
            self.io.set(led, Level::On);
            self.clock.sleep_ms(self.timings.show_on_ms);
            self.io.set(led, Level::Off);
            self.clock.sleep_ms(self.timings.show_off_ms);
            self.clock.sleep_ms(self.timings.show_gap_ms);
        }
    }

    /// Lowest-numbered held button, if any. Never changes engine state.
    pub fn sample_input(&mut self) -> Option<Symbol> {
        sample_input(&mut self.io)
    }

    /// Matches one press against the sequence and moves the round along.
    pub fn check_button(&mut self, pressed: Symbol) -> Verdict {
        let expected = self.sequence[self.cursor];

        if pressed != expected {
            warn!("Wrong button! Game over! You clicked button number {pressed}.");
            self.blink_all_leds();
            self.start_round();
            return Verdict::Lost { pressed, expected };
        }

        self.blink_led(pressed, self.timings.match_flash_ms);
        self.cursor += 1;

        if self.cursor == SEQUENCE_LENGTH {
            info!("You won!");
            self.start_round();
            Verdict::Won
        } else {
            Verdict::Advanced { cursor: self.cursor }
        }
    }

    pub fn blink_led(&mut self, led: Symbol, ms: u32) {
        self.io.set(led, Level::On);
        self.clock.sleep_ms(ms);
        self.io.set(led, Level::Off);
        self.clock.sleep_ms(ms);
    }

    /// Fail signal: every LED at once.
    pub fn blink_all_leds(&mut self) {
        self.io.set_mask(LedMask::all(), Level::On);
        self.clock.sleep_ms(self.timings.fail_flash_ms);
        self.io.set_mask(LedMask::all(), Level::Off);
    }

    pub fn pause(&mut self, ms: u32) {
        self.clock.sleep_ms(ms);
    }

    fn start_round(&mut self) {
        self.generate_sequence();
        self.cursor = 0;
        self.show_sequence();
    }
}

impl<Io, R, T> SequenceEngine<Io, R, T> {
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Index of the next expected symbol.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// How many sequences have been generated, the initial one included.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn io(&self) -> &Io {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut Io {
        &mut self.io
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn clock(&self) -> &T {
        &self.clock
    }
}
