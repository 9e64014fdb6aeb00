use heapless::HistoryBuffer;
use log::info;
use rand_core::RngCore;

use crate::board::{Board, GpioPort, PinMap};
use crate::config::{GameConfig, InputMode};
use crate::engine::{SequenceEngine, Verdict};
use crate::error::BindError;
use crate::hal::{ButtonInput, LedOutput, TimeDaemon};
use crate::input::{ButtonState, PressLatch};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Won,
    Lost,
}

/// Results since boot. Kept in RAM only.
#[derive(Debug)]
pub struct Scoreboard {
    pub wins: u32,
    pub losses: u32,
    pub recent: HistoryBuffer<RoundOutcome, 8>,
}

impl Scoreboard {
    pub const fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            recent: HistoryBuffer::new(),
        }
    }

    pub fn record(&mut self, verdict: &Verdict) {
        match verdict {
            Verdict::Advanced { .. } => {}
            Verdict::Won => {
                self.wins += 1;
                self.recent.write(RoundOutcome::Won);
            }
            Verdict::Lost { .. } => {
                self.losses += 1;
                self.recent.write(RoundOutcome::Lost);
            }
        }
    }

    /// Consecutive wins ending with the latest round, as far back as `recent` remembers.
    pub fn streak(&self) -> usize {
        self.recent.oldest_ordered().fold(0, |run, o| match o {
            RoundOutcome::Won => run + 1,
            RoundOutcome::Lost => 0,
        })
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

/// The main loop around a [`SequenceEngine`].
pub struct Game<Io, R, T> {
    engine: SequenceEngine<Io, R, T>,
    config: GameConfig,
    latch: PressLatch,
    score: Scoreboard,
}

impl<Io, R, T> Game<Io, R, T>
where
    Io: LedOutput + ButtonInput,
    R: RngCore,
    T: TimeDaemon,
{
    pub fn new(io: Io, rng: R, clock: T, config: GameConfig) -> Self {
        Self {
            engine: SequenceEngine::new(io, rng, clock, config.timings),
            config,
            latch: PressLatch::new(),
            score: Scoreboard::new(),
        }
    }

    /// Shows the first sequence and gives the player a moment before polling starts.
    pub fn start(&mut self) {
        info!("starting, input mode {:?}", self.config.input_mode);
        self.engine.show_sequence();
        self.engine.pause(self.config.timings.start_pause_ms);
    }

    /// One pass of the main loop. `None` means no press was taken and nothing changed.
    pub fn poll(&mut self) -> Option<Verdict> {
        let pressed = match self.config.input_mode {
            InputMode::Level => self.engine.sample_input(),
            InputMode::Edge => {
                let state = ButtonState::read(self.engine.io_mut());
                self.latch.update(state)
            }
        }?;

        let verdict = self.engine.check_button(pressed);
        self.score.record(&verdict);
        self.engine.pause(self.config.timings.post_input_ms);
        Some(verdict)
    }

    pub fn run(mut self) -> ! {
        self.start();
        loop {
            self.poll();
        }
    }
}

impl<Io, R, T> Game<Io, R, T> {
    pub fn engine(&self) -> &SequenceEngine<Io, R, T> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SequenceEngine<Io, R, T> {
        &mut self.engine
    }

    pub fn score(&self) -> &Scoreboard {
        &self.score
    }
}

/// Binds the board and starts a game on it. Binding failures come back untouched
/// and no game logic runs.
pub fn boot<P, R, T>(
    label: &'static str,
    port: Option<P>,
    pins: PinMap,
    rng: R,
    clock: T,
    config: GameConfig,
) -> Result<Game<Board<P>, R, T>, BindError>
where
    P: GpioPort,
    R: RngCore,
    T: TimeDaemon,
{
    let board = Board::bind(label, port, pins)?;
    let mut game = Game::new(board, rng, clock, config);
    game.start();
    Ok(game)
}
