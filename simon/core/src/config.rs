//! # Game configuration
//!
//! Every delay the game uses, in milliseconds. The defaults are tuned for
//! the nRF52 DK board:
//!
//! | Field            | Default | Used by                                   |
//! |------------------|---------|-------------------------------------------|
//! | `show_on_ms`     | 500     | LED on-time during playback               |
//! | `show_off_ms`    | 500     | LED off-time during playback              |
//! | `show_gap_ms`    | 500     | extra hold between playback symbols       |
//! | `match_flash_ms` | 250     | on/off time of the flash after a match    |
//! | `fail_flash_ms`  | 300     | all-LED flash after a wrong button        |
//! | `post_input_ms`  | 200     | pause after any handled press             |
//! | `start_pause_ms` | 500     | pause after the first playback at boot    |

/// Number of symbols the player has to repeat to win a round.
pub const SEQUENCE_LENGTH: usize = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Timings {
    pub show_on_ms: u32,
    pub show_off_ms: u32,
    pub show_gap_ms: u32,
    pub match_flash_ms: u32,
    pub fail_flash_ms: u32,
    pub post_input_ms: u32,
    pub start_pause_ms: u32,
}

impl Timings {
    pub const DEFAULT: Timings = Timings {
        show_on_ms: 500,
        show_off_ms: 500,
        show_gap_ms: 500,
        match_flash_ms: 250,
        fail_flash_ms: 300,
        post_input_ms: 200,
        start_pause_ms: 500,
    };

    /// Wall time one full playback blocks for.
    pub const fn playback_ms(&self) -> u32 {
        SEQUENCE_LENGTH as u32 * (self.show_on_ms + self.show_off_ms + self.show_gap_ms)
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How a held button is turned into presses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Raw level polling. A button still held after the post-input pause
    /// is counted again.
    #[default]
    Level,
    /// Only a button that was released at the previous sample counts.
    ///
    /// Buttons are only seen when the loop polls, never during a flash,
    /// playback or pause. Releasing and re-pressing the same button inside
    /// that window looks like one long hold and is dropped; a different
    /// button pressed inside it still counts.
    Edge,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub timings: Timings,
    pub input_mode: InputMode,
}

impl GameConfig {
    pub const DEFAULT: GameConfig = GameConfig {
        timings: Timings::DEFAULT,
        input_mode: InputMode::Level,
    };

    pub const fn with_input_mode(mut self, input_mode: InputMode) -> Self {
        self.input_mode = input_mode;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
