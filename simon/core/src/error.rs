use core::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Direction::Input => f.write_str("input"),
            Direction::Output => f.write_str("output"),
        }
    }
}

/// The board could not be bound. Fatal: the game never starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("gpio device `{0}` is not available")]
    DeviceMissing(&'static str),
    #[error("failed to configure pin {pin} as {direction}")]
    PinConfig { pin: u8, direction: Direction },
}
