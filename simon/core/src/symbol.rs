use core::fmt::{Display, Formatter};

bitflags::bitflags! {
    /// A set of LEDs, one bit per symbol.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct LedMask: u8 {
        const ONE   = 0b0001;
        const TWO   = 0b0010;
        const THREE = 0b0100;
        const FOUR  = 0b1000;
    }
}

/// One of the four LED/button pairs on the board.
///
/// The discriminant is the number printed next to the button, which is
/// also what gets logged.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Symbol {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl Symbol {
    /// All symbols in button priority order.
    pub const ALL: [Symbol; 4] = [Symbol::One, Symbol::Two, Symbol::Three, Symbol::Four];

    /// Maps a raw random word onto the alphabet, `raw % 4 + 1`.
    #[inline]
    pub const fn from_random(raw: u32) -> Self {
        match raw % 4 {
            0 => Symbol::One,
            1 => Symbol::Two,
            2 => Symbol::Three,
            _ => Symbol::Four,
        }
    }

    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Symbol::One),
            2 => Some(Symbol::Two),
            3 => Some(Symbol::Three),
            4 => Some(Symbol::Four),
            _ => None,
        }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Zero-based channel index, used for pin tables and bit positions.
    #[inline]
    pub const fn idx(self) -> usize {
        self as usize - 1
    }

    #[inline]
    pub const fn mask(self) -> LedMask {
        LedMask::from_bits_truncate(1 << self.idx())
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl LedMask {
    /// Iterates the symbols in this mask in priority order.
    pub fn symbols(self) -> impl Iterator<Item = Symbol> {
        Symbol::ALL.into_iter().filter(move |s| self.contains(s.mask()))
    }
}
