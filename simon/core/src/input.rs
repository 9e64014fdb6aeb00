use bit_field::BitField;

use crate::hal::ButtonInput;
use crate::symbol::Symbol;

/// Snapshot of all four buttons, bit `Symbol::idx()` set while held.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ButtonState(pub u8);

impl ButtonState {
    pub const NONE: ButtonState = ButtonState(0);

    pub fn read<B: ButtonInput + ?Sized>(buttons: &mut B) -> Self {
        let mut bits = 0u8;
        for button in Symbol::ALL {
            bits.set_bit(button.idx(), buttons.is_pressed(button));
        }
        ButtonState(bits)
    }

    #[inline]
    pub fn is_pressed(&self, button: Symbol) -> bool {
        self.0.get_bit(button.idx())
    }

    /// Lowest-numbered held button. Simultaneous presses are not disambiguated.
    pub fn first_pressed(&self) -> Option<Symbol> {
        Symbol::ALL.into_iter().find(|b| self.is_pressed(*b))
    }
}

/// Polls the buttons in priority order 1, 2, 3, 4 and returns the first held one.
///
/// Stops reading at the first hit; later buttons are not read at all.
pub fn sample_input<B: ButtonInput + ?Sized>(buttons: &mut B) -> Option<Symbol> {
    Symbol::ALL.into_iter().find(|b| buttons.is_pressed(*b))
}

/// Edge detector over successive [`ButtonState`] samples.
#[derive(Debug, Default, Copy, Clone)]
pub struct PressLatch {
    pub buttons: ButtonState,
    pub buttons_last: ButtonState,
}

impl PressLatch {
    pub const fn new() -> Self {
        Self {
            buttons: ButtonState::NONE,
            buttons_last: ButtonState::NONE,
        }
    }

    /// Takes a new sample and returns the highest-priority button that went down since the last one.
    pub fn update(&mut self, state: ButtonState) -> Option<Symbol> {
        self.buttons_last = self.buttons;
        self.buttons = state;
        Symbol::ALL.into_iter().find(|b| self.just_pressed(*b))
    }

    #[inline]
    pub fn just_pressed(&self, button: Symbol) -> bool {
        self.buttons.is_pressed(button) && !self.buttons_last.is_pressed(button)
    }

    #[inline]
    pub fn just_released(&self, button: Symbol) -> bool {
        !self.buttons.is_pressed(button) && self.buttons_last.is_pressed(button)
    }
}
