use core::fmt::{Display, Formatter};
use core::ops::Index;
use log::{debug, info};
use rand_core::RngCore;

use crate::config::SEQUENCE_LENGTH;
use crate::symbol::Symbol;

/// The symbols the player has to repeat, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    symbols: [Symbol; SEQUENCE_LENGTH],
}

impl Sequence {
    pub fn generate<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut sequence = Sequence { symbols: [Symbol::One; SEQUENCE_LENGTH] };
        sequence.regenerate(rng);
        sequence
    }

    /// Overwrites every slot with an independent uniform draw.
    pub fn regenerate<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        for slot in self.symbols.iter_mut() {
            *slot = Symbol::from_random(rng.next_u32());
            debug!("{}", slot);
        }
        info!("new sequence: {}", self);
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<Symbol> {
        self.symbols.get(idx).copied()
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }
}

impl From<[Symbol; SEQUENCE_LENGTH]> for Sequence {
    fn from(symbols: [Symbol; SEQUENCE_LENGTH]) -> Self {
        Sequence { symbols }
    }
}

impl Index<usize> for Sequence {
    type Output = Symbol;

    fn index(&self, idx: usize) -> &Symbol {
        &self.symbols[idx]
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for (i, s) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ScriptedRng, seeded_rng};

    #[test]
    fn every_generated_sequence_is_full_and_in_range() {
        let mut rng = seeded_rng(0x5eed);
        for _ in 0..500 {
            let seq = Sequence::generate(&mut rng);
            assert_eq!(seq.as_slice().len(), 10);
            assert!(seq.iter().all(|s| (1..=4).contains(&s.value())));
        }
    }

    #[test]
    fn symbols_are_roughly_uniform() {
        let mut rng = seeded_rng(42);
        let mut counts = [0u32; 4];
        let rounds = 4_000;
        for _ in 0..rounds {
            for s in Sequence::generate(&mut rng).iter() {
                counts[s.idx()] += 1;
            }
        }
        let total = (rounds * SEQUENCE_LENGTH) as f64;
        for (i, c) in counts.iter().enumerate() {
            let share = *c as f64 / total;
            assert!((share - 0.25).abs() < 0.02, "symbol {} drew {share}", i + 1);
        }
    }

    #[test]
    fn regenerate_overwrites_instead_of_appending() {
        let mut rng = ScriptedRng::new(&[0]);
        let mut seq = Sequence::generate(&mut rng);
        assert!(seq.iter().all(|s| s == Symbol::One));

        let mut rng = ScriptedRng::new(&[3]);
        seq.regenerate(&mut rng);
        assert_eq!(seq, Sequence::from([Symbol::Four; SEQUENCE_LENGTH]));
        assert_eq!(rng.calls(), 10);
    }

    #[test]
    fn runs_of_the_same_symbol_are_allowed() {
        let mut rng = ScriptedRng::new(&[2, 2, 2, 0, 1]);
        let seq = Sequence::generate(&mut rng);
        assert_eq!(&seq.as_slice()[..3], &[Symbol::Three; 3]);
    }

    #[test]
    fn displays_as_button_numbers() {
        use Symbol::{One, Two};

        let seq = Sequence::generate(&mut ScriptedRng::new(&[0, 1]));
        assert_eq!(seq, Sequence::from([One, Two, One, Two, One, Two, One, Two, One, Two]));
        assert_eq!(seq.to_string(), "1 2 1 2 1 2 1 2 1 2");
        assert_eq!(seq[1], Symbol::Two);
        assert_eq!(seq.get(10), None);
    }
}
