//! `Individual`: one candidate sequence of shift-kind choices.

use std::fmt;

use tr_core::SearchRng;

/// A bit sequence consumed left to right by the guided assignment.
///
/// `false` hires a standard driver, `true` a rotating one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    bits: Vec<bool>,
}

impl Individual {
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// `len` uniformly random bits.
    pub fn random(len: usize, rng: &mut SearchRng) -> Self {
        Self { bits: (0..len).map(|_| rng.random::<bool>()).collect() }
    }

    #[inline]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Flip the bit at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn flip(&mut self, index: usize) {
        self.bits[index] = !self.bits[index];
    }

    /// Number of set bits.
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

impl From<Vec<bool>> for Individual {
    fn from(bits: Vec<bool>) -> Self {
        Self::new(bits)
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}
