//! RNG module - piece kind selection
//!
//! Kind selection is the only source of randomness in the supply. It sits
//! behind the [`KindSelector`] trait so drivers can plug in a seeded generator
//! and tests can plug in a fixed script.
//!
//! Provides a simple LCG for seeded, reproducible sessions.

use crate::types::PieceKind;

/// Source of piece kinds for the supply's generator.
pub trait KindSelector {
    /// Pick the kind of the next generated piece.
    fn select(&mut self) -> PieceKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits: the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl KindSelector for SimpleRng {
    fn select(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

/// Replays a fixed list of kinds, cycling back to the start when exhausted.
///
/// An empty script always yields [`PieceKind::I`].
#[derive(Debug, Clone)]
pub struct ScriptedKinds {
    kinds: Vec<PieceKind>,
    cursor: usize,
}

impl ScriptedKinds {
    pub fn new(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Parse a script of piece letters such as `"IOTL"`; unknown letters are skipped.
    pub fn from_letters(letters: &str) -> Self {
        Self::new(letters.chars().filter_map(PieceKind::from_char))
    }
}

impl KindSelector for ScriptedKinds {
    fn select(&mut self) -> PieceKind {
        if self.kinds.is_empty() {
            return PieceKind::I;
        }
        let kind = self.kinds[self.cursor % self.kinds.len()];
        self.cursor = (self.cursor + 1) % self.kinds.len();
        kind
    }
}

/// Adapts a closure into a [`KindSelector`].
pub struct FnSelector<F>(pub F);

impl<F> KindSelector for FnSelector<F>
where
    F: FnMut() -> PieceKind,
{
    fn select(&mut self) -> PieceKind {
        (self.0)()
    }
}
