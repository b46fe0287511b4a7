//! K-mer token types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-width encoded k-mer.
///
/// Packs a window of symbols into a `u64`, most significant symbol first,
/// so for tokens of equal k numeric order equals lexicographic order.
/// A token is only meaningful relative to the codec configuration that
/// produced it; tokens from different configurations must never be mixed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct KmerToken(u64);

impl KmerToken {
    /// Create a token from its raw packed bits.
    pub fn new(bits: u64) -> Self {
        Self(bits)
    }

    /// The raw packed bits.
    pub fn bits(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for KmerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl From<u64> for KmerToken {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

/// A single candidate extension: an adjacent token plus the symbol that
/// produces it.
///
/// For a rightward shift the symbol is the one appended at the window's
/// right edge; for a leftward shift, the one prepended at the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Token of the adjacent k-mer.
    pub token: KmerToken,
    /// Symbol introduced by the shift.
    pub symbol: char,
}

impl Shift {
    /// Create a shift from a token and the symbol that produced it.
    pub fn new(token: KmerToken, symbol: char) -> Self {
        Self { token, symbol }
    }
}
