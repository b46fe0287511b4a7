//! Directional two-bit packed DNA codec.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::KmerCodec;
use crate::types::{KmerToken, Shift};

/// Maximum supported window length: two bits per base in a `u64`.
pub const MAX_K: usize = 32;

/// The DNA alphabet in the fixed candidate order used by neighbor
/// generation.
pub const DNA_ALPHABET: [char; 4] = ['A', 'C', 'G', 'T'];

/// Error type for the packed DNA codecs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TwoBitCodecError {
    /// Requested k is zero or exceeds what a `u64` can pack.
    #[error("Unsupported k {0}: must be between 1 and {MAX_K}")]
    UnsupportedK(usize),
    /// The window's symbol count does not match the configured k.
    #[error("Window of {actual} symbols does not match k = {expected}")]
    WindowLength {
        /// The configured window length.
        expected: usize,
        /// The symbol count of the rejected window.
        actual: usize,
    },
    /// The window contains a symbol outside the DNA alphabet.
    #[error("Invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// The offending symbol.
        symbol: char,
        /// Zero-based position within the window.
        position: usize,
    },
}

/// Directional two-bit packed DNA codec.
///
/// Packs `A=00, C=01, G=10, T=11`, most significant base first, so tokens
/// of equal k order lexicographically. Lowercase input is accepted;
/// `decode` always emits uppercase. No orientation folding: a k-mer and
/// its reverse complement encode to different tokens, and `membership` is
/// the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoBitCodec {
    k: usize,
    mask: u64,
}

impl TwoBitCodec {
    /// Create a codec for windows of length `k`, where `1 <= k <= 32`.
    pub fn new(k: usize) -> Result<Self, TwoBitCodecError> {
        if k == 0 || k > MAX_K {
            return Err(TwoBitCodecError::UnsupportedK(k));
        }
        let mask = if k == MAX_K {
            u64::MAX
        } else {
            (1u64 << (2 * k)) - 1
        };
        Ok(Self { k, mask })
    }

    fn base_code(symbol: char, position: usize) -> Result<u64, TwoBitCodecError> {
        match symbol {
            'A' | 'a' => Ok(0b00),
            'C' | 'c' => Ok(0b01),
            'G' | 'g' => Ok(0b10),
            'T' | 't' => Ok(0b11),
            _ => Err(TwoBitCodecError::InvalidSymbol { symbol, position }),
        }
    }

    fn code_base(code: u64) -> char {
        DNA_ALPHABET[(code & 0b11) as usize]
    }

    /// Reverse complement of a token under this codec's k.
    pub fn reverse_complement(&self, token: KmerToken) -> KmerToken {
        let mut bits = token.bits();
        let mut out = 0u64;
        for _ in 0..self.k {
            out = (out << 2) | (0b11 ^ (bits & 0b11));
            bits >>= 2;
        }
        KmerToken::new(out)
    }

    fn shifted_right(&self, token: KmerToken, code: u64) -> KmerToken {
        KmerToken::new(((token.bits() << 2) | code) & self.mask)
    }

    fn shifted_left(&self, token: KmerToken, code: u64) -> KmerToken {
        KmerToken::new((token.bits() >> 2) | (code << (2 * (self.k - 1))))
    }
}

impl KmerCodec for TwoBitCodec {
    type Error = TwoBitCodecError;

    fn k(&self) -> usize {
        self.k
    }

    fn encode(&self, window: &str) -> Result<KmerToken, TwoBitCodecError> {
        // Count symbols, not bytes: a multi-byte symbol is a symbol error
        // in a correctly sized window, not a length mismatch.
        let symbols = window.chars().count();
        if symbols != self.k {
            return Err(TwoBitCodecError::WindowLength {
                expected: self.k,
                actual: symbols,
            });
        }
        let mut bits = 0u64;
        for (position, symbol) in window.chars().enumerate() {
            bits = (bits << 2) | Self::base_code(symbol, position)?;
        }
        Ok(KmerToken::new(bits))
    }

    fn decode(&self, token: KmerToken) -> String {
        let bits = token.bits();
        (0..self.k)
            .map(|i| Self::code_base(bits >> (2 * (self.k - 1 - i))))
            .collect()
    }

    fn right_neighbors(&self, token: KmerToken) -> Vec<Shift> {
        DNA_ALPHABET
            .iter()
            .enumerate()
            .map(|(code, &symbol)| Shift::new(self.shifted_right(token, code as u64), symbol))
            .collect()
    }

    fn left_neighbors(&self, token: KmerToken) -> Vec<Shift> {
        DNA_ALPHABET
            .iter()
            .enumerate()
            .map(|(code, &symbol)| Shift::new(self.shifted_left(token, code as u64), symbol))
            .collect()
    }
}
