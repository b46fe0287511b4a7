//! K-mer codecs: window/token encoding and neighbor candidate generation.
//!
//! A codec owns the k-mer representation. It packs fixed-length symbol
//! windows into numeric tokens, recovers windows from tokens, and computes
//! the candidate predecessor and successor tokens that the assembler then
//! filters against the graph. Implementations must be pure functions of
//! their inputs so walk behavior is reproducible.
//!
//! Two DNA codecs ship with the crate:
//!
//! - [`TwoBitCodec`]: directional, two bits per base; a k-mer and its
//!   reverse complement are distinct graph nodes.
//! - [`CanonicalCodec`]: same packing, but graph membership is tested
//!   against the strand-canonical form, so a graph populated from one
//!   strand is walkable from either.

pub mod canonical;
pub mod twobit;

pub use canonical::CanonicalCodec;
pub use twobit::{TwoBitCodec, TwoBitCodecError, DNA_ALPHABET, MAX_K};

use crate::types::{KmerToken, Shift};

/// Trait for k-mer encoding backends.
///
/// Neighbor candidates must be returned in a fixed symbol order: the
/// assembler's determinism rests on the codec never reordering them
/// between calls.
pub trait KmerCodec {
    /// Error type for encoding failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The window length this codec is configured for.
    fn k(&self) -> usize;

    /// Encode a window of exactly `k` symbols into a token.
    fn encode(&self, window: &str) -> Result<KmerToken, Self::Error>;

    /// Recover the window a token encodes.
    fn decode(&self, token: KmerToken) -> String;

    /// Map a token to the representative used for graph and visited-set
    /// membership.
    ///
    /// The identity for directional codecs. Strand-canonical codecs return
    /// the smaller of the token and its reverse complement, which is the
    /// only place orientation folding is allowed to happen: walk state
    /// stays directional throughout.
    fn membership(&self, token: KmerToken) -> KmerToken {
        token
    }

    /// Candidate tokens reachable by appending one symbol at the right
    /// edge, paired with that symbol, in fixed alphabet order.
    fn right_neighbors(&self, token: KmerToken) -> Vec<Shift>;

    /// Candidate tokens reachable by prepending one symbol at the left
    /// edge, paired with that symbol, in fixed alphabet order.
    fn left_neighbors(&self, token: KmerToken) -> Vec<Shift>;
}

/// Iterator over the successive k-mer tokens of a sequence, left to right.
///
/// Yields one `Result` per window so an invalid symbol surfaces at the
/// window that contains it. Windows are counted in symbols, not bytes, so
/// multi-byte input reaches the codec as an ordinary invalid symbol. A
/// sequence shorter than `k` yields nothing.
pub struct KmerWindows<'a, C: KmerCodec> {
    codec: &'a C,
    sequence: &'a str,
    index: usize,
}

impl<'a, C: KmerCodec> KmerWindows<'a, C> {
    /// Create an iterator over every window of `sequence`.
    pub fn new(codec: &'a C, sequence: &'a str) -> Self {
        Self {
            codec,
            sequence,
            index: 0,
        }
    }
}

impl<'a, C: KmerCodec> Iterator for KmerWindows<'a, C> {
    type Item = Result<KmerToken, C::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let k = self.codec.k();
        let rest = &self.sequence[self.index..];
        let mut chars = rest.chars();
        let first = chars.next()?;
        let mut end = first.len_utf8();
        for _ in 1..k {
            end += chars.next()?.len_utf8();
        }
        self.index += first.len_utf8();
        Some(self.codec.encode(&rest[..end]))
    }
}
