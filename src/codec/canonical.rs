//! Strand-canonical codec variant.

use serde::{Deserialize, Serialize};

use super::twobit::{TwoBitCodec, TwoBitCodecError};
use super::KmerCodec;
use crate::types::{KmerToken, Shift};

/// Strand-canonical DNA codec.
///
/// Identical packing to [`TwoBitCodec`], but `membership` maps each token
/// to the smaller of the token and its reverse complement. A graph
/// populated through this codec stores one node per k-mer pair, so it can
/// be entered and walked from either strand.
///
/// Tokens seen by the assembler stay directional: encode, decode, and
/// neighbor generation preserve orientation, and only the graph/visited
/// boundary folds strands. Assembling from a reverse-strand seed therefore
/// yields the reverse complement of the forward contig, not a mixed-strand
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalCodec {
    inner: TwoBitCodec,
}

impl CanonicalCodec {
    /// Create a codec for windows of length `k`, where `1 <= k <= 32`.
    pub fn new(k: usize) -> Result<Self, TwoBitCodecError> {
        Ok(Self {
            inner: TwoBitCodec::new(k)?,
        })
    }

    /// Reverse complement of a token under this codec's k.
    pub fn reverse_complement(&self, token: KmerToken) -> KmerToken {
        self.inner.reverse_complement(token)
    }
}

impl KmerCodec for CanonicalCodec {
    type Error = TwoBitCodecError;

    fn k(&self) -> usize {
        self.inner.k()
    }

    fn encode(&self, window: &str) -> Result<KmerToken, TwoBitCodecError> {
        self.inner.encode(window)
    }

    fn decode(&self, token: KmerToken) -> String {
        self.inner.decode(token)
    }

    fn membership(&self, token: KmerToken) -> KmerToken {
        token.min(self.inner.reverse_complement(token))
    }

    fn right_neighbors(&self, token: KmerToken) -> Vec<Shift> {
        self.inner.right_neighbors(token)
    }

    fn left_neighbors(&self, token: KmerToken) -> Vec<Shift> {
        self.inner.left_neighbors(token)
    }
}
