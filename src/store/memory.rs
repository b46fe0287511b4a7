//! In-memory k-mer membership store.

use std::collections::BTreeSet;
use std::convert::Infallible;

use super::GraphStore;
use crate::codec::{KmerCodec, KmerWindows};
use crate::types::KmerToken;

/// In-memory membership store.
///
/// Uses a `BTreeSet` for deterministic iteration order, which makes graph
/// dumps and snapshot comparisons stable across runs. Lookups never fail.
/// The population helpers run every token through the codec's `membership`
/// map, so the stored form always matches what walks will query.
#[derive(Debug, Clone, Default)]
pub struct MemoryGraphStore {
    tokens: BTreeSet<KmerToken>,
}

impl MemoryGraphStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single token, already in membership form. Returns `true` if
    /// it was not previously present.
    pub fn insert(&mut self, token: KmerToken) -> bool {
        self.tokens.insert(token)
    }

    /// Add every k-mer of `sequence`, returning how many were new to the
    /// graph. Sequences shorter than the codec's k contribute nothing.
    pub fn insert_sequence<C: KmerCodec>(
        &mut self,
        codec: &C,
        sequence: &str,
    ) -> Result<usize, C::Error> {
        let mut novel = 0;
        for token in KmerWindows::new(codec, sequence) {
            if self.insert(codec.membership(token?)) {
                novel += 1;
            }
        }
        tracing::trace!(novel, total = self.tokens.len(), "Sequence inserted");
        Ok(novel)
    }

    /// Number of distinct k-mers in the graph.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the graph holds no k-mers.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over stored tokens in ascending order.
    pub fn tokens(&self) -> impl Iterator<Item = KmerToken> + '_ {
        self.tokens.iter().copied()
    }
}

impl GraphStore for MemoryGraphStore {
    type Error = Infallible;

    fn contains(&self, token: KmerToken) -> Result<bool, Infallible> {
        Ok(self.tokens.contains(&token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{CanonicalCodec, TwoBitCodec, TwoBitCodecError};

    #[test]
    fn test_insert_and_contains() {
        let mut store = MemoryGraphStore::new();
        let token = KmerToken::new(7);
        assert!(store.insert(token));
        assert!(!store.insert(token));
        assert!(store.contains(token).unwrap());
        assert!(!store.contains(KmerToken::new(8)).unwrap());
    }

    #[test]
    fn test_insert_sequence_counts_novel_kmers() {
        let codec = TwoBitCodec::new(3).unwrap();
        let mut store = MemoryGraphStore::new();

        // AAAAA has three windows but only one distinct 3-mer.
        let novel = store.insert_sequence(&codec, "AAAAA").unwrap();
        assert_eq!(novel, 1);
        assert_eq!(store.len(), 1);

        let novel = store.insert_sequence(&codec, "AAACG").unwrap();
        assert_eq!(novel, 2); // AAC and ACG; AAA already present
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_insert_sequence_shorter_than_k_is_a_noop() {
        let codec = TwoBitCodec::new(5).unwrap();
        let mut store = MemoryGraphStore::new();
        assert_eq!(store.insert_sequence(&codec, "ACG").unwrap(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_insert_sequence_rejects_invalid_symbols() {
        let codec = TwoBitCodec::new(3).unwrap();
        let mut store = MemoryGraphStore::new();
        assert!(store.insert_sequence(&codec, "ACNGT").is_err());
    }

    #[test]
    fn test_insert_sequence_rejects_multibyte_symbols() {
        let codec = TwoBitCodec::new(3).unwrap();
        let mut store = MemoryGraphStore::new();
        let err = store.insert_sequence(&codec, "ACGTé").unwrap_err();
        assert_eq!(
            err,
            TwoBitCodecError::InvalidSymbol {
                symbol: 'é',
                position: 2
            }
        );
    }

    #[test]
    fn test_canonical_codec_folds_strands_on_insert() {
        let codec = CanonicalCodec::new(3).unwrap();
        let mut store = MemoryGraphStore::new();

        store.insert_sequence(&codec, "ACCTG").unwrap();
        let len = store.len();

        // The reverse complement contributes the same membership tokens.
        let novel = store.insert_sequence(&codec, "CAGGT").unwrap();
        assert_eq!(novel, 0);
        assert_eq!(store.len(), len);
    }

    #[test]
    fn test_tokens_iterate_in_ascending_order() {
        let mut store = MemoryGraphStore::new();
        store.insert(KmerToken::new(9));
        store.insert(KmerToken::new(2));
        store.insert(KmerToken::new(5));
        let tokens: Vec<_> = store.tokens().map(|t| t.bits()).collect();
        assert_eq!(tokens, vec![2, 5, 9]);
    }
}
