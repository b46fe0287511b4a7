//! Frozen sorted-array membership store.

use std::convert::Infallible;

use super::GraphStore;
use crate::types::KmerToken;

/// Frozen membership store backed by a sorted token array.
///
/// Built once from any token source, then answers `contains` by binary
/// search. Eight bytes per k-mer with no per-node overhead, which makes it
/// the dense end of the storage trade-off for graphs that no longer
/// change. There is no insert; rebuild to change the graph.
#[derive(Debug, Clone, Default)]
pub struct CompactGraphStore {
    tokens: Vec<KmerToken>,
}

impl CompactGraphStore {
    /// Build a store from tokens in membership form; sorts and removes
    /// duplicates.
    pub fn from_tokens<I: IntoIterator<Item = KmerToken>>(tokens: I) -> Self {
        let mut tokens: Vec<_> = tokens.into_iter().collect();
        tokens.sort_unstable();
        tokens.dedup();
        Self { tokens }
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

impl FromIterator<KmerToken> for CompactGraphStore {
    fn from_iter<I: IntoIterator<Item = KmerToken>>(tokens: I) -> Self {
        Self::from_tokens(tokens)
    }
}

impl GraphStore for CompactGraphStore {
    type Error = Infallible;

    fn contains(&self, token: KmerToken) -> Result<bool, Infallible> {
        Ok(self.tokens.binary_search(&token).is_ok())
    }
}
