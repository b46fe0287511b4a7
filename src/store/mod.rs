//! Graph storage backends.
//!
//! A store answers exactly one question: is this k-mer token in the graph?
//! The assembler never mutates a store during a walk, so implementations
//! only need cheap, repeatable membership lookups. Three backends cover
//! the usual trade-offs: [`MemoryGraphStore`] for graphs built in-process,
//! [`CompactGraphStore`] for frozen graphs that should stay dense, and
//! [`CachedGraphStore`] to memoize lookups against a slow inner backend.

pub mod cached;
pub mod compact;
pub mod memory;

use crate::types::KmerToken;

/// Trait for k-mer membership backends.
///
/// Implementations must answer deterministically: two `contains` calls for
/// the same token during one walk must agree, or stop classification
/// becomes unstable.
pub trait GraphStore {
    /// Error type for store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Whether the graph contains `token`.
    fn contains(&self, token: KmerToken) -> Result<bool, Self::Error>;
}

pub use cached::{CacheConfig, CacheStats, CachedGraphStore};
pub use compact::CompactGraphStore;
pub use memory::MemoryGraphStore;
