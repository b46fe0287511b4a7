//! # contig-kernel
//!
//! Deterministic contig assembly over pluggable de Bruijn graph backends.
//!
//! The assembly kernel answers one question:
//!
//! > Given a k-mer graph and a seed k-mer, what is the longest
//! > **unambiguous** sequence the graph supports around that seed?
//!
//! ## Core Contract
//!
//! 1. Walk left, right, or both ways from the seed, one symbol at a time
//! 2. Stop deterministically at the first fork, dead end, or completed
//!    cycle; never guess a branch
//! 3. Report why the walk stopped, and fingerprint contigs for downstream
//!    provenance
//!
//! ## Architecture
//!
//! ```text
//! Seed window → Cursor → Assembler ← KmerCodec (candidate neighbors)
//!                            ↓
//!                  GraphStore (membership) + visited set
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same seed + same codec + same graph state → identical contig
//! - Candidate order is fixed (A, C, G, T)
//! - The visited set is checked before every acceptance, so circular
//!   inputs terminate after exactly one lap

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assembler;
pub mod codec;
pub mod cursor;
pub mod fingerprint;
pub mod store;
pub mod types;

// Re-exports
pub use assembler::{Assembler, AssemblerError};
pub use codec::{
    CanonicalCodec, KmerCodec, KmerWindows, TwoBitCodec, TwoBitCodecError, DNA_ALPHABET, MAX_K,
};
pub use cursor::{Cursor, CursorError};
pub use fingerprint::{contig_fingerprint, ContigFingerprint};
pub use store::{
    CacheConfig, CacheStats, CachedGraphStore, CompactGraphStore, GraphStore, MemoryGraphStore,
};
pub use types::{Direction, Extension, KmerToken, Shift, StopReason};

/// Schema version for all assembly artifact types.
/// Increment on breaking changes to any fingerprinted format.
pub const ASSEMBLY_SCHEMA_VERSION: &str = "1.0.0";
