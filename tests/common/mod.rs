//! Shared graph fixtures for the integration suites.
//!
//! Fixture sequences are generated, not hard-coded: a builder enforces
//! (k-1)-mer uniqueness while a sequence grows, so the resulting graphs
//! are linear (or fork exactly where a fixture says they do) by
//! construction rather than by luck.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

use contig_kernel::{Assembler, CanonicalCodec, KmerCodec, MemoryGraphStore, TwoBitCodec};

/// Window length used across the integration suites.
pub const K: usize = 21;

const BASES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Small deterministic xorshift PRNG, so fixtures are reproducible without
/// pulling a rand dependency into the tests.
pub struct SeqRng(u64);

impl SeqRng {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

/// Reverse complement of a DNA string.
pub fn revcomp(seq: &str) -> String {
    seq.chars()
        .rev()
        .map(|c| match c {
            'A' => 'T',
            'C' => 'G',
            'G' => 'C',
            'T' => 'A',
            other => other,
        })
        .collect()
}

/// Grows sequences while registering every (k-1)-mer they contain, and
/// refuses to append a base that would repeat one. Graphs built from its
/// output have no joins or forks other than the ones a fixture creates on
/// purpose by reusing a junction overlap.
///
/// In canonical mode an overlap and its reverse complement count as the
/// same key, which keeps strand-folded graphs free of accidental joins
/// too.
pub struct LinearBuilder {
    k: usize,
    canonical: bool,
    overlaps: HashSet<String>,
}

impl LinearBuilder {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            canonical: false,
            overlaps: HashSet::new(),
        }
    }

    pub fn new_canonical(k: usize) -> Self {
        Self {
            k,
            canonical: true,
            overlaps: HashSet::new(),
        }
    }

    /// Append `len` bases to `seq`, trying the alphabet in a rotated
    /// random order at each position.
    pub fn extend(&mut self, seq: &mut String, len: usize, rng: &mut SeqRng) {
        for _ in 0..len {
            let start = (rng.next_u64() % 4) as usize;
            let mut placed = false;
            for offset in 0..4 {
                seq.push(BASES[(start + offset) % 4]);
                if self.register_tail(seq) {
                    placed = true;
                    break;
                }
                seq.pop();
            }
            assert!(placed, "exhausted alphabet while growing a linear fixture");
        }
    }

    fn overlap_key(&self, tail: &str) -> String {
        if self.canonical {
            let rc = revcomp(tail);
            if rc.as_str() < tail {
                return rc;
            }
        }
        tail.to_string()
    }

    /// Register the (k-1)-mer ending at the tail of `seq`. Returns false
    /// without registering if it would be a repeat.
    fn register_tail(&mut self, seq: &str) -> bool {
        let m = self.k - 1;
        if seq.len() < m {
            return true;
        }
        let key = self.overlap_key(&seq[seq.len() - m..]);
        if self.overlaps.contains(&key) {
            return false;
        }
        self.overlaps.insert(key);
        true
    }
}

/// A single linear sequence of `len` bases.
pub fn linear_path(rng: &mut SeqRng, len: usize, k: usize) -> String {
    let mut builder = LinearBuilder::new(k);
    let mut seq = String::new();
    builder.extend(&mut seq, len, rng);
    seq
}

/// Like [`linear_path`], additionally free of reverse-complement overlap
/// collisions, for graphs populated through a strand-canonical codec.
pub fn linear_path_canonical(rng: &mut SeqRng, len: usize, k: usize) -> String {
    let mut builder = LinearBuilder::new_canonical(k);
    let mut seq = String::new();
    builder.extend(&mut seq, len, rng);
    seq
}

/// A core sequence plus one branch diverging after position `s`, sharing
/// the k-1 junction overlap. Returns `(core, branch, s)`: the k-mer
/// starting at `s` is the fork node, and `branch` begins with
/// `core[s+1..s+k]`.
pub fn right_fork(
    rng: &mut SeqRng,
    core_len: usize,
    branch_len: usize,
    k: usize,
) -> (String, String, usize) {
    let mut builder = LinearBuilder::new(k);
    let mut core = String::new();
    builder.extend(&mut core, core_len, rng);

    let s = core_len / 2;
    let mut branch = core[s + 1..s + k].to_string();
    builder.extend(&mut branch, branch_len, rng);

    (core, branch, s)
}

/// A core sequence plus two branches at the same junction, making the
/// k-mer starting at `s` a three-way fork to the right.
pub fn right_triple_fork(
    rng: &mut SeqRng,
    core_len: usize,
    branch_len: usize,
    k: usize,
) -> (String, String, String, usize) {
    let mut builder = LinearBuilder::new(k);
    let mut core = String::new();
    builder.extend(&mut core, core_len, rng);

    let s = core_len / 2;
    let mut top = core[s + 1..s + k].to_string();
    builder.extend(&mut top, branch_len, rng);
    let mut bottom = core[s + 1..s + k].to_string();
    builder.extend(&mut bottom, branch_len, rng);

    (core, top, bottom, s)
}

/// A sequence that is linear when read as a ring of `len` k-mers,
/// including the windows that wrap from the end back to the start. Close
/// it with [`close_ring`] before populating a graph.
pub fn circular(rng: &mut SeqRng, len: usize, k: usize) -> String {
    loop {
        let mut builder = LinearBuilder::new(k);
        let mut seq = String::new();
        builder.extend(&mut seq, len, rng);
        if ring_is_linear(&seq, k) {
            return seq;
        }
    }
}

/// The linear spelling of a ring: the sequence plus its first k-1 bases,
/// whose windows are exactly the ring's k-mers.
pub fn close_ring(seq: &str, k: usize) -> String {
    format!("{}{}", seq, &seq[..k - 1])
}

fn ring_is_linear(seq: &str, k: usize) -> bool {
    let m = k - 1;
    let ring = close_ring(seq, k);
    let mut seen = HashSet::new();
    (0..seq.len()).all(|i| seen.insert(&ring[i..i + m]))
}

/// Populate an in-memory graph from whole sequences.
pub fn graph_from<C: KmerCodec>(codec: &C, sequences: &[&str]) -> Arc<MemoryGraphStore> {
    let mut store = MemoryGraphStore::new();
    for seq in sequences {
        store
            .insert_sequence(codec, seq)
            .expect("fixture sequences are valid DNA");
    }
    Arc::new(store)
}

/// Assembler over a directional two-bit graph of `sequences`.
pub fn assembler_for(k: usize, sequences: &[&str]) -> Assembler<TwoBitCodec, MemoryGraphStore> {
    let codec = TwoBitCodec::new(k).expect("fixture k is in range");
    let store = graph_from(&codec, sequences);
    Assembler::new(Arc::new(codec), store)
}

/// Assembler over a strand-canonical graph of `sequences`.
pub fn canonical_assembler_for(
    k: usize,
    sequences: &[&str],
) -> Assembler<CanonicalCodec, MemoryGraphStore> {
    let codec = CanonicalCodec::new(k).expect("fixture k is in range");
    let store = graph_from(&codec, sequences);
    Assembler::new(Arc::new(codec), store)
}

/// Install the test subscriber once per binary; `RUST_LOG` controls
/// verbosity.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
