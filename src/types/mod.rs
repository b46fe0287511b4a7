//! Core types for the assembly kernel.

pub mod kmer;
pub mod walk;

pub use kmer::{KmerToken, Shift};
pub use walk::{Direction, Extension, StopReason};
