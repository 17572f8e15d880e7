//! Phonotactic nickname generation library.
//!
//! This crate provides a small syllable-based name synthesis system including:
//! - Weighted onset/nucleus/coda tables (`PhonemeInventory`)
//! - Syllable assembly with anti-hiatus and anti-repetition smoothing
//! - Surface-form sanitization and a heuristic euphony scorer
//! - Best-of-N generation driven by an injectable random source
//!
//! Randomness never comes from hidden global state: every generation entry
//! point either takes a `RandomSource` or documents that it uses `rand::rng()`.

/// Generation model: tables, syllables, sanitizer, scorer and generators.
pub mod model;

/// Uniform `[0, 1)` random source abstraction.
pub mod random;

/// Configuration and persistence errors.
pub mod error;

/// I/O utilities (folder listing, path helpers).
pub mod io;
