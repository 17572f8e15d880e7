//! Top-level module for the nickname generation system.
//!
//! This module provides the phonotactic generation pipeline, including:
//! - Weighted tables and sampling (`WeightedTable`)
//! - The sound inventory (`PhonemeInventory`)
//! - Syllable assembly (`SyllableBuilder`)
//! - Surface repair (`Sanitizer`) and euphony scoring (`Scorer`)
//! - Generation settings (`GenerationInput`)
//! - The best-of-N orchestrator (`NameGenerator`)
//! - A registry of named generators (`Forge`)

/// Ordered weighted tables with cumulative-subtraction sampling.
pub mod weighted_table;

/// Vowel and consonant classes.
pub mod letters;

/// Onset, nucleus, coda, suffix and banned-cluster tables.
///
/// Supports validation, a built-in default set and postcard persistence.
pub mod inventory;

/// Single-syllable assembly with boundary smoothing.
pub mod syllable;

/// Three-pass surface repair of candidate names.
pub mod sanitizer;

/// Heuristic euphony scoring with optional jitter.
pub mod scorer;

/// Generation settings: attempts, suffix probability,
/// syllable-count distribution and jitter.
pub mod generation_input;

/// Best-of-N name generation over one inventory.
pub mod name_generator;

/// Registry of named generators loaded from disk.
pub mod forge;
