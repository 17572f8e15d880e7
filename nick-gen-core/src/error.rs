use std::path::PathBuf;

use thiserror::Error;

/// Malformed generation configuration.
///
/// Raised once, when tables or settings are built, never during generation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
	#[error("weighted table is empty")]
	EmptyTable,

	#[error("weight at index {index} must be positive and finite, got {weight}")]
	InvalidWeight { index: usize, weight: f64 },

	#[error("banned cluster must be exactly 2 characters, got {0:?}")]
	InvalidCluster(String),

	#[error("{name} must be between 0.0 and 1.0, got {value}")]
	InvalidProbability { name: &'static str, value: f64 },

	#[error("jitter must be non-negative and finite, got {0}")]
	InvalidJitter(f64),

	#[error("at least one attempt is required")]
	NoAttempts,

	#[error("syllable count must be at least 1")]
	ZeroSyllables,
}

/// Failure while loading, saving or registering phoneme inventories.
#[derive(Error, Debug)]
pub enum InventoryError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("inventory encoding error: {0}")]
	Codec(#[from] postcard::Error),

	#[error("invalid inventory: {0}")]
	Config(#[from] ConfigError),

	#[error("expected a directory, got: {}", .0.display())]
	NotADirectory(PathBuf),

	#[error("inventory already loaded: {0}")]
	Duplicate(String),

	#[error("unknown inventory: {0}")]
	Unknown(String),
}
