use crate::error::ConfigError;
use crate::model::scorer::{DEFAULT_JITTER, Scorer};
use crate::model::weighted_table::WeightedTable;

/// Default number of candidates generated per call.
pub const DEFAULT_ATTEMPTS: usize = 12;

/// Default probability of appending a suffix to a candidate.
pub const DEFAULT_SUFFIX_PROBABILITY: f64 = 0.4;

/// Settings of a best-of-N generation call.
///
/// # Responsibilities
/// - Track how many candidates are generated (`attempts`)
/// - Track how likely a suffix is appended (`suffix_probability`)
/// - Hold the distribution the syllable count is drawn from
/// - Hold the upper bound of the score jitter
///
/// # Invariants
/// - `attempts >= 1`
/// - `suffix_probability` is within `[0.0, 1.0]`
/// - every syllable count in the distribution is `>= 1`
/// - `jitter` is non-negative and finite
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationInput {
	attempts: usize,
	suffix_probability: f64,
	syllable_counts: WeightedTable<usize>,
	jitter: f64,
}

impl GenerationInput {
	pub fn attempts(&self) -> usize {
		self.attempts
	}

	pub fn suffix_probability(&self) -> f64 {
		self.suffix_probability
	}

	pub fn syllable_counts(&self) -> &WeightedTable<usize> {
		&self.syllable_counts
	}

	pub fn jitter(&self) -> f64 {
		self.jitter
	}

	/// Scorer configured with this input's jitter.
	pub fn scorer(&self) -> Scorer {
		Scorer::new(self.jitter)
	}

	/// Sets the number of candidates generated per call.
	///
	/// # Errors
	/// Returns `ConfigError::NoAttempts` if `attempts` is 0.
	pub fn set_attempts(&mut self, attempts: usize) -> Result<(), ConfigError> {
		if attempts == 0 {
			return Err(ConfigError::NoAttempts);
		}
		self.attempts = attempts;
		Ok(())
	}

	/// Sets the probability (0.0..=1.0) of appending a suffix.
	///
	/// # Errors
	/// Returns an error if the value is outside the valid range.
	pub fn set_suffix_probability(&mut self, probability: f64) -> Result<(), ConfigError> {
		if !(0.0..=1.0).contains(&probability) {
			return Err(ConfigError::InvalidProbability { name: "suffix_probability", value: probability });
		}
		self.suffix_probability = probability;
		Ok(())
	}

	/// Replaces the syllable-count distribution.
	///
	/// # Errors
	/// Returns `ConfigError::ZeroSyllables` if any count is 0.
	pub fn set_syllable_counts(&mut self, syllable_counts: WeightedTable<usize>) -> Result<(), ConfigError> {
		if syllable_counts.values().any(|count| *count == 0) {
			return Err(ConfigError::ZeroSyllables);
		}
		self.syllable_counts = syllable_counts;
		Ok(())
	}

	/// Sets the upper bound (exclusive) of the score jitter; 0 disables it.
	///
	/// # Errors
	/// Returns an error for negative, infinite or NaN values.
	pub fn set_jitter(&mut self, jitter: f64) -> Result<(), ConfigError> {
		if !jitter.is_finite() || jitter < 0.0 {
			return Err(ConfigError::InvalidJitter(jitter));
		}
		self.jitter = jitter;
		Ok(())
	}
}

impl Default for GenerationInput {
	/// 12 attempts, 40% suffix chance, 2 syllables 70% of the time (else 3),
	/// jitter below 0.5.
	fn default() -> Self {
		Self {
			attempts: DEFAULT_ATTEMPTS,
			suffix_probability: DEFAULT_SUFFIX_PROBABILITY,
			syllable_counts: WeightedTable::from_trusted([(2usize, 0.7), (3, 0.3)]),
			jitter: DEFAULT_JITTER,
		}
	}
}
