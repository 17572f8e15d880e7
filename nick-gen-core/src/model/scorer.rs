use crate::model::letters::{is_consonant, is_vowel};
use crate::random::RandomSource;

/// Default upper bound (exclusive) of the score jitter.
pub const DEFAULT_JITTER: f64 = 0.5;

/// Heuristic euphony scorer. Higher is better.
///
/// The structural part is additive:
/// - length in characters within `[4, 10]`: +5, otherwise -3
/// - each adjacent pair: +0.5 when vowel/non-vowel classes differ, -0.1 otherwise
/// - each maximal run of 3+ same-class characters: -1
/// - ending in a vowel or in `n`, `m`, `l`, `r`: +2
/// - starting with a consonant letter: +1
///
/// A jitter drawn uniformly from `[0, jitter)` is added on top, so that
/// structurally tied candidates do not always resolve to the same winner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scorer {
	jitter: f64,
}

impl Scorer {
	/// Creates a scorer; `jitter` must be non-negative and finite
	/// (checked by `GenerationInput::set_jitter`).
	pub(crate) fn new(jitter: f64) -> Self {
		Self { jitter }
	}

	/// Structural score plus jitter.
	///
	/// Draws exactly one value from `rng`, even when jitter is zero, so that
	/// changing the jitter never shifts the rest of the random sequence.
	pub fn score<R: RandomSource + ?Sized>(&self, name: &str, rng: &mut R) -> f64 {
		structural_score(name) + rng.next_unit() * self.jitter
	}
}

impl Default for Scorer {
	fn default() -> Self {
		Self::new(DEFAULT_JITTER)
	}
}

/// Deterministic part of the euphony score.
pub fn structural_score(name: &str) -> f64 {
	let chars: Vec<char> = name.chars().collect();
	let mut score = 0.0;

	score += if (4..=10).contains(&chars.len()) { 5.0 } else { -3.0 };

	for pair in chars.windows(2) {
		score += if is_vowel(pair[0]) != is_vowel(pair[1]) { 0.5 } else { -0.1 };
	}

	score -= same_class_runs(&chars) as f64;

	if chars.last().is_some_and(|c| is_vowel(*c) || matches!(c.to_ascii_lowercase(), 'n' | 'm' | 'l' | 'r')) {
		score += 2.0;
	}

	if chars.first().is_some_and(|c| is_consonant(*c)) {
		score += 1.0;
	}

	score
}

/// Counts maximal runs of 3+ characters sharing the vowel/non-vowel class.
fn same_class_runs(chars: &[char]) -> usize {
	chars
		.chunk_by(|a, b| is_vowel(*a) == is_vowel(*b))
		.filter(|run| run.len() >= 3)
		.count()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::random::ScriptedSource;

	fn approx(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	#[test]
	fn flowing_name_beats_consonant_pileup() {
		// 5 + 4 * 0.5 + 2 = 9
		assert!(approx(structural_score("Elira"), 9.0));
		// 5 - 4 * 0.1 - 1 + 1 = 4.6
		assert!(approx(structural_score("Xqzpt"), 4.6));
		assert!(structural_score("Elira") > structural_score("Xqzpt"));
	}

	#[test]
	fn length_outside_range_is_penalized() {
		// -3 + 0.5 + 2 + 1 = 0.5
		assert!(approx(structural_score("Na"), 0.5));
		// 11 letters: -3 + 10 * 0.5 + 2 + 1
		assert!(approx(structural_score("Banamelarin"), 5.0));
		assert!(approx(structural_score(""), -3.0));
	}

	#[test]
	fn endings_and_starts() {
		// Sonorant ending: 5 + 0.5 * 4 + 2 + 1
		assert!(approx(structural_score("Taron"), 5.0 + 2.0 + 2.0 + 1.0));
		// Plain consonant ending: 5 + 0.5 * 4 + 1
		assert!(approx(structural_score("Tarok"), 5.0 + 2.0 + 1.0));
		// "y" counts as a vowel: no start bonus and "Ya" is a same-class pair.
		assert!(approx(structural_score("Yano"), 5.0 - 0.1 + 0.5 + 0.5 + 2.0));
	}

	#[test]
	fn vowel_runs_are_penalized() {
		// Pairs: b-e +.5, e-a -.1, a-u -.1, u-n +.5 ; run "eau" -1 ; ends n +2 ; starts b +1
		assert!(approx(structural_score("Beaun"), 5.0 + 0.8 - 1.0 + 2.0 + 1.0));
	}

	#[test]
	fn jitter_stays_below_bound() {
		let scorer = Scorer::default();
		let mut rng = ScriptedSource::new(&[0.0, 0.999_999]);
		let base = structural_score("Elira");

		assert!(approx(scorer.score("Elira", &mut rng), base));
		let high = scorer.score("Elira", &mut rng);
		assert!(high > base && high < base + DEFAULT_JITTER);
	}

	#[test]
	fn zero_jitter_is_structural() {
		let scorer = Scorer::new(0.0);
		let mut rng = ScriptedSource::new(&[0.7]);
		assert!(approx(scorer.score("Taron", &mut rng), structural_score("Taron")));
	}
}
