use log::{debug, trace};

use crate::model::generation_input::GenerationInput;
use crate::model::inventory::PhonemeInventory;
use crate::model::sanitizer::Sanitizer;
use crate::model::syllable::SyllableBuilder;
use crate::model::weighted_table::WeightedTable;
use crate::random::RandomSource;

/// Name returned when sanitization leaves nothing of a candidate.
pub const FALLBACK_NAME: &str = "Nex";

/// A generated name together with the score that made it win.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredName {
	pub name: String,
	pub score: f64,
}

/// Best-of-N nickname generator over a single inventory.
///
/// # Responsibilities
/// - Draw a syllable count from the configured distribution
/// - Build `attempts` candidates, each from threaded syllables plus an
///   optional suffix
/// - Sanitize, case-normalize and score each candidate
/// - Keep the first candidate reaching the highest score
///
/// The generator holds no mutable state: every call is independent and a
/// shared `&NameGenerator` can serve concurrent callers, each with its own
/// random source.
///
/// # Random draw order
/// Per call: syllable count, then per attempt the onset, nucleus and coda of
/// each syllable, the suffix coin, the suffix pick (only when the coin
/// succeeds) and the score jitter.
#[derive(Clone, Debug)]
pub struct NameGenerator {
	inventory: PhonemeInventory,
	input: GenerationInput,
	/// Uniform view of the suffix list, `None` when there are no suffixes.
	suffixes: Option<WeightedTable<String>>,
}

impl NameGenerator {
	pub fn new(inventory: PhonemeInventory, input: GenerationInput) -> Self {
		let suffixes = WeightedTable::uniform(inventory.suffixes().iter().cloned()).ok();
		Self { inventory, input, suffixes }
	}

	pub fn inventory(&self) -> &PhonemeInventory {
		&self.inventory
	}

	pub fn input(&self) -> &GenerationInput {
		&self.input
	}

	/// Generates one name using the thread-local generator `rand::rng()`.
	pub fn generate(&self) -> String {
		self.generate_with(&mut rand::rng())
	}

	/// Generates one name drawing every random decision from `rng`.
	pub fn generate_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> String {
		self.generate_scored_with(rng).name
	}

	/// Like `generate_with`, also returning the winning score.
	pub fn generate_scored_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> ScoredName {
		self.generate_tuned_with(&self.input, rng)
	}

	/// Generates `count` independent names.
	pub fn generate_batch_with<R: RandomSource + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<String> {
		(0..count).map(|_| self.generate_with(rng)).collect()
	}

	/// Generates one name with settings overriding the generator's own.
	pub fn generate_tuned_with<R: RandomSource + ?Sized>(&self, input: &GenerationInput, rng: &mut R) -> ScoredName {
		let builder = SyllableBuilder::new(&self.inventory);
		let sanitizer = Sanitizer::new(self.inventory.banned_clusters());
		let scorer = input.scorer();

		let syllable_count = *input.syllable_counts().sample(rng);

		let mut best = ScoredName { name: String::new(), score: f64::NEG_INFINITY };
		for attempt in 0..input.attempts() {
			let mut candidate = String::new();
			let mut prev_last_char = None;
			for _ in 0..syllable_count {
				let syllable = builder.build(prev_last_char, rng);
				candidate.push_str(&syllable.text);
				prev_last_char = syllable.last_char;
			}

			if rng.next_unit() < input.suffix_probability() {
				if let Some(suffixes) = &self.suffixes {
					candidate.push_str(suffixes.sample(rng));
				}
			}

			let mut name = sanitizer.sanitize(&candidate);
			if name.is_empty() {
				name = FALLBACK_NAME.to_owned();
			}
			let name = normalize_case(&name);

			let score = scorer.score(&name, rng);
			trace!("Attempt {}: {} -> {} ({:.2})", attempt, candidate, name, score);

			if score > best.score {
				best = ScoredName { name, score };
			}
		}

		debug!("Generated {} ({:.2}) over {} attempts", best.name, best.score, input.attempts());
		best
	}
}

impl Default for NameGenerator {
	/// Built-in inventory with default settings.
	fn default() -> Self {
		Self::new(PhonemeInventory::default(), GenerationInput::default())
	}
}

/// Upper-cases the first character and lower-cases the rest.
fn normalize_case(name: &str) -> String {
	let mut chars = name.chars();
	match chars.next() {
		None => String::new(),
		Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::random::ScriptedSource;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn table(pairs: &[(&str, f64)]) -> WeightedTable<String> {
		WeightedTable::from_pairs(pairs.iter().map(|(v, w)| (*v, *w))).unwrap()
	}

	fn two_syllables() -> GenerationInput {
		let mut input = GenerationInput::default();
		input.set_syllable_counts(WeightedTable::<usize>::from_pairs([(2usize, 1.0)]).unwrap()).unwrap();
		input
	}

	#[test]
	fn normalize_case_capitalizes_first_letter_only() {
		assert_eq!(normalize_case("tARON"), "Taron");
		assert_eq!(normalize_case("a"), "A");
		assert_eq!(normalize_case(""), "");
	}

	#[test]
	fn assembles_threaded_syllables() {
		let inventory = PhonemeInventory::new(
			table(&[("r", 1.0)]),
			table(&[("a", 1.0)]),
			table(&[("r", 1.0)]),
			Vec::new(),
			Vec::new(),
		)
		.unwrap();
		let generator = NameGenerator::new(inventory, two_syllables());
		let mut rng = ScriptedSource::new(&[0.5]);

		// "rar" + "rar" with the repeated boundary "r" dropped.
		assert_eq!(generator.generate_with(&mut rng), "Rarar");
	}

	#[test]
	fn appends_suffix_when_coin_succeeds() {
		let inventory = PhonemeInventory::new(
			table(&[("t", 1.0)]),
			table(&[("a", 1.0)]),
			table(&[("", 1.0)]),
			vec!["ion".to_owned()],
			Vec::new(),
		)
		.unwrap();
		let mut input = two_syllables();

		input.set_suffix_probability(1.0).unwrap();
		let always = NameGenerator::new(inventory.clone(), input.clone());
		assert_eq!(always.generate_with(&mut ScriptedSource::new(&[0.5])), "Tataion");

		input.set_suffix_probability(0.0).unwrap();
		let never = NameGenerator::new(inventory, input);
		assert_eq!(never.generate_with(&mut ScriptedSource::new(&[0.5])), "Tata");
	}

	#[test]
	fn empty_candidate_falls_back() {
		let silent = PhonemeInventory::new(
			table(&[("", 1.0)]),
			table(&[("", 1.0)]),
			table(&[("", 1.0)]),
			Vec::new(),
			Vec::new(),
		)
		.unwrap();
		let generator = NameGenerator::new(silent, two_syllables());
		assert_eq!(generator.generate_with(&mut ScriptedSource::new(&[0.5])), FALLBACK_NAME);
	}

	#[test]
	fn repeated_vowel_boundary_can_shrink_a_name() {
		// No consonant onset exists, so the second "y" repeats the boundary and vanishes.
		let inventory = PhonemeInventory::new(
			table(&[("", 1.0)]),
			table(&[("y", 1.0)]),
			table(&[("", 1.0)]),
			Vec::new(),
			Vec::new(),
		)
		.unwrap();
		let generator = NameGenerator::new(inventory, two_syllables());
		assert_eq!(generator.generate_with(&mut ScriptedSource::new(&[0.5])), "Y");
	}

	#[test]
	fn keeps_first_of_equal_scores() {
		let mut input = GenerationInput::default();
		input.set_jitter(0.0).unwrap();
		input.set_suffix_probability(0.0).unwrap();
		input.set_syllable_counts(WeightedTable::<usize>::from_pairs([(1usize, 1.0)]).unwrap()).unwrap();
		input.set_attempts(2).unwrap();

		let inventory = PhonemeInventory::new(
			table(&[("b", 1.0), ("d", 1.0)]),
			table(&[("a", 1.0)]),
			table(&[("n", 1.0)]),
			Vec::new(),
			Vec::new(),
		)
		.unwrap();
		let generator = NameGenerator::new(inventory, input);

		// Draws: count, then (onset, nucleus, coda, coin, jitter) per attempt.
		// "Ban" and "Dan" tie; the first one wins.
		let mut rng = ScriptedSource::new(&[0.0, 0.0, 0.0, 0.0, 0.9, 0.0, 0.9, 0.0, 0.0, 0.9, 0.0]);
		assert_eq!(generator.generate_with(&mut rng), "Ban");
	}

	#[test]
	fn seeded_generation_is_reproducible() {
		let generator = NameGenerator::default();
		let mut a = StdRng::seed_from_u64(1234);
		let mut b = StdRng::seed_from_u64(1234);

		for _ in 0..50 {
			assert_eq!(generator.generate_scored_with(&mut a), generator.generate_scored_with(&mut b));
		}
	}

	#[test]
	fn names_are_capitalized_and_non_empty() {
		let generator = NameGenerator::default();
		let mut rng = StdRng::seed_from_u64(99);

		for name in generator.generate_batch_with(500, &mut rng) {
			let mut chars = name.chars();
			let first = chars.next().expect("generated name is never empty");
			assert!(first.is_uppercase(), "{name} should start upper-case");
			assert!(chars.all(|c| !c.is_uppercase()), "{name} should be lower-case after the first letter");
		}
	}

	#[test]
	fn generated_names_hold_no_banned_cluster() {
		let generator = NameGenerator::default();
		let mut rng = StdRng::seed_from_u64(5);

		for name in generator.generate_batch_with(500, &mut rng) {
			let lower = name.to_lowercase();
			for cluster in generator.inventory().banned_clusters() {
				assert!(!lower.contains(cluster.as_str()), "{name} holds {cluster}");
			}
		}
	}

	#[test]
	fn winning_score_is_the_best_candidate() {
		let generator = NameGenerator::default();
		let mut rng = StdRng::seed_from_u64(8);

		for _ in 0..100 {
			let scored = generator.generate_scored_with(&mut rng);
			let structural = crate::model::scorer::structural_score(&scored.name);
			assert!(scored.score >= structural && scored.score < structural + 0.5);
		}
	}
}
