use std::collections::HashSet;

use nick_gen_core::model::forge::{DEFAULT_INVENTORY, Forge};
use nick_gen_core::model::generation_input::GenerationInput;
use nick_gen_core::model::inventory::PhonemeInventory;
use nick_gen_core::model::name_generator::NameGenerator;
use nick_gen_core::model::sanitizer::Sanitizer;
use nick_gen_core::model::scorer::structural_score;
use nick_gen_core::model::weighted_table::WeightedTable;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn assert_well_formed(name: &str) {
	let mut chars = name.chars();
	let first = chars.next().expect("names are never empty");
	assert!(first.is_uppercase(), "{name} should start upper-case");
	assert!(chars.all(|c| c.is_lowercase()), "{name} should be lower-case after the first letter");
}

#[test]
fn default_generation_is_well_formed() {
	let generator = NameGenerator::default();
	for _ in 0..200 {
		assert_well_formed(&generator.generate());
	}
}

#[test]
fn real_randomness_gives_variety() {
	let generator = NameGenerator::default();
	let names: HashSet<String> = (0..50).map(|_| generator.generate()).collect();
	assert!(names.len() > 1, "50 calls produced a single name: {names:?}");
}

#[test]
fn same_seed_same_names() {
	let generator = NameGenerator::default();
	let first = generator.generate_batch_with(20, &mut StdRng::seed_from_u64(77));
	let second = generator.generate_batch_with(20, &mut StdRng::seed_from_u64(77));
	assert_eq!(first, second);

	let other = generator.generate_batch_with(20, &mut StdRng::seed_from_u64(78));
	assert_ne!(first, other);
}

#[test]
fn coexisting_generators_keep_their_own_tables() {
	let table = |pairs: &[(&str, f64)]| WeightedTable::<String>::from_pairs(pairs.iter().copied()).unwrap();
	let harsh = PhonemeInventory::new(
		table(&[("k", 1.0), ("t", 1.0)]),
		table(&[("o", 1.0)]),
		table(&[("", 1.0)]),
		Vec::new(),
		Vec::new(),
	)
	.unwrap();
	let mut input = GenerationInput::default();
	input.set_attempts(4).unwrap();
	input.set_suffix_probability(0.0).unwrap();

	let harsh = NameGenerator::new(harsh, input);
	let soft = NameGenerator::default();
	let mut rng = StdRng::seed_from_u64(10);

	for _ in 0..50 {
		let name = harsh.generate_with(&mut rng).to_lowercase();
		assert!(name.chars().all(|c| "kto".contains(c)), "{name}");
		assert_well_formed(&soft.generate_with(&mut rng));
	}
}

#[test]
fn sanitizer_and_scorer_examples() {
	let inventory = PhonemeInventory::default();
	let sanitizer = Sanitizer::new(inventory.banned_clusters());
	assert_eq!(sanitizer.sanitize("baaad"), "baad");
	assert!(structural_score("Elira") > structural_score("Xqzpt"));
}

#[test]
fn saved_inventory_generates_like_the_builtin() {
	let dir = tempfile::tempdir().unwrap();
	PhonemeInventory::default().save(dir.path().join("copy.bin")).unwrap();

	let forge = Forge::new(dir.path()).unwrap();
	let builtin = forge.generate_with(DEFAULT_INVENTORY, &mut StdRng::seed_from_u64(4)).unwrap();
	let copy = forge.generate_with("copy", &mut StdRng::seed_from_u64(4)).unwrap();
	assert_eq!(builtin, copy);
}
