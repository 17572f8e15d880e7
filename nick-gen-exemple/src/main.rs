use nick_gen_core::model::forge::Forge;
use nick_gen_core::model::generation_input::GenerationInput;
use nick_gen_core::model::inventory::PhonemeInventory;
use nick_gen_core::model::name_generator::NameGenerator;
use nick_gen_core::model::weighted_table::WeightedTable;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Start from the default settings: 12 attempts, 40% suffix chance,
    // 2 syllables 70% of the time (3 otherwise)
    let mut input = GenerationInput::default();

    // Number of candidates scored per generated name
    input.set_attempts(16)?;

    // Probability of appending a suffix such as "ion" or "elle"
    input.set_suffix_probability(0.25)?;

    // Syllable count distribution: mostly short names, sometimes longer ones
    input.set_syllable_counts(WeightedTable::from_pairs([(2usize, 6.0), (3, 3.0), (4, 1.0)])?)?;

    // Invalid settings are rejected up front
    match input.set_attempts(0) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }
    match input.set_suffix_probability(1.5) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }
    match WeightedTable::<String>::from_pairs([("b", 0.0)]) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }

    let generator = NameGenerator::new(PhonemeInventory::default(), input);

    // Thread-local randomness: a different list on every run
    for i in 0..5 {
        println!("Generated name {}: {}", i + 1, generator.generate());
    }

    // Seeded randomness: the same list on every run, with the winning scores
    let mut rng = StdRng::seed_from_u64(42);
    for i in 0..5 {
        let scored = generator.generate_scored_with(&mut rng);
        println!("Seeded name {}: {} (score {:.2})", i + 1, scored.name, scored.score);
    }

    // Inventories can be saved and loaded back through a forge
    let folder = std::env::temp_dir().join("nick-gen-exemple");
    std::fs::create_dir_all(&folder)?;
    generator.inventory().save(folder.join("mine.bin"))?;

    let forge = Forge::new(&folder)?;
    println!("Available inventories: {}", forge.names().join(", "));
    println!("From 'mine': {}", forge.generate_with("mine", &mut rng)?);

    Ok(())
}
