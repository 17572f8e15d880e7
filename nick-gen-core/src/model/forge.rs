use std::collections::HashMap;
use std::path::Path;

use log::info;

use crate::error::InventoryError;
use crate::io;
use crate::model::generation_input::GenerationInput;
use crate::model::inventory::PhonemeInventory;
use crate::model::name_generator::{NameGenerator, ScoredName};
use crate::random::RandomSource;

/// Name under which the built-in inventory is registered.
pub const DEFAULT_INVENTORY: &str = "default";

/// Registry of named generators, one per phoneme inventory.
///
/// # Responsibilities
/// - Register the built-in inventory under `"default"`
/// - Load every `.bin` inventory of a directory, keyed by file stem
/// - Route generation requests to the generator of a given name
#[derive(Debug)]
pub struct Forge {
	generators: HashMap<String, NameGenerator>,
}

impl Forge {
	/// Creates a forge holding the built-in inventory and every `.bin`
	/// inventory found in `filepath`.
	///
	/// # Parameters
	/// - `filepath`: Path to a directory containing inventory files.
	///   Both `"folder"` and `"folder/"` are accepted, `"."` is the current
	///   directory.
	///
	/// # Errors
	/// - Returns an error if the path is not a directory.
	/// - Returns an error if an inventory fails to load or is named
	///   `"default"`.
	pub fn new<P: AsRef<Path>>(filepath: P) -> Result<Self, InventoryError> {
		let mut forge = Self::default();
		forge.load_folder(filepath)?;
		Ok(forge)
	}

	/// Loads every `.bin` inventory of a directory with default settings.
	///
	/// Either every inventory of the folder is registered or none is.
	pub fn load_folder<P: AsRef<Path>>(&mut self, filepath: P) -> Result<(), InventoryError> {
		let folder = io::resolve_folder(filepath);
		if !folder.is_dir() {
			return Err(InventoryError::NotADirectory(folder));
		}

		let mut loaded = Vec::new();
		for file in io::inventory_files(&folder)? {
			if self.generators.contains_key(&file.name) {
				return Err(InventoryError::Duplicate(file.name));
			}
			let inventory = PhonemeInventory::load(&file.path)?;
			loaded.push((file.name, NameGenerator::new(inventory, GenerationInput::default())));
		}
		self.generators.extend(loaded);

		info!("{} inventories available", self.generators.len());
		Ok(())
	}

	/// Registers a generator under `name`.
	///
	/// # Errors
	/// Returns `InventoryError::Duplicate` if the name is already taken.
	pub fn insert(&mut self, name: impl Into<String>, generator: NameGenerator) -> Result<(), InventoryError> {
		let name = name.into();
		if self.generators.contains_key(&name) {
			return Err(InventoryError::Duplicate(name));
		}
		self.generators.insert(name, generator);
		Ok(())
	}

	/// Returns the registered names, sorted.
	pub fn names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.generators.keys().cloned().collect();
		names.sort();
		names
	}

	pub fn get(&self, name: &str) -> Option<&NameGenerator> {
		self.generators.get(name)
	}

	/// Generates one name from the generator registered under `name`.
	///
	/// # Errors
	/// Returns `InventoryError::Unknown` if no generator has that name.
	pub fn generate_with<R: RandomSource + ?Sized>(&self, name: &str, rng: &mut R) -> Result<String, InventoryError> {
		self.generators
			.get(name)
			.map(|generator| generator.generate_with(rng))
			.ok_or_else(|| InventoryError::Unknown(name.to_owned()))
	}

	/// Generates one name from `name` with overriding settings.
	pub fn generate_tuned_with<R: RandomSource + ?Sized>(
		&self,
		name: &str,
		input: &GenerationInput,
		rng: &mut R,
	) -> Result<ScoredName, InventoryError> {
		self.generators
			.get(name)
			.map(|generator| generator.generate_tuned_with(input, rng))
			.ok_or_else(|| InventoryError::Unknown(name.to_owned()))
	}
}

impl Default for Forge {
	/// A forge holding only the built-in inventory.
	fn default() -> Self {
		let mut generators = HashMap::new();
		generators.insert(DEFAULT_INVENTORY.to_owned(), NameGenerator::default());
		Self { generators }
	}
}
