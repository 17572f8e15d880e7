use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, InventoryError};
use crate::model::weighted_table::WeightedTable;

const DEFAULT_ONSETS: &[(&str, f64)] = &[
	("", 5.0), ("b", 8.0), ("d", 8.0), ("m", 9.0), ("n", 9.0), ("r", 8.0), ("s", 9.0), ("t", 9.0),
	("l", 7.0), ("v", 6.0), ("p", 6.0), ("f", 5.0), ("g", 5.0), ("h", 4.0), ("k", 4.0), ("w", 3.0),
	("z", 2.0), ("ch", 3.0), ("sh", 4.0), ("th", 3.0), ("br", 3.0), ("cr", 2.0), ("dr", 2.0),
	("pl", 2.0), ("pr", 3.0), ("tr", 3.0), ("sl", 2.0), ("gl", 1.0), ("kl", 1.0), ("fl", 1.0),
];

const DEFAULT_NUCLEI: &[(&str, f64)] = &[
	("a", 10.0), ("e", 10.0), ("i", 9.0), ("o", 9.0), ("u", 6.0), ("y", 4.0), ("ae", 3.0),
	("ai", 3.0), ("ea", 2.0), ("io", 2.0), ("ia", 2.0), ("oa", 2.0), ("ou", 2.0), ("ue", 1.0),
];

const DEFAULT_CODAS: &[(&str, f64)] = &[
	("", 6.0), ("n", 9.0), ("m", 8.0), ("r", 8.0), ("l", 7.0), ("s", 5.0), ("t", 6.0), ("d", 4.0),
	("nd", 3.0), ("rt", 2.0), ("ld", 2.0), ("ng", 4.0), ("st", 3.0), ("sk", 1.0),
];

const DEFAULT_SUFFIXES: &[&str] = &[
	"ian", "elle", "ara", "ion", "ius", "or", "en", "is", "os", "a", "ix", "on", "eus", "al",
];

const DEFAULT_BANNED_CLUSTERS: &[&str] = &["bk", "dt", "gh", "kp", "qg", "zx", "xz"];

/// The complete sound inventory a generator draws from.
///
/// An inventory is immutable configuration: it is built (or loaded) once,
/// then only read. Several inventories can coexist, one per generator.
///
/// ## Invariants
/// - Onset, nucleus and coda tables are non-empty with positive weights
/// - Every banned cluster is exactly two characters, stored lower-case
/// - The suffix list may be empty (no suffix is then ever appended)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PhonemeInventory {
	/// Syllable-initial fragments; `""` means "no onset".
	onsets: WeightedTable<String>,
	/// Vowel cores.
	nuclei: WeightedTable<String>,
	/// Syllable-final fragments; `""` means "no coda".
	codas: WeightedTable<String>,
	/// Optional endings, picked uniformly.
	suffixes: Vec<String>,
	/// Two-letter sequences the sanitizer removes, applied in order.
	banned_clusters: Vec<String>,
}

impl PhonemeInventory {
	/// Creates an inventory from already-validated tables.
	///
	/// # Errors
	/// Returns `ConfigError::InvalidCluster` if a banned cluster is not
	/// exactly two characters long.
	pub fn new(
		onsets: WeightedTable<String>,
		nuclei: WeightedTable<String>,
		codas: WeightedTable<String>,
		suffixes: Vec<String>,
		banned_clusters: Vec<String>,
	) -> Result<Self, ConfigError> {
		let inventory = Self {
			onsets,
			nuclei,
			codas,
			suffixes,
			banned_clusters: banned_clusters.iter().map(|c| c.to_lowercase()).collect(),
		};
		inventory.validate()?;
		Ok(inventory)
	}

	/// Checks the invariants that table construction does not already cover.
	fn validate(&self) -> Result<(), ConfigError> {
		for cluster in &self.banned_clusters {
			if cluster.chars().count() != 2 {
				return Err(ConfigError::InvalidCluster(cluster.clone()));
			}
		}
		Ok(())
	}

	pub fn onsets(&self) -> &WeightedTable<String> {
		&self.onsets
	}

	pub fn nuclei(&self) -> &WeightedTable<String> {
		&self.nuclei
	}

	pub fn codas(&self) -> &WeightedTable<String> {
		&self.codas
	}

	pub fn suffixes(&self) -> &[String] {
		&self.suffixes
	}

	pub fn banned_clusters(&self) -> &[String] {
		&self.banned_clusters
	}

	/// Loads an inventory serialized with `postcard`.
	///
	/// Tables are re-validated while decoding and clusters right after,
	/// so a loaded inventory upholds the same invariants as one built
	/// with `new`.
	///
	/// # Errors
	/// Returns an error if the file cannot be read, cannot be decoded,
	/// or holds invalid configuration.
	pub fn load<P: AsRef<Path>>(filepath: P) -> Result<Self, InventoryError> {
		let bytes = std::fs::read(&filepath)?;
		let mut inventory: Self = postcard::from_bytes(&bytes)?;
		inventory.banned_clusters = inventory.banned_clusters.iter().map(|c| c.to_lowercase()).collect();
		inventory.validate()?;
		info!("Loaded phoneme inventory from {}", filepath.as_ref().display());
		Ok(inventory)
	}

	/// Writes the inventory to `filepath` as compact `postcard` binary.
	pub fn save<P: AsRef<Path>>(&self, filepath: P) -> Result<(), InventoryError> {
		let bytes = postcard::to_stdvec(self)?;
		std::fs::write(filepath, bytes)?;
		Ok(())
	}
}

impl Default for PhonemeInventory {
	/// The built-in euphonic inventory.
	fn default() -> Self {
		Self {
			onsets: WeightedTable::from_trusted(DEFAULT_ONSETS.iter().copied()),
			nuclei: WeightedTable::from_trusted(DEFAULT_NUCLEI.iter().copied()),
			codas: WeightedTable::from_trusted(DEFAULT_CODAS.iter().copied()),
			suffixes: DEFAULT_SUFFIXES.iter().map(|s| (*s).to_owned()).collect(),
			banned_clusters: DEFAULT_BANNED_CLUSTERS.iter().map(|s| (*s).to_owned()).collect(),
		}
	}
}
