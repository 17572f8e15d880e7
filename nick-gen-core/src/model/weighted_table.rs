use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;
use crate::random::RandomSource;

/// A value paired with its relative selection weight.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WeightedItem<T> {
	pub value: T,
	pub weight: f64,
}

/// An ordered, non-empty list of weighted values.
///
/// Sampling scans the items in declared order, so two tables holding the
/// same items in a different order produce different draws for the same
/// random input.
///
/// ## Invariants
/// - The table holds at least one item
/// - Every weight is strictly positive and finite
///
/// Deserialization enforces the same invariants as `new`.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedTable<T> {
	items: Vec<WeightedItem<T>>,
}

impl<T> WeightedTable<T> {
	/// Creates a table from weighted items.
	///
	/// # Errors
	/// - `ConfigError::EmptyTable` if `items` is empty.
	/// - `ConfigError::InvalidWeight` on the first non-positive or non-finite weight.
	pub fn new(items: Vec<WeightedItem<T>>) -> Result<Self, ConfigError> {
		if items.is_empty() {
			return Err(ConfigError::EmptyTable);
		}
		for (index, item) in items.iter().enumerate() {
			if !item.weight.is_finite() || item.weight <= 0.0 {
				return Err(ConfigError::InvalidWeight { index, weight: item.weight });
			}
		}
		Ok(Self { items })
	}

	/// Creates a table from `(value, weight)` pairs.
	pub fn from_pairs<I, V>(pairs: I) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = (V, f64)>,
		V: Into<T>,
	{
		Self::new(
			pairs
				.into_iter()
				.map(|(value, weight)| WeightedItem { value: value.into(), weight })
				.collect(),
		)
	}

	/// Creates a table where every value has weight 1.
	pub fn uniform<I, V>(values: I) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = V>,
		V: Into<T>,
	{
		Self::from_pairs(values.into_iter().map(|value| (value, 1.0)))
	}

	/// Builds a table from compiled-in data without validation.
	///
	/// Only used for built-in defaults, whose weights are checked by tests.
	pub(crate) fn from_trusted<I, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (V, f64)>,
		V: Into<T>,
	{
		Self {
			items: pairs
				.into_iter()
				.map(|(value, weight)| WeightedItem { value: value.into(), weight })
				.collect(),
		}
	}

	/// Draws one value, with probability proportional to its weight.
	///
	/// This method performs:
	/// - a sum of all weights
	/// - one draw `r` in `[0, total)`
	/// - an ordered scan subtracting each weight from `r` until `r < weight`
	///
	/// If floating-point rounding exhausts the scan, the first value is
	/// returned.
	pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> &T {
		let total: f64 = self.items.iter().map(|item| item.weight).sum();
		&self.items[self.index_at(rng.next_unit() * total)].value
	}

	/// Index selected by a point `r` on the cumulative weight line.
	///
	/// A point past the last weight selects index 0.
	fn index_at(&self, mut r: f64) -> usize {
		for (index, item) in self.items.iter().enumerate() {
			if r < item.weight {
				return index;
			}
			r -= item.weight;
		}
		0
	}

	/// Iterates over the values in declared order.
	pub fn values(&self) -> impl Iterator<Item = &T> {
		self.items.iter().map(|item| &item.value)
	}

	/// Returns the weighted items in declared order.
	pub fn items(&self) -> &[WeightedItem<T>] {
		&self.items
	}

	/// Number of items in the table (always at least 1).
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Always `false`; kept for API symmetry with collections.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl<T: Serialize> Serialize for WeightedTable<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.items.serialize(serializer)
	}
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for WeightedTable<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let items = Vec::<WeightedItem<T>>::deserialize(deserializer)?;
		Self::new(items).map_err(serde::de::Error::custom)
	}
}
