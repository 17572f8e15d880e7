use crate::model::inventory::PhonemeInventory;
use crate::model::letters::{is_consonant, is_vowel, same_letter};
use crate::random::RandomSource;

/// One assembled syllable and the context it hands to the next one.
#[derive(Clone, Debug, PartialEq)]
pub struct Syllable {
	pub text: String,
	/// Last character of `text`, `None` when the syllable is empty.
	pub last_char: Option<char>,
}

/// Assembles syllables from an inventory, smoothing syllable boundaries.
///
/// Two boundary rules are applied against the previous syllable's last
/// character:
/// - hiatus avoidance: after a vowel, an empty onset is replaced by the
///   first non-empty, consonant-initial onset in declared table order
/// - anti-repetition: a syllable starting with the previous last character
///   (case-insensitive) loses that first character
pub struct SyllableBuilder<'a> {
	inventory: &'a PhonemeInventory,
	/// Onset forced after a vowel; `""` when the table has none.
	hiatus_onset: &'a str,
}

impl<'a> SyllableBuilder<'a> {
	pub fn new(inventory: &'a PhonemeInventory) -> Self {
		let hiatus_onset = inventory
			.onsets()
			.values()
			.find(|onset| onset.chars().next().is_some_and(is_consonant))
			.map(String::as_str)
			.unwrap_or("");
		Self { inventory, hiatus_onset }
	}

	/// Builds one syllable following `prev_last_char`.
	///
	/// Draws exactly three values from `rng`: onset, nucleus, coda.
	pub fn build<R: RandomSource + ?Sized>(&self, prev_last_char: Option<char>, rng: &mut R) -> Syllable {
		let mut onset = self.inventory.onsets().sample(rng).as_str();
		if onset.is_empty() && prev_last_char.is_some_and(is_vowel) {
			onset = self.hiatus_onset;
		}
		let nucleus = self.inventory.nuclei().sample(rng);
		let coda = self.inventory.codas().sample(rng);

		let mut text = String::with_capacity(onset.len() + nucleus.len() + coda.len());
		text.push_str(onset);
		text.push_str(nucleus);
		text.push_str(coda);

		if let (Some(prev), Some(first)) = (prev_last_char, text.chars().next()) {
			if same_letter(prev, first) {
				text.remove(0);
			}
		}

		let last_char = text.chars().last();
		Syllable { text, last_char }
	}
}
