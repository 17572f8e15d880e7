/// Returns `true` for the vowel class `{a, e, i, o, u, y}`, case-insensitive.
pub fn is_vowel(c: char) -> bool {
	matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Returns `true` for letters outside the vowel class.
///
/// Digits, punctuation and whitespace are neither vowels nor consonants.
pub fn is_consonant(c: char) -> bool {
	c.is_alphabetic() && !is_vowel(c)
}

/// Case-insensitive character equality.
pub fn same_letter(a: char, b: char) -> bool {
	a == b || a.to_lowercase().eq(b.to_lowercase())
}
