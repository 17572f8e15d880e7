use crate::model::letters::{is_vowel, same_letter};

/// Repairs surface defects of a candidate name.
///
/// Three ordered passes:
/// 1. runs of 3+ identical letters (case-insensitive) collapse to 2
/// 2. banned clusters are reduced to their first letter
/// 3. runs of 3+ non-vowels are truncated to their first 2 characters
///
/// The output is never longer than the input and may be empty.
pub struct Sanitizer<'a> {
	banned_clusters: &'a [String],
}

impl<'a> Sanitizer<'a> {
	pub fn new(banned_clusters: &'a [String]) -> Self {
		Self { banned_clusters }
	}

	pub fn sanitize(&self, name: &str) -> String {
		let chars: Vec<char> = name.chars().collect();
		let chars = collapse_triples(&chars);
		let chars = self.strip_banned_clusters(chars);
		truncate_consonant_runs(&chars).into_iter().collect()
	}

	/// Replaces every banned cluster by its first letter, cluster by cluster
	/// in list order.
	///
	/// A replacement can expose a new occurrence ("dtt" -> "dt"), so the
	/// ordered pass repeats until it changes nothing. Each replacement
	/// shortens the name, which bounds the number of passes.
	fn strip_banned_clusters(&self, mut chars: Vec<char>) -> Vec<char> {
		loop {
			let mut changed = false;
			for cluster in self.banned_clusters {
				let mut pair = cluster.chars();
				let (Some(first), Some(second)) = (pair.next(), pair.next()) else {
					continue;
				};
				let (replaced, hit) = replace_pair(&chars, first, second);
				chars = replaced;
				changed |= hit;
			}
			if !changed {
				return chars;
			}
		}
	}
}

/// Collapses each run of 3+ case-insensitively identical characters to two
/// copies of the run's first character.
fn collapse_triples(chars: &[char]) -> Vec<char> {
	let mut out = Vec::with_capacity(chars.len());
	let mut start = 0;
	while start < chars.len() {
		let head = chars[start];
		let end = start + chars[start..].iter().take_while(|c| same_letter(**c, head)).count();
		if end - start >= 3 {
			out.push(head);
			out.push(head);
		} else {
			out.extend_from_slice(&chars[start..end]);
		}
		start = end;
	}
	out
}

/// Left-to-right, non-overlapping, case-insensitive replacement of
/// `first second` by `first`. Returns whether anything was replaced.
fn replace_pair(chars: &[char], first: char, second: char) -> (Vec<char>, bool) {
	let mut out = Vec::with_capacity(chars.len());
	let mut hit = false;
	let mut i = 0;
	while i < chars.len() {
		if i + 1 < chars.len() && same_letter(chars[i], first) && same_letter(chars[i + 1], second) {
			out.push(first);
			hit = true;
			i += 2;
		} else {
			out.push(chars[i]);
			i += 1;
		}
	}
	(out, hit)
}

/// Truncates every maximal run of 3+ non-vowel characters to its first two.
fn truncate_consonant_runs(chars: &[char]) -> Vec<char> {
	let mut out = Vec::with_capacity(chars.len());
	let mut start = 0;
	while start < chars.len() {
		if is_vowel(chars[start]) {
			out.push(chars[start]);
			start += 1;
			continue;
		}
		let end = start + chars[start..].iter().take_while(|c| !is_vowel(**c)).count();
		let keep = if end - start >= 3 { start + 2 } else { end };
		out.extend_from_slice(&chars[start..keep]);
		start = end;
	}
	out
}
