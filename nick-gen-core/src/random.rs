use rand::Rng;

/// Source of uniformly distributed numbers in `[0, 1)`.
///
/// Every random decision of the generation pipeline (table sampling,
/// syllable count, suffix coin, score jitter) is drawn from a single
/// `RandomSource`, so substituting a seeded source makes a whole
/// generation call reproducible.
///
/// Any `rand::Rng` is a `RandomSource`:
/// - `rand::rng()` for production use
/// - `StdRng::seed_from_u64(..)` for reproducible runs
pub trait RandomSource {
	/// Returns the next number, uniformly distributed in `[0, 1)`.
	fn next_unit(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
	fn next_unit(&mut self) -> f64 {
		self.random::<f64>()
	}
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Test helper used to force specific branches of the pipeline.
#[cfg(test)]
pub(crate) struct ScriptedSource {
	draws: Vec<f64>,
	position: usize,
}

#[cfg(test)]
impl ScriptedSource {
	pub(crate) fn new(draws: &[f64]) -> Self {
		Self { draws: draws.to_vec(), position: 0 }
	}
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
	fn next_unit(&mut self) -> f64 {
		let value = self.draws[self.position % self.draws.len()];
		self.position += 1;
		value
	}
}
