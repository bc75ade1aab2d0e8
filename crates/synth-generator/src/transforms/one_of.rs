//! Uniform selection from a candidate list.

use crate::generator::GeneratorError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick a uniformly random candidate.
///
/// An empty list is a configuration error rather than a reason to keep the
/// original value.
pub fn pick_from_list<'a, R: Rng>(
    candidates: &'a [String],
    rng: &mut R,
) -> Result<&'a str, GeneratorError> {
    candidates
        .choose(rng)
        .map(String::as_str)
        .ok_or(GeneratorError::EmptyCandidateList)
}
