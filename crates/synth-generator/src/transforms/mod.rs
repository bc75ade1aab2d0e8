//! Value transforms for the individual column actions.
//!
//! Each transform computes a new field value from the template value and
//! the run parameters. Randomized transforms draw from the caller's RNG so
//! a seeded generator stays reproducible.

pub mod increment;
pub mod one_of;
pub mod randomize;
pub mod temporal;
pub mod uuid;

use crate::generator::GeneratorError;
use rand::Rng;
use synth_core::ColumnAction;

pub use increment::{increment_value, IncrementSteps};
pub use one_of::pick_from_list;
pub use randomize::randomize_value;
pub use uuid::generate_uuid;

/// Compute the value of one field for the given iteration.
///
/// `Delete` leaves the value untouched; removal happens when the row is written.
pub fn apply_action<R: Rng>(
    action: &ColumnAction,
    value: &str,
    iteration: u32,
    steps: &IncrementSteps,
    rng: &mut R,
) -> Result<String, GeneratorError> {
    let transformed = match action {
        ColumnAction::ValueFromList(candidates) => pick_from_list(candidates, rng)?.to_string(),

        ColumnAction::Randomize => randomize_value(value, rng),

        ColumnAction::GenerateUuid => generate_uuid(rng),

        ColumnAction::Increment => steps.apply(value, iteration),

        ColumnAction::Delete => value.to_string(),
    };
    Ok(transformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use synth_core::TimestampIncrementMode;

    fn steps() -> IncrementSteps {
        IncrementSteps::new(1, 5, TimestampIncrementMode::DayOnly)
    }

    #[test]
    fn test_apply_increment_is_cumulative() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = apply_action(&ColumnAction::Increment, "INV-010", 3, &steps(), &mut rng).unwrap();
        assert_eq!(value, "INV-025");
    }

    #[test]
    fn test_apply_value_from_list() {
        let mut rng = StdRng::seed_from_u64(42);
        let action = ColumnAction::ValueFromList(vec!["only".to_string()]);
        let value = apply_action(&action, "before", 1, &steps(), &mut rng).unwrap();
        assert_eq!(value, "only");
    }

    #[test]
    fn test_apply_empty_list_fails() {
        let mut rng = StdRng::seed_from_u64(42);
        let action = ColumnAction::ValueFromList(vec![]);
        let result = apply_action(&action, "before", 1, &steps(), &mut rng);
        assert!(matches!(result, Err(GeneratorError::EmptyCandidateList)));
    }

    #[test]
    fn test_apply_delete_keeps_value() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = apply_action(&ColumnAction::Delete, " kept ", 1, &steps(), &mut rng).unwrap();
        assert_eq!(value, " kept ");
    }
}
