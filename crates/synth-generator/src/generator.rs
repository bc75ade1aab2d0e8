//! Variant generator: derive new rows from a template row.

use crate::plan::ColumnPlan;
use crate::transforms::{apply_action, IncrementSteps};
use rand::rngs::StdRng;
use rand::SeedableRng;
use synth_core::GenerationSpec;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A value-from-list column has nothing to pick from
    #[error("Candidate list is empty")]
    EmptyCandidateList,

    /// Action failed for a specific column
    #[error("Column {index}: {source}")]
    Column {
        index: usize,
        #[source]
        source: Box<GeneratorError>,
    },
}

/// Generates variant rows from template rows.
///
/// The generator holds the resolved column plan, the increment steps and
/// its own RNG. With a seed, two generators built from the same plan produce
/// identical variants for identical templates.
pub struct VariantGenerator {
    /// Resolved per-column actions
    plan: ColumnPlan,
    /// Increment parameters for the run
    steps: IncrementSteps,
    /// Random source for randomize, uuid and list actions
    rng: StdRng,
}

impl VariantGenerator {
    /// Create a generator for `spec`, seeded from `spec.seed` when present.
    pub fn new(plan: ColumnPlan, spec: &GenerationSpec) -> Self {
        let rng = match spec.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            plan,
            steps: IncrementSteps::from_spec(spec),
            rng,
        }
    }

    /// Create a generator with explicit steps and seed.
    pub fn with_seed(plan: ColumnPlan, steps: IncrementSteps, seed: u64) -> Self {
        Self {
            plan,
            steps,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produce the variant for `iteration` (1-based) of `template`.
    ///
    /// Every column with an action gets exactly one transformed value; the
    /// other columns are copied. Increments are computed from the template
    /// value, never from a previous variant.
    pub fn create_variant(
        &mut self,
        template: &[String],
        iteration: u32,
    ) -> Result<Vec<String>, GeneratorError> {
        let mut row = template.to_vec();

        for (index, action) in self.plan.actions() {
            // Rows shorter than the header only occur with flexible readers
            let Some(field) = row.get_mut(index) else {
                continue;
            };
            *field = apply_action(action, field, iteration, &self.steps, &mut self.rng).map_err(
                |source| GeneratorError::Column {
                    index,
                    source: Box::new(source),
                },
            )?;
        }

        Ok(row)
    }

    /// Get a reference to the plan.
    pub fn plan(&self) -> &ColumnPlan {
        &self.plan
    }

    pub fn steps(&self) -> &IncrementSteps {
        &self.steps
    }
}
