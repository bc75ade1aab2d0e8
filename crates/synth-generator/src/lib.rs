//! Value transforms and row variant generation for csv-synth.
//!
//! This crate turns a [`GenerationSpec`](synth_core::GenerationSpec) and a
//! source header into a [`ColumnPlan`], then derives variant rows from
//! template rows with a [`VariantGenerator`]. The generator owns a seedable
//! RNG so runs with the same seed produce the same output.
//!
//! # Architecture
//!
//! ```text
//! GenerationSpec + Header
//!        │
//!        ▼
//!   ColumnPlan::resolve        (name -> index, one action per index)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ VariantGenerator │
//! │                  │
//! │  - plan          │
//! │  - steps         │
//! │  - rng (StdRng)  │
//! └────────┬─────────┘
//!          │  create_variant(template, iteration)
//!          ▼
//!       Vec<String>
//! ```
//!
//! # Example
//!
//! ```rust
//! use synth_core::GenerationSpec;
//! use synth_generator::{ColumnPlan, VariantGenerator};
//!
//! let spec = GenerationSpec {
//!     increment_columns: vec!["id".to_string(), "signup_date".to_string()],
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let header = vec!["id".to_string(), "name".to_string(), "signup_date".to_string()];
//! let plan = ColumnPlan::resolve(&header, &spec);
//!
//! let mut generator = VariantGenerator::new(plan, &spec);
//! let template = vec!["A100".to_string(), "Alice".to_string(), "2024-01-01".to_string()];
//! let row = generator.create_variant(&template, 2).unwrap();
//! assert_eq!(row, vec!["A102", "Alice", "2024-01-03"]);
//! ```
//!
//! # Transforms
//!
//! - `increment` - Advance zoned timestamps, dates and trailing numbers
//! - `randomize` - Random booleans, shifted dates, character substitution
//! - `uuid` - Upper-case v4 UUIDs drawn from the generator RNG
//! - `one_of` - Uniform pick from a candidate list

pub mod generator;
pub mod plan;
pub mod transforms;

// Re-exports for convenience
pub use generator::{GeneratorError, VariantGenerator};
pub use plan::{resolve_columns, ColumnPlan};
pub use transforms::IncrementSteps;
