//! Core types for the csv-synth data expansion engine.
//!
//! This crate provides the configuration model shared by the generator and
//! the streaming CSV pipeline:
//!
//! - [`GenerationSpec`] - Fully resolved run parameters, loadable from YAML
//! - [`ColumnAction`] - The transformation configured for a column
//! - [`TimestampIncrementMode`] - How zoned timestamps are advanced
//! - [`RowRange`] - Inclusive 1-based range of source rows to suppress
//!
//! # Architecture
//!
//! ```text
//! synth-core (this crate)
//!    │
//!    ├─── synth-generator  (header resolution, value transforms, variants)
//!    │
//!    └─── synth-csv        (streaming pipeline, deletion filter)
//! ```
//!
//! # Example
//!
//! ```rust
//! use synth_core::GenerationSpec;
//!
//! let spec = GenerationSpec::from_yaml(r#"
//! rows_to_add: 3
//! increment_columns: [id, signup_date]
//! uuid_columns: [external_ref]
//! delete_rows: "2-4"
//! "#).unwrap();
//!
//! assert_eq!(spec.rows_to_add, 3);
//! assert!(spec.has_deletions());
//! ```

pub mod action;
pub mod range;
pub mod spec;

// Re-exports for convenience
pub use action::{ColumnAction, TimestampIncrementMode};
pub use range::RowRange;
pub use spec::{GenerationSpec, SpecError};
