//! Streaming CSV expansion pipeline.
//!
//! This crate drives the generator over a source CSV: it reads the header,
//! resolves the column plan, writes every source row followed by its
//! generated variants, drops deleted columns and rows, and reports progress
//! through a synchronous callback.
//!
//! # Example
//!
//! ```ignore
//! use synth_csv::SynthPipeline;
//! use synth_core::GenerationSpec;
//!
//! let spec = GenerationSpec::from_file("spec.yaml")?;
//! let pipeline = SynthPipeline::new(spec)?;
//!
//! let metrics = pipeline.run_files("input.csv", "output.csv", |row| {
//!     println!("processed {row}");
//! })?;
//! println!("wrote {} rows", metrics.rows_written);
//! ```

pub mod args;
mod cancel;
mod error;
mod filter;
mod inspect;
mod pipeline;

pub use args::{GenerateArgs, SpecArgs};
pub use cancel::CancelFlag;
pub use error::SynthError;
pub use filter::DeletionFilter;
pub use inspect::{count_rows, read_header};
pub use pipeline::{RunMetrics, RunMode, SynthPipeline, DEFAULT_BUFFER_SIZE};
