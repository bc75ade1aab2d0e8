//! Streaming pipeline: source CSV in, expanded CSV out.

use crate::cancel::CancelFlag;
use crate::error::SynthError;
use crate::filter::DeletionFilter;
use csv::{StringRecord, Writer};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use synth_core::GenerationSpec;
use synth_generator::{ColumnPlan, VariantGenerator};
use tracing::{debug, info};

/// Default buffer size for file-backed runs.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Source rows between debug log lines.
const LOG_INTERVAL: u64 = 10_000;

/// How template rows are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// One template row, `rows_to_add` variants of it
    FirstRowOnly,
    /// Every surviving source row is a template
    FullIteration,
}

impl RunMode {
    pub fn for_spec(spec: &GenerationSpec) -> Self {
        if spec.generate_from_first_row_only {
            Self::FirstRowOnly
        } else {
            Self::FullIteration
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstRowOnly => f.write_str("first-row-only"),
            Self::FullIteration => f.write_str("full-iteration"),
        }
    }
}

/// Metrics from a pipeline run.
#[derive(Debug, Clone, Default)]
pub struct RunMetrics {
    /// Rows written, header included.
    pub rows_written: u64,
    /// Source data rows read.
    pub source_rows_read: u64,
    /// Source data rows suppressed by the row range.
    pub source_rows_skipped: u64,
    /// Generated variant rows written.
    pub variants_generated: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl RunMetrics {
    /// Calculate rows written per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// One-line outcome for status displays.
    pub fn status_message(&self, spec: &GenerationSpec) -> String {
        if spec.has_deletions() {
            format!(
                "File saved with deletions. Wrote {} rows.",
                self.rows_written
            )
        } else {
            format!("Wrote {} rows to the new file.", self.rows_written)
        }
    }
}

/// Expands a source CSV according to a [`GenerationSpec`].
///
/// The pipeline holds only configuration; every call to [`SynthPipeline::run`]
/// is an independent run over its own pair of streams.
pub struct SynthPipeline {
    spec: GenerationSpec,
    cancel: Option<CancelFlag>,
    timeout: Option<Duration>,
}

impl SynthPipeline {
    /// Create a pipeline, rejecting specs that cannot produce a run.
    pub fn new(spec: GenerationSpec) -> Result<Self, SynthError> {
        spec.validate()?;
        Ok(Self {
            spec,
            cancel: None,
            timeout: None,
        })
    }

    /// Stop between rows once `flag` is raised.
    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Stop between rows once `timeout` has elapsed since the run started.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Get a reference to the generation spec.
    pub fn spec(&self) -> &GenerationSpec {
        &self.spec
    }

    /// Expand `input` into `output`, creating or truncating the output file.
    pub fn run_files<P, Q, F>(
        &self,
        input: P,
        output: Q,
        on_progress: F,
    ) -> Result<RunMetrics, SynthError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        F: FnMut(u64),
    {
        let input = input.as_ref();
        let output = output.as_ref();
        info!(
            "Expanding CSV '{}' into '{}'",
            input.display(),
            output.display()
        );

        let source = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, File::open(input)?);
        let destination = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, File::create(output)?);
        self.run(source, destination, on_progress)
    }

    /// Expand `source` into `destination`.
    ///
    /// `on_progress` is called in-line once per source row with its 1-based
    /// row number, or once per variant with the iteration number when
    /// generating from the first row only. Both streams are dropped before
    /// this returns, on success and on failure alike.
    pub fn run<R, W, F>(
        &self,
        source: R,
        destination: W,
        mut on_progress: F,
    ) -> Result<RunMetrics, SynthError>
    where
        R: Read,
        W: Write,
        F: FnMut(u64),
    {
        let start_time = Instant::now();
        let deadline = self.timeout.map(|timeout| start_time + timeout);
        let mode = RunMode::for_spec(&self.spec);
        let mut metrics = RunMetrics::default();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(source);
        let mut writer = Writer::from_writer(destination);

        let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if header.is_empty() {
            return Err(SynthError::EmptyInput);
        }

        // Actions address columns by their position before deletion
        let plan = ColumnPlan::resolve(&header, &self.spec);
        if !plan.has_actions() {
            debug!("No column actions resolved, variants are copies of their templates");
        }
        let filter = DeletionFilter::from_plan(&plan, self.spec.delete_rows);
        let mut generator = VariantGenerator::new(plan, &self.spec);

        info!(
            "Starting {} run: {} columns, {} variants per row",
            mode,
            header.len(),
            self.spec.rows_to_add
        );

        writer.write_record(filter.project(&header))?;
        metrics.rows_written += 1;

        let mut run = Run {
            reader: &mut reader,
            writer: &mut writer,
            generator: &mut generator,
            filter: &filter,
            metrics: &mut metrics,
            rows_to_add: self.spec.rows_to_add,
            cancel: self.cancel.as_ref(),
            deadline,
        };
        match mode {
            RunMode::FirstRowOnly => run.first_row_only(&mut on_progress)?,
            RunMode::FullIteration => run.full_iteration(&mut on_progress)?,
        }

        writer.flush()?;
        metrics.total_duration = start_time.elapsed();

        info!(
            "CSV expansion complete: {} rows written ({} source, {} skipped, {} generated) in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.source_rows_read,
            metrics.source_rows_skipped,
            metrics.variants_generated,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}

/// Borrowed state of one run in progress.
struct Run<'a, R: Read, W: Write> {
    reader: &'a mut csv::Reader<R>,
    writer: &'a mut Writer<W>,
    generator: &'a mut VariantGenerator,
    filter: &'a DeletionFilter,
    metrics: &'a mut RunMetrics,
    rows_to_add: u32,
    cancel: Option<&'a CancelFlag>,
    deadline: Option<Instant>,
}

impl<R: Read, W: Write> Run<'_, R, W> {
    /// One template row followed by its variants; progress per variant.
    fn first_row_only(&mut self, on_progress: &mut impl FnMut(u64)) -> Result<(), SynthError> {
        let mut record = StringRecord::new();
        let mut row_number = 0u64;

        let template = loop {
            if !self.reader.read_record(&mut record)? {
                break None;
            }
            row_number += 1;
            self.metrics.source_rows_read += 1;
            if self.filter.suppresses(row_number) {
                self.metrics.source_rows_skipped += 1;
                continue;
            }
            break Some(record_to_row(&record));
        };

        let Some(template) = template else {
            debug!("No template row available, only the header was written");
            return Ok(());
        };

        self.write_row(&template)?;
        for iteration in 1..=self.rows_to_add {
            self.check_interrupted()?;
            self.write_variant(&template, iteration)?;
            on_progress(u64::from(iteration));
        }
        Ok(())
    }

    /// Every source row followed by its variants; progress per source row.
    fn full_iteration(&mut self, on_progress: &mut impl FnMut(u64)) -> Result<(), SynthError> {
        let mut record = StringRecord::new();
        let mut row_number = 0u64;

        while self.reader.read_record(&mut record)? {
            self.check_interrupted()?;
            row_number += 1;
            self.metrics.source_rows_read += 1;

            if self.filter.suppresses(row_number) {
                self.metrics.source_rows_skipped += 1;
            } else {
                let template = record_to_row(&record);
                self.write_row(&template)?;
                for iteration in 1..=self.rows_to_add {
                    self.write_variant(&template, iteration)?;
                }
            }

            on_progress(row_number);
            if row_number % LOG_INTERVAL == 0 {
                debug!(
                    "Processed {} source rows, {} rows written",
                    row_number, self.metrics.rows_written
                );
            }
        }
        Ok(())
    }

    fn write_row(&mut self, row: &[String]) -> Result<(), SynthError> {
        self.writer.write_record(self.filter.project(row))?;
        self.metrics.rows_written += 1;
        Ok(())
    }

    fn write_variant(&mut self, template: &[String], iteration: u32) -> Result<(), SynthError> {
        let variant = self.generator.create_variant(template, iteration)?;
        self.write_row(&variant)?;
        self.metrics.variants_generated += 1;
        Ok(())
    }

    fn check_interrupted(&self) -> Result<(), SynthError> {
        let rows_written = self.metrics.rows_written;
        if self.cancel.is_some_and(CancelFlag::is_cancelled) {
            info!("Run cancelled after {} rows", rows_written);
            return Err(SynthError::Cancelled { rows_written });
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            info!("Run timed out after {} rows", rows_written);
            return Err(SynthError::TimedOut { rows_written });
        }
        Ok(())
    }
}

fn record_to_row(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}
