//! CLI argument definitions for the generate command.

use clap::Args;
use std::path::PathBuf;
use synth_core::{GenerationSpec, RowRange, SpecError, TimestampIncrementMode};

/// Arguments of a full expansion run.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Source CSV file (first line is the header)
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Destination CSV file, created or truncated
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Abort the run once this many seconds have elapsed
    #[arg(long, env = "CSV_SYNTH_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    #[command(flatten)]
    pub spec: SpecArgs,
}

/// Generation parameters. Flags override the values of `--spec`.
#[derive(Args, Clone, Debug, Default)]
pub struct SpecArgs {
    /// Path to generation spec YAML file
    #[arg(long, short = 's', env = "CSV_SYNTH_SPEC")]
    pub spec: Option<PathBuf>,

    /// Variants generated per template row
    #[arg(long, short = 'n')]
    pub rows_to_add: Option<u32>,

    /// Days (or seconds) added per iteration to dates and timestamps
    #[arg(long, allow_hyphen_values = true)]
    pub date_step: Option<i64>,

    /// Amount added per iteration to trailing numbers
    #[arg(long, allow_hyphen_values = true)]
    pub number_step: Option<i64>,

    /// How zoned timestamps are advanced
    #[arg(long, value_enum)]
    pub timestamp_mode: Option<TimestampIncrementMode>,

    /// Generate every variant from the first data row only
    #[arg(long)]
    pub first_row_only: bool,

    /// Columns to increment (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub increment: Vec<String>,

    /// Columns to fill with fresh UUIDs (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub uuid: Vec<String>,

    /// Columns to randomize (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub randomize: Vec<String>,

    /// Candidate values for a column, as `column=a|b|c` (repeatable)
    #[arg(long = "value-list", value_name = "COLUMN=VALUES")]
    pub value_lists: Vec<String>,

    /// Columns to remove from the output (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub delete_columns: Vec<String>,

    /// Source rows to drop, as `start-end` or a single row number
    #[arg(long)]
    pub delete_rows: Option<RowRange>,

    /// Random seed for reproducible output (same seed = same data)
    #[arg(long, env = "CSV_SYNTH_SEED")]
    pub seed: Option<u64>,
}

impl SpecArgs {
    /// Build the generation spec: file values first, then flag overrides.
    ///
    /// Column selections given as flags are added to those of the file.
    pub fn resolve(&self) -> Result<GenerationSpec, SpecError> {
        let mut spec = match &self.spec {
            Some(path) => GenerationSpec::from_file(path)?,
            None => GenerationSpec::default(),
        };

        if let Some(rows_to_add) = self.rows_to_add {
            spec.rows_to_add = rows_to_add;
        }
        if let Some(step) = self.date_step {
            spec.date_increment_step = step;
        }
        if let Some(step) = self.number_step {
            spec.number_increment_step = step;
        }
        if let Some(mode) = self.timestamp_mode {
            spec.timestamp_mode = mode;
        }
        if self.first_row_only {
            spec.generate_from_first_row_only = true;
        }
        if self.delete_rows.is_some() {
            spec.delete_rows = self.delete_rows;
        }
        if self.seed.is_some() {
            spec.seed = self.seed;
        }

        for name in &self.increment {
            if !spec.increment_columns.contains(name) {
                spec.increment_columns.push(name.clone());
            }
        }
        spec.uuid_columns.extend(self.uuid.iter().cloned());
        spec.randomize_columns.extend(self.randomize.iter().cloned());
        spec.delete_columns.extend(self.delete_columns.iter().cloned());

        for entry in &self.value_lists {
            let (column, candidates) = parse_value_list(entry)?;
            spec.value_from_list.insert(column, candidates);
        }

        Ok(spec)
    }
}

/// Parse `column=a|b|c` into the column name and its candidates.
fn parse_value_list(entry: &str) -> Result<(String, Vec<String>), SpecError> {
    let (column, values) = entry.split_once('=').ok_or_else(|| {
        SpecError::InvalidConfiguration(format!(
            "value list '{entry}' must look like column=a|b|c"
        ))
    })?;

    let candidates = values
        .split('|')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();

    Ok((column.trim().to_string(), candidates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: GenerateArgs,
    }

    fn parse(args: &[&str]) -> GenerateArgs {
        let mut argv = vec!["csv-synth", "-i", "in.csv", "-o", "out.csv"];
        argv.extend_from_slice(args);
        TestCli::parse_from(argv).args
    }

    #[test]
    fn test_flags_only() {
        let args = parse(&[
            "-n",
            "3",
            "--date-step",
            "-2",
            "--timestamp-mode",
            "day-only",
            "--increment",
            "id,signup_date",
            "--uuid",
            "ref",
            "--value-list",
            "status=open| closed |",
            "--delete-columns",
            "notes",
            "--delete-rows",
            "2-4",
            "--seed",
            "9",
        ]);
        let spec = args.spec.resolve().unwrap();

        assert_eq!(args.input, PathBuf::from("in.csv"));
        assert_eq!(spec.rows_to_add, 3);
        assert_eq!(spec.date_increment_step, -2);
        assert_eq!(spec.number_increment_step, 1);
        assert_eq!(spec.timestamp_mode, TimestampIncrementMode::DayOnly);
        assert_eq!(spec.increment_columns, vec!["id", "signup_date"]);
        assert!(spec.uuid_columns.contains("ref"));
        assert_eq!(spec.value_from_list["status"], vec!["open", "closed"]);
        assert!(spec.delete_columns.contains("notes"));
        assert_eq!(spec.delete_rows, Some(RowRange::new(2, 4).unwrap()));
        assert_eq!(spec.seed, Some(9));
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "rows_to_add: 10\nnumber_increment_step: 5\nincrement_columns: [id]\nseed: 1"
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let args = parse(&["--spec", &path, "-n", "2", "--increment", "id,code"]);
        let spec = args.spec.resolve().unwrap();

        assert_eq!(spec.rows_to_add, 2);
        assert_eq!(spec.number_increment_step, 5);
        assert_eq!(spec.increment_columns, vec!["id", "code"]);
        assert_eq!(spec.seed, Some(1));
    }

    #[test]
    fn test_bad_value_list() {
        let args = parse(&["--value-list", "status"]);
        assert!(matches!(
            args.spec.resolve(),
            Err(SpecError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_bad_row_range_is_rejected_by_parser() {
        let result = TestCli::try_parse_from([
            "csv-synth",
            "-i",
            "in.csv",
            "-o",
            "out.csv",
            "--delete-rows",
            "5-1",
        ]);
        assert!(result.is_err());
    }
}
