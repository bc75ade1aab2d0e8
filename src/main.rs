//! Command-line interface for csv-synth
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # Two incremented variants per row, ids and dates advanced by one
//! csv-synth generate -i signups.csv -o signups_more.csv \
//!   --rows-to-add 2 --increment id,signup_date --timestamp-mode day-only
//!
//! # 500 variants of the first row only, with fresh UUIDs and a status list
//! csv-synth generate -i orders.csv -o orders_more.csv \
//!   --first-row-only -n 500 --uuid order_id \
//!   --value-list "status=open|closed|pending"
//!
//! # Everything from a spec file, dropping a column and rows 2 to 4
//! csv-synth generate -i input.csv -o output.csv \
//!   --spec synth.yaml --delete-columns notes --delete-rows 2-4
//! ```
//!
//! ## Inspect
//! ```bash
//! csv-synth count -i input.csv
//! csv-synth header -i input.csv
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;
use synth_csv::{
    count_rows, read_header, GenerateArgs, SynthError, SynthPipeline, DEFAULT_BUFFER_SIZE,
};

/// Progress lines emitted over a run.
const PROGRESS_STEPS: u64 = 10;

#[derive(Parser)]
#[command(name = "csv-synth")]
#[command(about = "Expand a CSV file with synthetic rows derived from its existing rows")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the source rows plus generated variants to a new file
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Print the number of data rows in a CSV file
    Count {
        /// CSV file to inspect
        #[arg(long, short = 'i')]
        input: PathBuf,
    },

    /// Print the header of a CSV file, one column per line
    Header {
        /// CSV file to inspect
        #[arg(long, short = 'i')]
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        match e.chain().find_map(|cause| cause.downcast_ref::<SynthError>()) {
            Some(err) => eprintln!("Error [{}]: {e:#}", err.kind()),
            None => eprintln!("Error: {e:#}"),
        }
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => run_generate(args),
        Commands::Count { input } => {
            let rows = count_rows(open(&input)?)
                .with_context(|| format!("Failed to count rows of {input:?}"))?;
            println!("{rows}");
            Ok(())
        }
        Commands::Header { input } => {
            let header = read_header(open(&input)?)
                .with_context(|| format!("Failed to read header of {input:?}"))?;
            for column in header {
                println!("{column}");
            }
            Ok(())
        }
    }
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let spec = args
        .spec
        .resolve()
        .context("Failed to load generation spec")?;

    // Denominator for progress lines: variants in first-row mode, source rows otherwise
    let total = if spec.generate_from_first_row_only {
        u64::from(spec.rows_to_add)
    } else {
        count_rows(open(&args.input)?)
            .with_context(|| format!("Failed to count rows of {:?}", args.input))?
    };

    tracing::info!(
        "Generating {} variants per row from {:?} ({} progress units, seed={:?})",
        spec.rows_to_add,
        args.input,
        total,
        spec.seed
    );

    let mut pipeline = SynthPipeline::new(spec).context("Invalid generation spec")?;
    if let Some(secs) = args.timeout_secs {
        pipeline = pipeline.with_timeout(Duration::from_secs(secs));
    }

    let step = (total / PROGRESS_STEPS).max(1);
    let metrics = pipeline
        .run_files(&args.input, &args.output, |done| {
            if done % step == 0 || done == total {
                tracing::info!("Progress: {} / {}", done, total);
            }
        })
        .with_context(|| format!("Failed to expand {:?} into {:?}", args.input, args.output))?;

    println!("{}", metrics.status_message(pipeline.spec()));
    Ok(())
}

fn open(path: &Path) -> anyhow::Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("Failed to open {path:?}"))?;
    Ok(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file))
}
