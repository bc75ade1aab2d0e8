//! Pre-pass helpers: count data rows and read the header without a full run.

use crate::error::SynthError;
use std::io::Read;
use tracing::debug;

/// Count data rows, excluding the header. Empty input has zero rows.
///
/// Used to size progress denominators before the main run.
pub fn count_rows<R: Read>(source: R) -> Result<u64, SynthError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(source);

    let mut record = csv::ByteRecord::new();
    let mut count = 0u64;
    while reader.read_byte_record(&mut record)? {
        count += 1;
    }

    debug!("Counted {} data rows", count);
    Ok(count)
}

/// Read only the header row.
pub fn read_header<R: Read>(source: R) -> Result<Vec<String>, SynthError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(source);

    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if header.is_empty() {
        return Err(SynthError::EmptyInput);
    }
    Ok(header)
}
