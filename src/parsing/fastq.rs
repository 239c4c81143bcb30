//! Parser for FASTQ files using noodles.
//!
//! Only the sequence line of each record is kept; names and quality
//! scores are discarded.

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fastq;
use tracing::debug;

use super::{is_gzipped, ParseError};

/// Read all sequences from a FASTQ file, in file order.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read or `ParseError::Noodles`
/// if a record cannot be parsed.
pub fn read_fastq_file(path: &Path) -> Result<Vec<String>, ParseError> {
    let file = std::fs::File::open(path)?;
    let sequences = if is_gzipped(path) {
        read_fastq(BufReader::new(MultiGzDecoder::new(file)))?
    } else {
        read_fastq(BufReader::new(file))?
    };

    debug!(path = %path.display(), sequences = sequences.len(), "read FASTQ");
    Ok(sequences)
}

/// Read all sequences from buffered FASTQ text
///
/// # Errors
///
/// Returns `ParseError::Noodles` if a record cannot be parsed.
pub fn read_fastq<R: BufRead>(inner: R) -> Result<Vec<String>, ParseError> {
    let mut reader = fastq::io::Reader::new(inner);
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTQ record: {e}")))?;
        sequences.push(String::from_utf8_lossy(record.sequence()).into_owned());
    }

    Ok(sequences)
}
