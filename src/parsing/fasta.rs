//! Parser for FASTA files using noodles.
//!
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::debug;

use super::{is_gzipped, ParseError};

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Read all sequences from a FASTA file, in file order.
///
/// Multi-line records are joined into a single sequence.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read or `ParseError::Noodles`
/// if a record cannot be parsed.
pub fn read_fasta_file(path: &Path) -> Result<Vec<String>, ParseError> {
    let file = std::fs::File::open(path)?;
    let sequences = if is_gzipped(path) {
        read_fasta(BufReader::new(MultiGzDecoder::new(file)))?
    } else {
        read_fasta(BufReader::new(file))?
    };

    debug!(path = %path.display(), sequences = sequences.len(), "read FASTA");
    Ok(sequences)
}

/// Read all sequences from buffered FASTA text
///
/// # Errors
///
/// Returns `ParseError::Noodles` if a record cannot be parsed.
pub fn read_fasta<R: BufRead>(inner: R) -> Result<Vec<String>, ParseError> {
    let mut reader = fasta::io::Reader::new(inner);
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;
        let sequence: &[u8] = record.sequence().as_ref();
        sequences.push(String::from_utf8_lossy(sequence).into_owned());
    }

    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_is_fasta_file() {
        assert!(is_fasta_file(Path::new("test.fa")));
        assert!(is_fasta_file(Path::new("test.fasta")));
        assert!(is_fasta_file(Path::new("test.fna")));
        assert!(is_fasta_file(Path::new("test.fa.gz")));
        assert!(is_fasta_file(Path::new("test.fasta.gz")));
        assert!(is_fasta_file(Path::new("test.fna.bgz")));
        assert!(is_fasta_file(Path::new("/path/to/Reads.FA")));

        assert!(!is_fasta_file(Path::new("test.fq")));
        assert!(!is_fasta_file(Path::new("test.fastq.gz")));
        assert!(!is_fasta_file(Path::new("test.fai")));
    }

    #[test]
    fn test_read_fasta_multiline() {
        let text = b">r1 description\nACGTACGT\nACGT\n>r2\nGGGG\n";
        let sequences = read_fasta(&text[..]).unwrap();
        assert_eq!(sequences, vec!["ACGTACGTACGT", "GGGG"]);
    }

    #[test]
    fn test_read_fasta_keeps_case_and_ambiguity_codes() {
        let text = b">r1\nacgtN\n";
        let sequences = read_fasta(&text[..]).unwrap();
        assert_eq!(sequences, vec!["acgtN"]);
    }

    #[test]
    fn test_read_empty_fasta() {
        let sequences = read_fasta(&b""[..]).unwrap();
        assert!(sequences.is_empty());
    }

    #[test]
    fn test_read_gzipped_fasta_file() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">r1\nACGT\n>r2\nTTGCA\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
        temp.write_all(&compressed).unwrap();
        temp.flush().unwrap();

        let sequences = read_fasta_file(temp.path()).unwrap();
        assert_eq!(sequences, vec!["ACGT", "TTGCA"]);
    }
}
