//! Readers that extract raw nucleotide sequences from read files.
//!
//! This module provides parsers for:
//!
//! - **FASTA**: `.fa`, `.fasta`, `.fna`
//! - **FASTQ**: `.fq`, `.fastq`, and any other extension
//!
//! Each may be gzip or bgzip compressed (`.gz`, `.bgz`).
//!
//! ## Example
//!
//! ```rust,no_run
//! use greedy_dbg::parsing::read_sequences;
//! use std::path::Path;
//!
//! let sequences = read_sequences(Path::new("reads.fastq.gz")).unwrap();
//! println!("{} reads", sequences.len());
//! ```
//!
//! Sequences are returned as written, in file order. No case folding or
//! character filtering happens here; that is the indexer's job.

use std::path::Path;
use thiserror::Error;

pub mod fasta;
pub mod fastq;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file '{0}' does not exist")]
    NotFound(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}

/// Read file format, chosen from the file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceFormat {
    Fasta,
    Fastq,
}

impl SequenceFormat {
    /// FASTA for FASTA extensions, FASTQ for everything else
    #[must_use]
    pub fn detect(path: &Path) -> Self {
        if fasta::is_fasta_file(path) {
            Self::Fasta
        } else {
            Self::Fastq
        }
    }
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub(crate) fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read every sequence from a FASTA or FASTQ file.
///
/// # Errors
///
/// Returns `ParseError::NotFound` if the file does not exist, `ParseError::Io`
/// if it cannot be read, or `ParseError::Noodles` if a record is malformed.
pub fn read_sequences(path: &Path) -> Result<Vec<String>, ParseError> {
    if !path.exists() {
        return Err(ParseError::NotFound(path.display().to_string()));
    }

    match SequenceFormat::detect(path) {
        SequenceFormat::Fasta => fasta::read_fasta_file(path),
        SequenceFormat::Fastq => fastq::read_fastq_file(path),
    }
}
