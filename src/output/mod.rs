//! Writers for assembly results.
//!
//! - [`fasta`]: contigs as FASTA records named `contig_<n>` (1-based)

use thiserror::Error;

pub mod fasta;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
