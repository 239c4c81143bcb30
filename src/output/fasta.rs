use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use super::OutputError;
use crate::core::contig::Contig;

/// Write contigs as FASTA, one record per contig in the given order.
///
/// The i-th contig (1-based) gets the header `>contig_<i>`; the sequence is
/// written on a single line.
///
/// # Errors
///
/// Returns `OutputError::Io` if the writer fails.
pub fn write_contigs<W: Write>(writer: &mut W, contigs: &[Contig]) -> Result<(), OutputError> {
    for (i, contig) in contigs.iter().enumerate() {
        writeln!(writer, ">{}", Contig::fasta_name(i + 1))?;
        writeln!(writer, "{contig}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the contigs to it
///
/// # Errors
///
/// Returns `OutputError::Write` if the file cannot be created or written.
pub fn write_contigs_to_file(path: &Path, contigs: &[Contig]) -> Result<(), OutputError> {
    let to_error = |source| OutputError::Write {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    write_contigs(&mut writer, contigs).map_err(|e| match e {
        OutputError::Io(source) => to_error(source),
        other => other,
    })?;

    debug!(path = %path.display(), contigs = contigs.len(), "wrote contigs");
    Ok(())
}
