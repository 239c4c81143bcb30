use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::assembly::pipeline::DEFAULT_KMER_LENGTH;
use crate::cli::{kmer_length, OutputFormat};
use crate::index::counts::{index_kmers, KmerCounts};
use crate::index::filter::filter_kmers;
use crate::parsing::read_sequences;

#[derive(Args)]
pub struct CountArgs {
    /// Input file (FASTA: .fa/.fasta/.fna, otherwise FASTQ; optionally .gz)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Length of the k-mers to index (0 or less indexes nothing)
    #[arg(
        short = 'k',
        long = "kmer_length",
        visible_alias = "kmer-length",
        default_value_t = DEFAULT_KMER_LENGTH as i64,
        allow_negative_numbers = true
    )]
    pub kmer_length: i64,

    /// Only report k-mers seen at least this many times
    #[arg(short = 'a', long, default_value_t = 0)]
    pub threshold: u32,

    /// Write counts to this file instead of stdout
    #[arg(short = 'o', long = "output_file", visible_alias = "output-file")]
    pub output_file: Option<PathBuf>,
}

#[derive(Serialize)]
struct KmerCountRecord<'a> {
    kmer: &'a str,
    count: u32,
}

/// Execute count subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CountArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let sequences = read_sequences(&args.input)?;
    let counts = index_kmers(&sequences, kmer_length(args.kmer_length));
    let filtered = filter_kmers(&counts, args.threshold);

    if verbose {
        eprintln!(
            "Indexed {} distinct k-mers from {} sequences, {} at or above threshold {}",
            counts.len(),
            sequences.len(),
            filtered.len(),
            args.threshold
        );
    }

    match &args.output_file {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_counts(&mut writer, &filtered, format)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_counts(&mut writer, &filtered, format)?;
        }
    }

    Ok(())
}

/// Write counts in insertion order, as `kmer<TAB>count` lines or a JSON array
fn write_counts<W: Write>(
    writer: &mut W,
    counts: &KmerCounts,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let records: Vec<KmerCountRecord<'_>> = counts
                .iter()
                .map(|(kmer, count)| KmerCountRecord {
                    kmer: kmer.as_str(),
                    count,
                })
                .collect();
            serde_json::to_writer_pretty(&mut *writer, &records)?;
            writeln!(writer)?;
        }
        OutputFormat::Text | OutputFormat::Tsv => {
            for (kmer, count) in counts.iter() {
                writeln!(writer, "{kmer}\t{count}")?;
            }
        }
    }
    Ok(())
}
