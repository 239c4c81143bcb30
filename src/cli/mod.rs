//! Command-line interface for greedy-dbg.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **assemble**: Assemble contigs from a FASTA/FASTQ file and write them as FASTA
//! - **count**: Dump the (optionally filtered) k-mer counts of a FASTA/FASTQ file
//!
//! ## Usage
//!
//! ```text
//! # Assemble with the defaults (k = 21, threshold = 2)
//! greedy-dbg assemble reads.fastq
//!
//! # Smaller k, stricter abundance filter, custom output
//! greedy-dbg assemble reads.fa.gz -k 15 -a 3 -o sample_contigs.fasta
//!
//! # JSON summary for scripting
//! greedy-dbg assemble reads.fastq --format json
//!
//! # K-mer counts as TSV
//! greedy-dbg count reads.fastq -k 21 -a 2 -o counts.tsv
//! ```

use clap::{Parser, Subcommand};

pub mod assemble;
pub mod count;

#[derive(Parser)]
#[command(name = "greedy-dbg")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Assemble contigs from short reads with a greedy De Bruijn graph walk")]
#[command(
    long_about = "greedy-dbg counts the k-mers of every read made only of A, C, G and T, drops k-mers seen fewer than a threshold number of times, and walks the implied De Bruijn graph to produce contigs.\n\nBranches are resolved greedily by keeping the longest walk."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Summary output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble contigs from a FASTA or FASTQ file
    Assemble(assemble::AssembleArgs),

    /// Count k-mers in a FASTA or FASTQ file
    Count(count::CountArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Map a `-k` value to a k-mer length. Non-positive values become 0, which
/// indexes nothing and so assembles nothing.
#[must_use]
pub fn kmer_length(arg: i64) -> usize {
    usize::try_from(arg).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_assemble_defaults() {
        let cli = Cli::try_parse_from(["greedy-dbg", "assemble", "reads.fq"]).unwrap();
        let Commands::Assemble(args) = cli.command else {
            panic!("expected assemble");
        };
        assert_eq!(args.kmer_length, 21);
        assert_eq!(args.threshold, 2);
        assert_eq!(args.output_file.to_str(), Some("contigs.fasta"));
    }

    #[test]
    fn test_assemble_short_flags() {
        let cli = Cli::try_parse_from([
            "greedy-dbg",
            "assemble",
            "reads.fa",
            "-k",
            "15",
            "-a",
            "0",
            "-o",
            "out.fa",
        ])
        .unwrap();
        let Commands::Assemble(args) = cli.command else {
            panic!("expected assemble");
        };
        assert_eq!(args.kmer_length, 15);
        assert_eq!(args.threshold, 0);
        assert_eq!(args.output_file.to_str(), Some("out.fa"));
    }

    #[test]
    fn test_underscore_long_flags() {
        let cli = Cli::try_parse_from([
            "greedy-dbg",
            "assemble",
            "reads.fq",
            "--kmer_length",
            "5",
            "--output_file",
            "out.fa",
        ])
        .unwrap();
        let Commands::Assemble(args) = cli.command else {
            panic!("expected assemble");
        };
        assert_eq!(args.kmer_length, 5);
        assert_eq!(args.output_file.to_str(), Some("out.fa"));
    }

    #[test]
    fn test_kebab_long_flags_still_accepted() {
        let cli = Cli::try_parse_from([
            "greedy-dbg",
            "count",
            "reads.fq",
            "--kmer-length",
            "7",
            "--output-file",
            "counts.tsv",
        ])
        .unwrap();
        let Commands::Count(args) = cli.command else {
            panic!("expected count");
        };
        assert_eq!(args.kmer_length, 7);
        assert_eq!(args.output_file.as_deref().and_then(|p| p.to_str()), Some("counts.tsv"));
    }

    #[test]
    fn test_non_positive_kmer_length_accepted() {
        for k in ["0", "-1"] {
            let cli = Cli::try_parse_from(["greedy-dbg", "assemble", "reads.fq", "-k", k]).unwrap();
            let Commands::Assemble(args) = cli.command else {
                panic!("expected assemble");
            };
            assert_eq!(kmer_length(args.kmer_length), 0);
        }
    }

    #[test]
    fn test_kmer_length_mapping() {
        assert_eq!(kmer_length(21), 21);
        assert_eq!(kmer_length(0), 0);
        assert_eq!(kmer_length(-5), 0);
    }
}
