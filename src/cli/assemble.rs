use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::assembly::pipeline::{
    run_pipeline, AssemblyConfig, AssemblySummary, DEFAULT_KMER_LENGTH, DEFAULT_THRESHOLD,
};
use crate::cli::{kmer_length, OutputFormat};
use crate::output::fasta::write_contigs_to_file;
use crate::parsing::read_sequences;

#[derive(Args)]
pub struct AssembleArgs {
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

    /// Minimum number of occurrences for a k-mer to be kept
    #[arg(short = 'a', long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u32,

    /// Output FASTA file for the assembled contigs
    #[arg(
        short = 'o',
        long = "output_file",
        visible_alias = "output-file",
        default_value = "contigs.fasta"
    )]
    pub output_file: PathBuf,
}

/// Summary printed after a run
#[derive(Debug, serde::Serialize)]
struct RunSummary<'a> {
    input: String,
    output_file: String,
    #[serde(flatten)]
    assembly: &'a AssemblySummary,
    wall_time_secs: f64,
}

/// Execute assemble subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or the contigs cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AssembleArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let started = Instant::now();

    let sequences = read_sequences(&args.input)?;
    if verbose {
        eprintln!(
            "Read {} sequences from {}",
            sequences.len(),
            args.input.display()
        );
    }

    let config = AssemblyConfig {
        kmer_length: kmer_length(args.kmer_length),
        threshold: args.threshold,
    };
    let report = run_pipeline(&sequences, &config);
    write_contigs_to_file(&args.output_file, &report.contigs)?;
    info!(
        output = %args.output_file.display(),
        contigs = report.contigs.len(),
        "contigs written"
    );

    let summary = report.summary();
    let run_summary = RunSummary {
        input: args.input.display().to_string(),
        output_file: args.output_file.display().to_string(),
        assembly: &summary,
        wall_time_secs: started.elapsed().as_secs_f64(),
    };

    match format {
        OutputFormat::Text => print_text_summary(&run_summary, verbose),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&run_summary)?),
        OutputFormat::Tsv => print_tsv_summary(&run_summary),
    }

    Ok(())
}

fn print_text_summary(summary: &RunSummary<'_>, verbose: bool) {
    let assembly = summary.assembly;
    println!("Sequences read: {}", assembly.sequences);
    if verbose || assembly.rejected_sequences > 0 {
        println!(
            "Sequences skipped (non-ACGT): {}",
            assembly.rejected_sequences
        );
    }
    println!("K-mers indexed: {}", assembly.kmers_indexed);
    println!("K-mers filtered: {}", assembly.kmers_filtered);
    println!("K-mers kept: {}", assembly.kmers_kept);
    println!("Contigs assembled: {}", assembly.contigs);
    if verbose {
        println!("Total bases: {}", assembly.total_bases);
        println!("Longest contig: {}", assembly.longest_contig);
    }
    println!("Contigs written to '{}'", summary.output_file);
    println!(
        "{} contigs in {:.2} seconds (wall time)",
        assembly.contigs, summary.wall_time_secs
    );
}

fn print_tsv_summary(summary: &RunSummary<'_>) {
    let assembly = summary.assembly;
    println!("metric\tvalue");
    println!("kmer_length\t{}", assembly.kmer_length);
    println!("threshold\t{}", assembly.threshold);
    println!("sequences\t{}", assembly.sequences);
    println!("rejected_sequences\t{}", assembly.rejected_sequences);
    println!("kmers_indexed\t{}", assembly.kmers_indexed);
    println!("kmers_filtered\t{}", assembly.kmers_filtered);
    println!("kmers_kept\t{}", assembly.kmers_kept);
    println!("contigs\t{}", assembly.contigs);
    println!("total_bases\t{}", assembly.total_bases);
    println!("longest_contig\t{}", assembly.longest_contig);
    println!("wall_time_secs\t{:.3}", summary.wall_time_secs);
}
