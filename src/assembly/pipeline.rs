use serde::Serialize;
use tracing::{info, warn};

use super::assembler::ContigAssembler;
use crate::core::contig::Contig;
use crate::graph::DeBruijnGraph;
use crate::index::counts::KmerIndexer;
use crate::index::filter::filter_kmers;

/// Default k-mer length
pub const DEFAULT_KMER_LENGTH: usize = 21;

/// Default minimum abundance for a k-mer to become a graph node
pub const DEFAULT_THRESHOLD: u32 = 2;

/// Parameters for one assembly run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyConfig {
    /// Length of the k-mers indexed from each sequence
    pub kmer_length: usize,
    /// Minimum occurrence count (inclusive) for a k-mer to be kept
    pub threshold: u32,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            kmer_length: DEFAULT_KMER_LENGTH,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Output and stage sizes of one assembly run
#[derive(Debug, Clone)]
pub struct AssemblyReport {
    pub config: AssemblyConfig,
    /// Sequences handed to the indexer
    pub sequences: usize,
    /// Sequences skipped for containing non-ACGT characters
    pub rejected_sequences: usize,
    /// Distinct k-mers indexed
    pub kmers_indexed: usize,
    /// K-mers dropped by the abundance filter
    pub kmers_filtered: usize,
    /// K-mers kept as graph nodes
    pub kmers_kept: usize,
    /// Assembled contigs, in production order
    pub contigs: Vec<Contig>,
}

/// Serializable summary of an [`AssemblyReport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssemblySummary {
    pub kmer_length: usize,
    pub threshold: u32,
    pub sequences: usize,
    pub rejected_sequences: usize,
    pub kmers_indexed: usize,
    pub kmers_filtered: usize,
    pub kmers_kept: usize,
    pub contigs: usize,
    pub total_bases: usize,
    pub longest_contig: usize,
}

impl AssemblyReport {
    #[must_use]
    pub fn summary(&self) -> AssemblySummary {
        AssemblySummary {
            kmer_length: self.config.kmer_length,
            threshold: self.config.threshold,
            sequences: self.sequences,
            rejected_sequences: self.rejected_sequences,
            kmers_indexed: self.kmers_indexed,
            kmers_filtered: self.kmers_filtered,
            kmers_kept: self.kmers_kept,
            contigs: self.contigs.len(),
            total_bases: self.contigs.iter().map(Contig::len).sum(),
            longest_contig: self.contigs.iter().map(Contig::len).max().unwrap_or(0),
        }
    }
}

/// Run indexing, filtering, graph construction and assembly in order.
///
/// Every stage is a one-shot in-memory transformation; degenerate parameters
/// (k = 0, k longer than every sequence, threshold above every count) give
/// an empty contig list rather than an error.
pub fn run_pipeline<I, S>(sequences: I, config: &AssemblyConfig) -> AssemblyReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut indexer = KmerIndexer::new(config.kmer_length);
    let mut total = 0;
    for sequence in sequences {
        indexer.add_sequence(sequence.as_ref());
        total += 1;
    }
    let rejected_sequences = indexer.rejected();
    let counts = indexer.finish();

    let filtered = filter_kmers(&counts, config.threshold);
    let graph = DeBruijnGraph::build(&filtered);
    let contigs = ContigAssembler::new(&graph).assemble();

    if contigs.is_empty() {
        warn!(
            kmer_length = config.kmer_length,
            threshold = config.threshold,
            "no contigs assembled"
        );
    } else {
        info!(contigs = contigs.len(), "assembly complete");
    }

    AssemblyReport {
        config: *config,
        sequences: total,
        rejected_sequences,
        kmers_indexed: counts.len(),
        kmers_filtered: counts.len() - filtered.len(),
        kmers_kept: filtered.len(),
        contigs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_scenario() {
        let config = AssemblyConfig {
            kmer_length: 3,
            threshold: 2,
        };
        let report = run_pipeline(["ACGTACGTA"], &config);

        assert_eq!(report.sequences, 1);
        assert_eq!(report.rejected_sequences, 0);
        assert_eq!(report.kmers_indexed, 4);
        assert_eq!(report.kmers_filtered, 1);
        assert_eq!(report.kmers_kept, 3);
        assert_eq!(report.contigs, vec!["ACGTA"]);
    }

    #[test]
    fn test_pipeline_rejects_invalid_sequences() {
        let config = AssemblyConfig {
            kmer_length: 3,
            threshold: 1,
        };
        let report = run_pipeline(["ACGTNACGT", "GGCC"], &config);

        assert_eq!(report.sequences, 2);
        assert_eq!(report.rejected_sequences, 1);
        assert_eq!(report.kmers_indexed, 2);
        assert_eq!(report.contigs, vec!["GGCC"]);
    }

    #[test]
    fn test_summary() {
        let config = AssemblyConfig {
            kmer_length: 3,
            threshold: 1,
        };
        let summary = run_pipeline(["ACGT", "TTGCA"], &config).summary();

        assert_eq!(summary.contigs, 2);
        assert_eq!(summary.total_bases, 9);
        assert_eq!(summary.longest_contig, 5);
        assert_eq!(summary.kmer_length, 3);
    }

    #[test]
    fn test_default_config() {
        let config = AssemblyConfig::default();
        assert_eq!(config.kmer_length, 21);
        assert_eq!(config.threshold, 2);
    }
}
