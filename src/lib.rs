//! # greedy-dbg
//!
//! A library for assembling contigs from short nucleotide reads.
//!
//! Reads are cut into overlapping k-mers, low-abundance k-mers are dropped as
//! likely sequencing noise, and the survivors form the nodes of an implicit
//! De Bruijn graph. Contigs are produced by walking simple paths through that
//! graph, resolving branches greedily in favour of the longest walk.
//!
//! ## Pipeline
//!
//! 1. **Index**: count every k-mer of every read made only of `A`, `C`, `G`, `T`
//! 2. **Filter**: keep k-mers seen at least `threshold` times
//! 3. **Graph**: derive successors and predecessors of each kept k-mer
//! 4. **Assemble**: memoized depth-first walk from each unvisited k-mer
//!
//! Every stage is deterministic: the same reads and parameters always give
//! the same contigs in the same order.
//!
//! ## Example
//!
//! ```rust
//! use greedy_dbg::{run_pipeline, AssemblyConfig};
//!
//! let config = AssemblyConfig { kmer_length: 3, threshold: 2 };
//! let report = run_pipeline(["ACGTACGTA"], &config);
//!
//! assert_eq!(report.kmers_indexed, 4);
//! assert_eq!(report.kmers_kept, 3);
//! assert_eq!(report.contigs, vec!["ACGTA"]);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: K-mer and contig types
//! - [`index`]: K-mer counting and abundance filtering
//! - [`graph`]: De Bruijn graph adjacency
//! - [`assembly`]: Contig assembly and the end-to-end pipeline
//! - [`parsing`]: FASTA/FASTQ readers
//! - [`output`]: Contig FASTA writer
//! - [`cli`]: Command-line interface implementation

pub mod assembly;
pub mod cli;
pub mod core;
pub mod graph;
pub mod index;
pub mod output;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use assembly::assembler::{assemble_contigs, ContigAssembler};
pub use assembly::pipeline::{run_pipeline, AssemblyConfig, AssemblyReport, AssemblySummary};
pub use assembly::traversal::TraversalState;
pub use core::contig::Contig;
pub use core::kmer::Kmer;
pub use graph::{DeBruijnGraph, NodeId};
pub use index::counts::{index_kmers, KmerCounts, KmerIndexer};
pub use index::filter::filter_kmers;
