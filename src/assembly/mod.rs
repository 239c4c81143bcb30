//! Contig assembly over the De Bruijn graph.
//!
//! - [`assembler`]: greedy memoized walk of simple paths with branch resolution
//! - [`traversal`]: visited set and memo scoped to a single run
//! - [`pipeline`]: runs indexing, filtering, graph construction and assembly
//!
//! ## Example
//!
//! ```
//! use greedy_dbg::assembly::pipeline::{run_pipeline, AssemblyConfig};
//!
//! let config = AssemblyConfig { kmer_length: 3, threshold: 2 };
//! let report = run_pipeline(["ACGTACGTA"], &config);
//! assert_eq!(report.contigs, vec!["ACGTA"]);
//! ```

pub mod assembler;
pub mod pipeline;
pub mod traversal;
