//! K-mer counting and abundance filtering.
//!
//! - [`counts`]: [`KmerIndexer`](counts::KmerIndexer) and the insertion-ordered
//!   [`KmerCounts`](counts::KmerCounts) map
//! - [`filter`]: drops k-mers below an abundance threshold
//!
//! ## Example
//!
//! ```
//! use greedy_dbg::index::{counts::index_kmers, filter::filter_kmers};
//!
//! let counts = index_kmers(["ACGTACGTA"], 3);
//! assert_eq!(counts.get("ACG"), Some(2));
//! assert_eq!(counts.get("TAC"), Some(1));
//!
//! let filtered = filter_kmers(&counts, 2);
//! assert_eq!(filtered.len(), 3);
//! ```

pub mod counts;
pub mod filter;
