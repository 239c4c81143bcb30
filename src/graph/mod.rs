//! Implicit De Bruijn graph derived from the filtered k-mer set.
//!
//! Nodes are k-mers; an edge `w -> s` exists when `s[..k-1] == w[1..]`.
//! Neighbour lists are built by trying the four one-base extensions in the
//! fixed order `A`, `C`, `G`, `T` and keeping those present in the filtered
//! set, so every list is ordered by that extension base.

pub mod adjacency;

pub use adjacency::{DeBruijnGraph, NodeId};
