//! Core data types for k-mer based assembly.
//!
//! - [`Kmer`](kmer::Kmer): a fixed-length substring of a read
//! - [`Contig`](contig::Contig): an assembled nucleotide string
//!
//! Only the four bases `A`, `C`, `G` and `T` are part of the alphabet.
//! Candidate extensions are always generated in that order.

pub mod contig;
pub mod kmer;
