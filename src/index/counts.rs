use std::collections::HashMap;

use tracing::debug;

use crate::core::kmer::Kmer;
use crate::utils::validation::is_nucleotide_sequence;

/// K-mer occurrence counts, iterated in first-insertion order.
///
/// Insertion order is observable downstream: it decides which k-mer starts
/// each contig, so it is kept rather than sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KmerCounts {
    /// k-mer length shared by every key
    k: usize,

    /// Entries in first-insertion order
    entries: Vec<(Kmer, u32)>,

    /// Index: k-mer -> position in entries vec
    positions: HashMap<Kmer, usize>,
}

impl KmerCounts {
    /// Create an empty map for k-mers of length `k`
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self {
            k,
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add one occurrence of `kmer`, starting at 1 on first sight
    pub fn increment(&mut self, kmer: &str) {
        if let Some(&pos) = self.positions.get(kmer) {
            self.entries[pos].1 += 1;
        } else {
            self.insert(Kmer::from(kmer), 1);
        }
    }

    /// Set the count for `kmer`. A new key goes to the end of the iteration
    /// order; an existing key keeps its position.
    pub fn insert(&mut self, kmer: Kmer, count: u32) {
        if let Some(&pos) = self.positions.get(&kmer) {
            self.entries[pos].1 = count;
            return;
        }
        self.positions.insert(kmer.clone(), self.entries.len());
        self.entries.push((kmer, count));
    }

    #[must_use]
    pub fn get(&self, kmer: &str) -> Option<u32> {
        self.positions.get(kmer).map(|&pos| self.entries[pos].1)
    }

    #[must_use]
    pub fn contains(&self, kmer: &str) -> bool {
        self.positions.contains_key(kmer)
    }

    /// Position of `kmer` in iteration order
    #[must_use]
    pub fn position(&self, kmer: &str) -> Option<usize> {
        self.positions.get(kmer).copied()
    }

    /// Iterate `(kmer, count)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Kmer, u32)> + '_ {
        self.entries.iter().map(|(kmer, count)| (kmer, *count))
    }

    /// Iterate keys in insertion order
    pub fn kmers(&self) -> impl Iterator<Item = &Kmer> + '_ {
        self.entries.iter().map(|(kmer, _)| kmer)
    }

    /// Highest count observed, if any
    #[must_use]
    pub fn max_count(&self) -> Option<u32> {
        self.entries.iter().map(|(_, count)| *count).max()
    }
}

/// Accumulates k-mer counts over a stream of sequences.
///
/// Sequences containing anything other than `A`, `C`, `G`, `T` are rejected
/// whole (no partial indexing). Sequences shorter than `k` contribute nothing.
#[derive(Debug)]
pub struct KmerIndexer {
    counts: KmerCounts,
    accepted: usize,
    rejected: usize,
}

impl KmerIndexer {
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self {
            counts: KmerCounts::new(k),
            accepted: 0,
            rejected: 0,
        }
    }

    /// Index every k-mer of `sequence` with a stride-1 sliding window.
    ///
    /// Returns `false` if the sequence was rejected by the alphabet check.
    pub fn add_sequence(&mut self, sequence: &str) -> bool {
        if !is_nucleotide_sequence(sequence) {
            self.rejected += 1;
            return false;
        }
        self.accepted += 1;

        let k = self.counts.k();
        if k == 0 || sequence.len() < k {
            return true;
        }

        // ASCII only past the alphabet check, so byte offsets are char boundaries
        for start in 0..=sequence.len() - k {
            self.counts.increment(&sequence[start..start + k]);
        }
        true
    }

    /// Number of sequences that passed the alphabet check
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Number of sequences skipped by the alphabet check
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    #[must_use]
    pub fn finish(self) -> KmerCounts {
        debug!(
            k = self.counts.k(),
            accepted = self.accepted,
            rejected = self.rejected,
            distinct = self.counts.len(),
            "k-mer indexing complete"
        );
        self.counts
    }
}

/// Count every k-mer across `sequences`.
///
/// Deterministic for a given input; O(total sequence length).
pub fn index_kmers<I, S>(sequences: I, k: usize) -> KmerCounts
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut indexer = KmerIndexer::new(k);
    for sequence in sequences {
        indexer.add_sequence(sequence.as_ref());
    }
    indexer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_kmers_counts_and_order() {
        let counts = index_kmers(["ACGTACGTA"], 3);
        let entries: Vec<_> = counts.iter().map(|(k, c)| (k.as_str(), c)).collect();
        assert_eq!(
            entries,
            vec![("ACG", 2), ("CGT", 2), ("GTA", 2), ("TAC", 1)]
        );
    }

    #[test]
    fn test_counts_accumulate_across_sequences() {
        let counts = index_kmers(["ACGT", "CGTT"], 3);
        assert_eq!(counts.get("ACG"), Some(1));
        assert_eq!(counts.get("CGT"), Some(2));
        assert_eq!(counts.get("GTT"), Some(1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_invalid_sequence_rejected_whole() {
        let mut indexer = KmerIndexer::new(3);
        assert!(!indexer.add_sequence("ACGTNACGT"));
        assert!(indexer.add_sequence("ACGT"));
        assert_eq!(indexer.rejected(), 1);
        assert_eq!(indexer.accepted(), 1);

        let counts = indexer.finish();
        assert_eq!(counts.len(), 2);
        assert!(!counts.contains("TAC"));
    }

    #[test]
    fn test_lowercase_sequence_rejected() {
        let counts = index_kmers(["acgtacgt"], 3);
        assert!(counts.is_empty());
    }

    #[test]
    fn test_short_sequence_contributes_nothing() {
        let counts = index_kmers(["ACG", "AC"], 4);
        assert!(counts.is_empty());
    }

    #[test]
    fn test_sequence_equal_to_k() {
        let counts = index_kmers(["ACGT"], 4);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("ACGT"), Some(1));
    }

    #[test]
    fn test_zero_k_indexes_nothing() {
        let counts = index_kmers(["ACGT"], 0);
        assert!(counts.is_empty());
    }

    #[test]
    fn test_insert_keeps_existing_position() {
        let mut counts = KmerCounts::new(2);
        counts.insert(Kmer::from("AC"), 1);
        counts.insert(Kmer::from("GT"), 1);
        counts.insert(Kmer::from("AC"), 5);

        assert_eq!(counts.position("AC"), Some(0));
        assert_eq!(counts.get("AC"), Some(5));
        assert_eq!(counts.max_count(), Some(5));
    }
}
