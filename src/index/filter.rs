use tracing::debug;

use super::counts::KmerCounts;

/// Keep only k-mers seen at least `threshold` times (inclusive).
///
/// The result preserves the iteration order of `counts`. A threshold of 0
/// returns a copy of the input.
#[must_use]
pub fn filter_kmers(counts: &KmerCounts, threshold: u32) -> KmerCounts {
    let mut filtered = KmerCounts::new(counts.k());
    for (kmer, count) in counts.iter() {
        if count >= threshold {
            filtered.insert(kmer.clone(), count);
        }
    }

    debug!(
        threshold,
        kept = filtered.len(),
        dropped = counts.len() - filtered.len(),
        "filtered low-abundance k-mers"
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::counts::index_kmers;

    #[test]
    fn test_filter_threshold_inclusive() {
        let counts = index_kmers(["ACGTACGTA"], 3);
        let filtered = filter_kmers(&counts, 2);

        let kept: Vec<_> = filtered.kmers().map(|k| k.as_str()).collect();
        assert_eq!(kept, vec!["ACG", "CGT", "GTA"]);
        assert_eq!(filtered.get("ACG"), Some(2));
        assert!(!filtered.contains("TAC"));
    }

    #[test]
    fn test_zero_threshold_is_identity() {
        let counts = index_kmers(["TTTACGGA", "ACGGAT"], 3);
        assert_eq!(filter_kmers(&counts, 0), counts);
    }

    #[test]
    fn test_threshold_above_max_empties() {
        let counts = index_kmers(["ACGTACGTA"], 3);
        let filtered = filter_kmers(&counts, 3);
        assert!(filtered.is_empty());
        assert_eq!(filtered.k(), 3);
    }

    #[test]
    fn test_filter_preserves_source_order() {
        let counts = index_kmers(["GGGAAA", "AAAGGG", "GGGAAA"], 3);
        let filtered = filter_kmers(&counts, 2);
        let source_order: Vec<_> = counts
            .kmers()
            .filter(|k| filtered.contains(k.as_str()))
            .collect();
        let filtered_order: Vec<_> = filtered.kmers().collect();
        assert_eq!(source_order, filtered_order);
    }
}
