//! Centralized validation helpers.

use crate::core::kmer::NUCLEOTIDES;

/// Validate that a sequence is non-empty and made only of `A`, `C`, `G` and `T`.
///
/// Lower-case bases and ambiguity codes such as `N` make the whole sequence invalid.
///
/// # Examples
///
/// ```
/// use greedy_dbg::utils::validation::is_nucleotide_sequence;
///
/// assert!(is_nucleotide_sequence("ACGTACGT"));
/// assert!(!is_nucleotide_sequence("ACGNACGT"));
/// assert!(!is_nucleotide_sequence("acgt"));
/// assert!(!is_nucleotide_sequence(""));
/// ```
#[must_use]
pub fn is_nucleotide_sequence(sequence: &str) -> bool {
    !sequence.is_empty() && sequence.bytes().all(|b| NUCLEOTIDES.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_nucleotide_sequence() {
        assert!(is_nucleotide_sequence("A"));
        assert!(is_nucleotide_sequence("GATTACA"));
        assert!(!is_nucleotide_sequence("GATTACAN"));
        assert!(!is_nucleotide_sequence("GAT TACA"));
        assert!(!is_nucleotide_sequence("GATUACA"));
    }
}
