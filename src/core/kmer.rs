use std::borrow::Borrow;

/// Nucleotide alphabet, in the order candidate extensions are tried.
///
/// The order matters: it fixes the order of successor and predecessor lists,
/// which in turn fixes the tie-break order during branch resolution.
pub const NUCLEOTIDES: [u8; 4] = *b"ACGT";

/// A fixed-length substring of a nucleotide sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Kmer(String);

impl Kmer {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First base of the k-mer, prepended when walking backwards
    #[must_use]
    pub fn first_base(&self) -> Option<char> {
        self.0.as_bytes().first().copied().map(char::from)
    }

    /// Last base of the k-mer, appended when walking forwards
    #[must_use]
    pub fn last_base(&self) -> Option<char> {
        self.0.as_bytes().last().copied().map(char::from)
    }

    /// Candidate successors: drop the first base, append each of A, C, G, T.
    #[must_use]
    pub fn successor_candidates(&self) -> [String; 4] {
        let suffix = self.0.get(1..).unwrap_or_default();
        NUCLEOTIDES.map(|base| {
            let mut candidate = String::with_capacity(self.0.len());
            candidate.push_str(suffix);
            candidate.push(char::from(base));
            candidate
        })
    }

    /// Candidate predecessors: drop the last base, prepend each of A, C, G, T.
    #[must_use]
    pub fn predecessor_candidates(&self) -> [String; 4] {
        let prefix = self
            .0
            .get(..self.0.len().saturating_sub(1))
            .unwrap_or_default();
        NUCLEOTIDES.map(|base| {
            let mut candidate = String::with_capacity(self.0.len());
            candidate.push(char::from(base));
            candidate.push_str(prefix);
            candidate
        })
    }
}

impl Borrow<str> for Kmer {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Kmer {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for Kmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
