/// An assembled nucleotide string, the final output unit of an assembly run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contig(String);

impl Contig {
    pub fn new(sequence: impl Into<String>) -> Self {
        Self(sequence.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// FASTA header (without `>`) for the contig at a 1-based position
    #[must_use]
    pub fn fasta_name(index: usize) -> String {
        format!("contig_{index}")
    }
}

impl PartialEq<&str> for Contig {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for Contig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
