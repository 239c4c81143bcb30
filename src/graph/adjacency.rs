use std::collections::HashMap;

use tracing::debug;

use crate::core::kmer::Kmer;
use crate::index::counts::KmerCounts;

/// Dense node identifier: the k-mer's position in filtered-k-mer order
pub type NodeId = usize;

/// Graph neighbours of one k-mer, both in A, C, G, T candidate order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct AdjacencyEntry {
    successors: Vec<NodeId>,
    predecessors: Vec<NodeId>,
}

/// Implicit De Bruijn graph over the filtered k-mers.
///
/// An edge `w -> s` exists iff the last k-1 bases of `w` equal the first k-1
/// bases of `s` and both k-mers survived filtering.
#[derive(Debug, Clone, Default)]
pub struct DeBruijnGraph {
    /// Node k-mers, in filtered-k-mer iteration order
    nodes: Vec<Kmer>,

    /// Index: k-mer -> node id
    node_index: HashMap<Kmer, NodeId>,

    /// Adjacency per node, parallel to `nodes`
    adjacency: Vec<AdjacencyEntry>,
}

impl DeBruijnGraph {
    /// Derive successors and predecessors for every filtered k-mer.
    ///
    /// Only the key set of `filtered` matters; counts are ignored.
    #[must_use]
    pub fn build(filtered: &KmerCounts) -> Self {
        let nodes: Vec<Kmer> = filtered.kmers().cloned().collect();
        let node_index: HashMap<Kmer, NodeId> = nodes
            .iter()
            .enumerate()
            .map(|(id, kmer)| (kmer.clone(), id))
            .collect();

        let lookup = |candidates: [String; 4]| -> Vec<NodeId> {
            candidates
                .iter()
                .filter_map(|candidate| node_index.get(candidate.as_str()).copied())
                .collect()
        };

        let adjacency: Vec<AdjacencyEntry> = nodes
            .iter()
            .map(|kmer| AdjacencyEntry {
                successors: lookup(kmer.successor_candidates()),
                predecessors: lookup(kmer.predecessor_candidates()),
            })
            .collect();

        let edges: usize = adjacency.iter().map(|entry| entry.successors.len()).sum();
        debug!(nodes = nodes.len(), edges, "built De Bruijn graph");

        Self {
            nodes,
            node_index,
            adjacency,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in filtered-k-mer iteration order
    pub fn node_ids(&self) -> std::ops::Range<NodeId> {
        0..self.nodes.len()
    }

    #[must_use]
    pub fn kmer(&self, node: NodeId) -> &Kmer {
        &self.nodes[node]
    }

    #[must_use]
    pub fn node(&self, kmer: &str) -> Option<NodeId> {
        self.node_index.get(kmer).copied()
    }

    #[must_use]
    pub fn successors(&self, node: NodeId) -> &[NodeId] {
        &self.adjacency[node].successors
    }

    #[must_use]
    pub fn predecessors(&self, node: NodeId) -> &[NodeId] {
        &self.adjacency[node].predecessors
    }

    /// Successor k-mers of `kmer`, or `None` if it is not a node
    #[must_use]
    pub fn successors_of(&self, kmer: &str) -> Option<Vec<&str>> {
        self.node(kmer).map(|node| self.resolve(self.successors(node)))
    }

    /// Predecessor k-mers of `kmer`, or `None` if it is not a node
    #[must_use]
    pub fn predecessors_of(&self, kmer: &str) -> Option<Vec<&str>> {
        self.node(kmer).map(|node| self.resolve(self.predecessors(node)))
    }

    fn resolve(&self, ids: &[NodeId]) -> Vec<&str> {
        ids.iter().map(|&id| self.nodes[id].as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::counts::index_kmers;
    use crate::index::filter::filter_kmers;

    fn graph_for(sequences: &[&str], k: usize, threshold: u32) -> DeBruijnGraph {
        let counts = index_kmers(sequences.iter().copied(), k);
        DeBruijnGraph::build(&filter_kmers(&counts, threshold))
    }

    #[test]
    fn test_linear_chain_adjacency() {
        let graph = graph_for(&["ACGTACGTA"], 3, 2);

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.successors_of("ACG"), Some(vec!["CGT"]));
        assert_eq!(graph.predecessors_of("ACG"), Some(vec![]));
        assert_eq!(graph.successors_of("CGT"), Some(vec!["GTA"]));
        assert_eq!(graph.predecessors_of("CGT"), Some(vec!["ACG"]));
        assert_eq!(graph.successors_of("GTA"), Some(vec![]));
        assert_eq!(graph.predecessors_of("GTA"), Some(vec!["CGT"]));
        assert_eq!(graph.successors_of("TAC"), None);
    }

    #[test]
    fn test_branch_lists_follow_alphabet_order() {
        // ACT inserted before ACG, but the successor list of AAC is still [ACG, ACT]
        let graph = graph_for(&["AACT", "AACG"], 3, 1);
        assert_eq!(graph.successors_of("AAC"), Some(vec!["ACG", "ACT"]));

        let graph = graph_for(&["TAGT", "CAGT"], 3, 1);
        assert_eq!(graph.predecessors_of("AGT"), Some(vec!["CAG", "TAG"]));
    }

    #[test]
    fn test_node_order_matches_filtered_order() {
        let counts = index_kmers(["TTGCA", "ACGT"], 3);
        let filtered = filter_kmers(&counts, 1);
        let graph = DeBruijnGraph::build(&filtered);

        let graph_order: Vec<_> = graph.node_ids().map(|id| graph.kmer(id)).collect();
        let filtered_order: Vec<_> = filtered.kmers().collect();
        assert_eq!(graph_order, filtered_order);
    }

    #[test]
    fn test_self_loop() {
        let graph = graph_for(&["AAAA"], 3, 1);
        assert_eq!(graph.successors_of("AAA"), Some(vec!["AAA"]));
        assert_eq!(graph.predecessors_of("AAA"), Some(vec!["AAA"]));
    }

    #[test]
    fn test_empty_graph() {
        let graph = graph_for(&["ACGT"], 3, 5);
        assert!(graph.is_empty());
        assert_eq!(graph.node_ids().count(), 0);
    }
}
