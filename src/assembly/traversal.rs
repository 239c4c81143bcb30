use std::collections::HashMap;

use crate::graph::NodeId;

/// Mutable state shared by every step of one assembly run.
///
/// Owned by a single run and handed to the traversal by `&mut`; a fresh state
/// is created per run. Parallelizing over connected components would need one
/// state per component.
#[derive(Debug, Clone)]
pub struct TraversalState {
    /// Node consumed by some contig
    visited: Vec<bool>,

    /// Contig assembled from each traversal start node
    memo: HashMap<NodeId, String>,
}

impl TraversalState {
    /// Fresh state for a graph with `node_count` nodes
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            visited: vec![false; node_count],
            memo: HashMap::new(),
        }
    }

    #[must_use]
    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited[node]
    }

    pub fn visit(&mut self, node: NodeId) {
        self.visited[node] = true;
    }

    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }

    #[must_use]
    pub fn memoized(&self, node: NodeId) -> Option<&str> {
        self.memo.get(&node).map(String::as_str)
    }

    pub fn memoize(&mut self, node: NodeId, contig: String) {
        self.memo.insert(node, contig);
    }
}
