use std::mem;

use tracing::debug;

use super::traversal::TraversalState;
use crate::core::contig::Contig;
use crate::graph::{DeBruijnGraph, NodeId};

/// Where a traversal frame is in building its contig
#[derive(Debug, Clone, Copy)]
enum Stage {
    /// Memo check, then forward extension from the start k-mer
    Enter,
    /// Trying each unvisited successor of `tail`, keeping the longest result
    ForwardBranch { tail: NodeId, next: usize },
    /// Backward extension from the start k-mer
    Backward,
    /// Trying each unvisited predecessor of `head`, prepending its result
    BackwardBranch { head: NodeId, next: usize },
}

/// One pending `build` call on the work list
#[derive(Debug)]
struct Frame {
    node: NodeId,
    stage: Stage,
    contig: String,
    best: String,
}

impl Frame {
    fn new(node: NodeId) -> Self {
        Self {
            node,
            stage: Stage::Enter,
            contig: String::new(),
            best: String::new(),
        }
    }
}

enum Step {
    /// Suspend the current frame and build the contig starting at this node
    Descend(NodeId),
    /// The current frame is done
    Finish(String),
}

/// Greedy contig assembly by memoized depth-first walks of simple paths.
///
/// From a start k-mer the walk extends forward while there is exactly one
/// unvisited successor, then backward while there is exactly one unvisited
/// predecessor. At a forward branch every unvisited successor is assembled in
/// turn and the longest result *replaces* the contig built so far. At a
/// backward branch each unvisited predecessor's contig is *prepended* to the
/// current contig and the longest combination is kept.
///
/// The walk uses an explicit work list, so stack usage does not grow with
/// the genome.
#[derive(Debug)]
pub struct ContigAssembler<'g> {
    graph: &'g DeBruijnGraph,
}

impl<'g> ContigAssembler<'g> {
    #[must_use]
    pub fn new(graph: &'g DeBruijnGraph) -> Self {
        Self { graph }
    }

    /// Assemble contigs from every not-yet-visited node, in node order.
    #[must_use]
    pub fn assemble(&self) -> Vec<Contig> {
        let mut state = TraversalState::new(self.graph.len());
        let mut contigs = Vec::new();

        for node in self.graph.node_ids() {
            if !state.is_visited(node) {
                contigs.push(Contig::new(self.build(node, &mut state)));
            }
        }

        debug!(
            nodes = self.graph.len(),
            visited = state.visited_count(),
            contigs = contigs.len(),
            "assembled contigs"
        );
        contigs
    }

    /// Build the contig starting at `start`, sharing `state` with any other
    /// builds in the same run.
    pub fn build(&self, start: NodeId, state: &mut TraversalState) -> String {
        let mut stack = vec![Frame::new(start)];
        let mut returned: Option<String> = None;

        while let Some(frame) = stack.last_mut() {
            match self.advance(frame, state, returned.take()) {
                Step::Descend(child) => stack.push(Frame::new(child)),
                Step::Finish(contig) => {
                    stack.pop();
                    returned = Some(contig);
                }
            }
        }

        returned.unwrap_or_default()
    }

    /// Run `frame` until it needs a child contig or has its own result.
    /// `child` is the result of the child most recently descended into.
    fn advance(
        &self,
        frame: &mut Frame,
        state: &mut TraversalState,
        mut child: Option<String>,
    ) -> Step {
        loop {
            match frame.stage {
                Stage::Enter => {
                    if let Some(contig) = state.memoized(frame.node) {
                        return Step::Finish(contig.to_string());
                    }

                    state.visit(frame.node);
                    frame.contig = self.graph.kmer(frame.node).as_str().to_string();
                    let tail = self.extend_forward(frame.node, &mut frame.contig, state);

                    if self.graph.successors(tail).len() > 1 {
                        frame.best = frame.contig.clone();
                        frame.stage = Stage::ForwardBranch { tail, next: 0 };
                    } else {
                        frame.stage = Stage::Backward;
                    }
                }

                Stage::ForwardBranch { tail, next } => {
                    if let Some(result) = child.take() {
                        if result.len() > frame.best.len() {
                            frame.best = result;
                        }
                    }

                    let successors = self.graph.successors(tail);
                    if let Some(i) = next_unvisited(successors, next, state) {
                        frame.stage = Stage::ForwardBranch { tail, next: i + 1 };
                        return Step::Descend(successors[i]);
                    }

                    frame.contig = mem::take(&mut frame.best);
                    frame.stage = Stage::Backward;
                }

                Stage::Backward => {
                    let head = self.extend_backward(frame.node, &mut frame.contig, state);

                    if self.graph.predecessors(head).len() > 1 {
                        frame.best = frame.contig.clone();
                        frame.stage = Stage::BackwardBranch { head, next: 0 };
                    } else {
                        return finish(frame, state);
                    }
                }

                Stage::BackwardBranch { head, next } => {
                    if let Some(mut result) = child.take() {
                        if result.len() + frame.contig.len() > frame.best.len() {
                            result.push_str(&frame.contig);
                            frame.best = result;
                        }
                    }

                    let predecessors = self.graph.predecessors(head);
                    if let Some(i) = next_unvisited(predecessors, next, state) {
                        frame.stage = Stage::BackwardBranch { head, next: i + 1 };
                        return Step::Descend(predecessors[i]);
                    }

                    frame.contig = mem::take(&mut frame.best);
                    return finish(frame, state);
                }
            }
        }
    }

    /// Follow single unvisited successors, appending each one's last base.
    /// Returns the node whose successor list stopped the walk.
    fn extend_forward(
        &self,
        from: NodeId,
        contig: &mut String,
        state: &mut TraversalState,
    ) -> NodeId {
        let mut tail = from;
        while let [next] = self.graph.successors(tail) {
            let next = *next;
            if state.is_visited(next) {
                break;
            }
            contig.extend(self.graph.kmer(next).last_base());
            state.visit(next);
            tail = next;
        }
        tail
    }

    /// Follow single unvisited predecessors, prepending each one's first base.
    /// Returns the node whose predecessor list stopped the walk.
    fn extend_backward(
        &self,
        from: NodeId,
        contig: &mut String,
        state: &mut TraversalState,
    ) -> NodeId {
        let mut head = from;
        let mut prefix: Vec<char> = Vec::new();
        while let [prev] = self.graph.predecessors(head) {
            let prev = *prev;
            if state.is_visited(prev) {
                break;
            }
            prefix.extend(self.graph.kmer(prev).first_base());
            state.visit(prev);
            head = prev;
        }

        if !prefix.is_empty() {
            let mut extended: String = prefix.iter().rev().collect();
            extended.push_str(contig);
            *contig = extended;
        }
        head
    }
}

fn next_unvisited(candidates: &[NodeId], from: usize, state: &TraversalState) -> Option<usize> {
    (from..candidates.len()).find(|&i| !state.is_visited(candidates[i]))
}

fn finish(frame: &mut Frame, state: &mut TraversalState) -> Step {
    state.memoize(frame.node, frame.contig.clone());
    Step::Finish(mem::take(&mut frame.contig))
}

/// Assemble all contigs of `graph` with a fresh traversal state
#[must_use]
pub fn assemble_contigs(graph: &DeBruijnGraph) -> Vec<Contig> {
    ContigAssembler::new(graph).assemble()
}
