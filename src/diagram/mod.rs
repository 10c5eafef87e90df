//! In-memory representation of succession diagrams.
//!
//! A succession diagram is a finite directed acyclic graph whose nodes are stable
//! motifs (see [`crate::motif`]) and whose edges are motif-to-motif transitions.
//! The graph may be disconnected. Acyclicity is a precondition of the reduction
//! pipeline and is verified by [`SuccessionDiagram::ensure_acyclic`] rather than
//! enforced on every mutation.
//!
//! The reduction output uses a separate structure, [`ReducedDiagram`], whose nodes
//! are either verbatim copies of original motif nodes or freshly created class nodes
//! labeled by a minimized Boolean formula.

use std::collections::{HashMap, HashSet};

use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::ReduceError;
use crate::motif::Motif;

mod reduced;


pub use reduced::{ReducedDiagram, ReducedNode};

/// One node of a succession diagram: the id it carries in the input document
/// plus its parsed motif label.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MotifNode {
    pub id: String,
    pub motif: Motif,
}

/// A succession diagram held fully in memory.
///
/// Nodes are addressed by [`NodeIndex`] internally and by their original string id
/// at the I/O boundary. Insertion order is preserved: [`SuccessionDiagram::successors`]
/// lists children in the order their edges were added, which makes the whole
/// pipeline deterministic for a fixed input.
#[derive(Clone, Default, Debug)]
pub struct SuccessionDiagram {
    graph: DiGraph<MotifNode, ()>,
    by_id: HashMap<String, NodeIndex>,
}

impl SuccessionDiagram {
    pub fn new() -> SuccessionDiagram {
        SuccessionDiagram::default()
    }

    /// Add a motif node with the given document id.
    pub fn add_motif(
        &mut self,
        id: impl Into<String>,
        motif: Motif,
    ) -> Result<NodeIndex, ReduceError> {
        let id = id.into();
        if self.by_id.contains_key(&id) {
            return Err(ReduceError::DuplicateNode { node: id });
        }
        let index = self.graph.add_node(MotifNode {
            id: id.clone(),
            motif,
        });
        self.by_id.insert(id, index);
        Ok(index)
    }

    /// Add a transition between two nodes identified by their document ids.
    pub fn add_transition(&mut self, from: &str, to: &str) -> Result<(), ReduceError> {
        let from = self.require(from)?;
        let to = self.require(to)?;
        self.connect(from, to);
        Ok(())
    }

    /// Add a transition between two nodes. Parallel edges are collapsed.
    pub fn connect(&mut self, from: NodeIndex, to: NodeIndex) {
        self.graph.update_edge(from, to, ());
    }

    fn require(&self, id: &str) -> Result<NodeIndex, ReduceError> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| ReduceError::UnknownNode {
                node: id.to_string(),
            })
    }

    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.by_id.get(id).copied()
    }

    pub fn node(&self, index: NodeIndex) -> &MotifNode {
        &self.graph[index]
    }

    pub fn id(&self, index: NodeIndex) -> &str {
        &self.graph[index].id
    }

    pub fn motif(&self, index: NodeIndex) -> &Motif {
        &self.graph[index].motif
    }

    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn has_transition(&self, from: NodeIndex, to: NodeIndex) -> bool {
        self.graph.find_edge(from, to).is_some()
    }

    /// Direct successors of `node` in edge insertion order.
    pub fn successors(&self, node: NodeIndex) -> Vec<NodeIndex> {
        // The petgraph walker yields the most recently added edge first.
        let mut successors: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(node, Direction::Outgoing)
            .collect();
        successors.reverse();
        successors
    }

    pub fn in_degree(&self, node: NodeIndex) -> usize {
        self.graph
            .neighbors_directed(node, Direction::Incoming)
            .count()
    }

    /// All source nodes (in-degree zero), sorted by id so that downstream
    /// aggregation is reproducible regardless of document order.
    pub fn source_nodes(&self) -> Vec<NodeIndex> {
        let mut sources: Vec<NodeIndex> = self
            .graph
            .node_indices()
            .filter(|n| self.in_degree(*n) == 0)
            .collect();
        sources.sort_by(|a, b| self.id(*a).cmp(self.id(*b)));
        sources
    }

    /// All nodes reachable from `node` by at least one edge, in a deterministic
    /// discovery order. `node` itself is not included.
    pub fn descendants(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut order = Vec::new();
        let mut stack = self.successors(node);
        stack.reverse();
        visited.insert(node);
        while let Some(next) = stack.pop() {
            if !visited.insert(next) {
                continue;
            }
            order.push(next);
            let mut children = self.successors(next);
            children.reverse();
            stack.extend(children);
        }
        order
    }

    /// Verify that the diagram is acyclic. Reduction must not start (and output
    /// must not be written) when this fails.
    pub fn ensure_acyclic(&self) -> Result<(), ReduceError> {
        match toposort(&self.graph, None) {
            Ok(_) => Ok(()),
            Err(cycle) => Err(ReduceError::CyclicDiagram {
                node: self.id(cycle.node_id()).to_string(),
            }),
        }
    }
}
