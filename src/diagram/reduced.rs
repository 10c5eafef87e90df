use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::diagram::MotifNode;
use crate::motif::Motif;
use crate::sop::SopFormula;

/// A node of the reduced diagram.
///
/// Class nodes are identified by their class index; the formula is display-only,
/// so two classes that happen to minimize to the same text never collide.
/// Motif nodes are verbatim copies of original diagram nodes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ReducedNode {
    Class { index: usize, formula: SopFormula },
    Motif { id: String, motif: Motif },
}

impl ReducedNode {
    /// A stable identifier for this node in output documents: `class:<index>`
    /// for class nodes, the original id for retained motif nodes.
    pub fn display_id(&self) -> String {
        match self {
            ReducedNode::Class { index, .. } => format!("class:{index}"),
            ReducedNode::Motif { id, .. } => id.clone(),
        }
    }

    /// The label written to output documents: the minimized formula for class
    /// nodes, the canonical motif serialization for retained nodes.
    pub fn label(&self) -> String {
        match self {
            ReducedNode::Class { formula, .. } => formula.to_string(),
            ReducedNode::Motif { motif, .. } => motif.canonical_key(),
        }
    }
}

/// The output of a reduction: a fresh graph sharing no storage with the input.
///
/// Retained original nodes are keyed by id, so merging overlapping subgraphs
/// never duplicates a node, and parallel edges are collapsed.
#[derive(Clone, Default, Debug)]
pub struct ReducedDiagram {
    graph: DiGraph<ReducedNode, ()>,
    motifs_by_id: HashMap<String, NodeIndex>,
}

impl ReducedDiagram {
    pub fn new() -> ReducedDiagram {
        ReducedDiagram::default()
    }

    /// Add the node representing one equivalence class.
    pub fn add_class(&mut self, index: usize, formula: SopFormula) -> NodeIndex {
        self.graph.add_node(ReducedNode::Class { index, formula })
    }

    /// Copy an original motif node into the reduced diagram, or return the copy
    /// that is already present.
    pub fn ensure_motif(&mut self, node: &MotifNode) -> NodeIndex {
        if let Some(existing) = self.motifs_by_id.get(&node.id) {
            return *existing;
        }
        let index = self.graph.add_node(ReducedNode::Motif {
            id: node.id.clone(),
            motif: node.motif.clone(),
        });
        self.motifs_by_id.insert(node.id.clone(), index);
        index
    }

    /// Add an edge; duplicates are collapsed.
    pub fn connect(&mut self, from: NodeIndex, to: NodeIndex) {
        self.graph.update_edge(from, to, ());
    }

    pub fn node(&self, index: NodeIndex) -> &ReducedNode {
        &self.graph[index]
    }

    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// All class nodes, in class index order.
    pub fn class_nodes(&self) -> Vec<NodeIndex> {
        let mut classes: Vec<NodeIndex> = self
            .graph
            .node_indices()
            .filter(|n| matches!(self.graph[*n], ReducedNode::Class { .. }))
            .collect();
        classes.sort_by_key(|n| match &self.graph[*n] {
            ReducedNode::Class { index, .. } => *index,
            ReducedNode::Motif { .. } => unreachable!(),
        });
        classes
    }

    /// The copy of the original node with the given id, if it was retained.
    pub fn motif_index(&self, id: &str) -> Option<NodeIndex> {
        self.motifs_by_id.get(id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn has_edge(&self, from: NodeIndex, to: NodeIndex) -> bool {
        self.graph.find_edge(from, to).is_some()
    }

    /// Direct successors in edge insertion order.
    pub fn successors(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut successors: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(node, Direction::Outgoing)
            .collect();
        successors.reverse();
        successors
    }

    pub fn out_degree(&self, node: NodeIndex) -> usize {
        self.graph
            .neighbors_directed(node, Direction::Outgoing)
            .count()
    }

    pub fn in_degree(&self, node: NodeIndex) -> usize {
        self.graph
            .neighbors_directed(node, Direction::Incoming)
            .count()
    }

    /// Edges as `(from, to)` pairs in insertion order, for serialization.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
    }
}
