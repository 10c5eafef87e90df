//! Aggregation of source nodes into equivalence classes.
//!
//! Succession diagrams start at source motifs. Sources that lead to identical
//! downstream successions are interchangeable up to their own label, so they are
//! grouped into equivalence classes and later replaced by a single node labeled
//! with a minimized Boolean condition.
//!
//! Classes are the connected components of the undirected "equivalent-to" relation
//! over source nodes, computed with a union-find. A source with no equivalent
//! partner forms a singleton class; classes are never empty.

use std::collections::HashMap;

use log::{debug, info};
use petgraph::graph::NodeIndex;
use petgraph::unionfind::UnionFind;

use crate::diagram::SuccessionDiagram;
use crate::equivalence::Equivalence;
use crate::error::ReduceError;


/// One equivalence class of source nodes.
///
/// Members are sorted by node id; the first member acts as the class
/// representative (all members have identical downstream structure, so the
/// choice only fixes iteration order).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EquivalenceClass {
    pub members: Vec<NodeIndex>,
}

impl EquivalenceClass {
    /// Create a class from its members. Classes are never empty.
    pub fn new(members: Vec<NodeIndex>) -> EquivalenceClass {
        assert!(!members.is_empty(), "an equivalence class cannot be empty");
        EquivalenceClass { members }
    }

    pub fn representative(&self) -> NodeIndex {
        self.members[0]
    }
}

/// Group the diagram's source nodes into equivalence classes.
///
/// Every unordered pair of sources is tested with [`Equivalence::is_equivalent`];
/// positive results are joined in a union-find and the resulting components become
/// the classes. Sources are processed in id order, so for a fixed input the class
/// list, member order and representatives are all reproducible.
///
/// Quadratic in the number of sources times one equivalence check, which is fine
/// for the tens-to-low-hundreds of sources this targets.
pub fn aggregate_sources(
    diagram: &SuccessionDiagram,
    equivalence: &mut Equivalence,
) -> Result<Vec<EquivalenceClass>, ReduceError> {
    let sources = diagram.source_nodes();

    let mut relation: UnionFind<usize> = UnionFind::new(sources.len());
    for i in 0..sources.len() {
        for j in (i + 1)..sources.len() {
            if equivalence.is_equivalent(sources[i], sources[j])? {
                relation.union(i, j);
                debug!(
                    "Sources `{}` and `{}` lead to identical successions.",
                    diagram.id(sources[i]),
                    diagram.id(sources[j])
                );
            }
        }
    }

    // Components in order of their first (lexicographically smallest) member.
    let mut classes: Vec<EquivalenceClass> = Vec::new();
    let mut class_of_root: HashMap<usize, usize> = HashMap::new();
    for (i, &source) in sources.iter().enumerate() {
        let root = relation.find(i);
        match class_of_root.get(&root) {
            Some(&class) => classes[class].members.push(source),
            None => {
                class_of_root.insert(root, classes.len());
                classes.push(EquivalenceClass::new(vec![source]));
            }
        }
    }

    info!(
        "Aggregated {} source(s) into {} class(es).",
        sources.len(),
        classes.len()
    );
    Ok(classes)
}
