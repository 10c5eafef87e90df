//! The reduction pipeline: aggregate, minimize, hoist, reassemble.
//!
//! This module wires the individual stages into the complete transform from a
//! [`SuccessionDiagram`] to a [`Reduction`]:
//!
//! 1. Verify the diagram is acyclic.
//! 2. Group source nodes into equivalence classes ([`crate::aggregate`]).
//! 3. Minimize each class's member labels into a formula ([`crate::sop`]).
//! 4. Detect unconditional motifs ([`crate::hoist`]).
//! 5. Reassemble the reduced diagram: one node per class, hoisted subtrees as
//!    standalone components, retained subtrees merged in without duplication.
//!
//! The pipeline is a pure function of the input diagram and configuration: it
//! borrows the diagram immutably and materializes the result into fresh
//! structures. Any error aborts the whole run; there are no partial results.

use log::info;
use petgraph::graph::NodeIndex;

use crate::aggregate::{EquivalenceClass, aggregate_sources};
use crate::diagram::{ReducedDiagram, SuccessionDiagram};
use crate::equivalence::Equivalence;
use crate::error::ReduceError;
use crate::hoist::unconditional_motifs;
use crate::sop::{CoverMinimizer, SopFormula, minimize_class};

mod reduce_config;

#[cfg(test)]
mod tests;

pub use reduce_config::{EmptyInputPolicy, ReduceConfig};

/// One aggregated class as reported to the caller: its minimized formula and
/// the ids of its source members.
///
/// Every class is reported, including classes that were dropped from the
/// reduced diagram because all their successors were hoisted.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassSummary {
    pub formula: SopFormula,
    pub members: Vec<String>,
}

/// The complete result of one reduction run.
#[derive(Clone, Debug, Default)]
pub struct Reduction {
    /// The reduced diagram.
    pub diagram: ReducedDiagram,
    /// All equivalence classes in aggregation order.
    pub classes: Vec<ClassSummary>,
    /// Ids of the hoisted unconditional motifs.
    pub hoisted: Vec<String>,
}

/// Run the whole reduction pipeline.
///
/// The minimizer is injected behind [`CoverMinimizer`]; use
/// [`crate::sop::QuineMcCluskey`] unless a different solver is required.
pub fn reduce<M: CoverMinimizer + ?Sized>(
    diagram: &SuccessionDiagram,
    config: &ReduceConfig,
    minimizer: &M,
) -> Result<Reduction, ReduceError> {
    diagram.ensure_acyclic()?;

    if diagram.source_nodes().is_empty() {
        return match config.on_empty {
            EmptyInputPolicy::Fail => Err(ReduceError::EmptyInput),
            EmptyInputPolicy::EmptyResult => {
                info!("Diagram has no source nodes; producing an empty result.");
                Ok(Reduction::default())
            }
        };
    }

    let mut equivalence = Equivalence::new(diagram, config.match_strategy);
    let classes = aggregate_sources(diagram, &mut equivalence)?;

    let mut formulas = Vec::with_capacity(classes.len());
    for class in &classes {
        formulas.push(minimize_class(diagram, class, minimizer)?);
    }

    let hoisted = unconditional_motifs(diagram, &classes, &mut equivalence)?;

    let reduced = assemble(diagram, &classes, &formulas, &hoisted);
    info!(
        "Reduced {} nodes / {} edges to {} nodes / {} edges.",
        diagram.node_count(),
        diagram.edge_count(),
        reduced.node_count(),
        reduced.edge_count()
    );

    let summaries = classes
        .iter()
        .zip(formulas)
        .map(|(class, formula)| ClassSummary {
            formula,
            members: class
                .members
                .iter()
                .map(|&m| diagram.id(m).to_string())
                .collect(),
        })
        .collect();
    let hoisted = hoisted
        .into_iter()
        .map(|m| diagram.id(m).to_string())
        .collect();

    Ok(Reduction {
        diagram: reduced,
        classes: summaries,
        hoisted,
    })
}

/// Build the reduced diagram from the analysis results.
fn assemble(
    diagram: &SuccessionDiagram,
    classes: &[EquivalenceClass],
    formulas: &[SopFormula],
    hoisted: &[NodeIndex],
) -> ReducedDiagram {
    let mut reduced = ReducedDiagram::new();

    // Hoisted subtrees become standalone components with no incoming edges
    // from class nodes.
    for &motif in hoisted {
        copy_subtree(diagram, motif, &mut reduced);
    }

    for (index, (class, formula)) in classes.iter().zip(formulas).enumerate() {
        let representative = class.representative();
        // Successors whose label matches a hoisted motif are already covered
        // by the standalone components.
        let retained: Vec<NodeIndex> = diagram
            .successors(representative)
            .into_iter()
            .filter(|s| {
                !hoisted
                    .iter()
                    .any(|&u| diagram.motif(u) == diagram.motif(*s))
            })
            .collect();

        if retained.is_empty() {
            info!(
                "Class `{}` only leads to unconditional motifs; dropping its node.",
                formula
            );
            continue;
        }

        let class_node = reduced.add_class(index, formula.clone());
        for successor in retained {
            let copy = copy_subtree(diagram, successor, &mut reduced);
            reduced.connect(class_node, copy);
        }
    }

    reduced
}

/// Copy `root` and its full descendant subgraph into the reduced diagram,
/// returning the copy of `root`. Nodes already present (reachable from an
/// earlier subtree) are reused, never duplicated.
fn copy_subtree(
    diagram: &SuccessionDiagram,
    root: NodeIndex,
    reduced: &mut ReducedDiagram,
) -> NodeIndex {
    let mut nodes = vec![root];
    nodes.extend(diagram.descendants(root));

    for &node in &nodes {
        let from = reduced.ensure_motif(diagram.node(node));
        for target in diagram.successors(node) {
            let to = reduced.ensure_motif(diagram.node(target));
            reduced.connect(from, to);
        }
    }

    // Already present, so this lookup cannot allocate a new node.
    reduced.ensure_motif(diagram.node(root))
}
