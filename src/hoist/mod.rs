//! Detection of unconditional motifs.
//!
//! Some downstream motifs do not depend on which source condition is active: the
//! same motif, with the same entire subtree, occurs one level below every
//! equivalence class. Such motifs can be hoisted out of the per-class branches and
//! placed as top-level, condition-independent nodes of the reduced diagram.
//!
//! Detection is asymmetric on purpose: candidates are only the direct successors
//! of the *reference* class (the first class in aggregation order). A motif absent
//! from the reference class's immediate successors is never hoisted, even when it
//! occurs identically under all other classes. Hoisting also needs at least one
//! other class as a witness: with a single class, nothing is condition-independent
//! to speak of and the class keeps all of its successors.

use log::{debug, info};
use petgraph::graph::NodeIndex;

use crate::aggregate::EquivalenceClass;
use crate::diagram::SuccessionDiagram;
use crate::equivalence::Equivalence;
use crate::error::ReduceError;

#[cfg(test)]
mod tests;

/// Find the unconditional motifs among the reference class's direct successors.
///
/// A candidate `m` qualifies iff every other class's representative has a direct
/// successor with an equal label *and* an equivalent branch; the first class
/// lacking such a match rejects `m`. Results keep the successor order of the
/// reference representative.
pub fn unconditional_motifs(
    diagram: &SuccessionDiagram,
    classes: &[EquivalenceClass],
    equivalence: &mut Equivalence,
) -> Result<Vec<NodeIndex>, ReduceError> {
    // A motif is only "unconditional" when a second class confirms it.
    if classes.len() < 2 {
        return Ok(Vec::new());
    }
    let reference = &classes[0];

    let mut unconditional = Vec::new();
    'candidates: for candidate in diagram.successors(reference.representative()) {
        for class in &classes[1..] {
            let mut matched = false;
            for successor in diagram.successors(class.representative()) {
                if diagram.motif(candidate) == diagram.motif(successor)
                    && equivalence.is_equivalent(candidate, successor)?
                {
                    matched = true;
                    break;
                }
            }
            if !matched {
                debug!(
                    "Motif `{}` is conditional (no match under class of `{}`).",
                    diagram.id(candidate),
                    diagram.id(class.representative())
                );
                continue 'candidates;
            }
        }
        info!(
            "Motif `{}` occurs under every class; hoisting it.",
            diagram.id(candidate)
        );
        unconditional.push(candidate);
    }
    Ok(unconditional)
}
