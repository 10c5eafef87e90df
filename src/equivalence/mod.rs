//! Recursive structural equivalence between diagram branches.
//!
//! Two nodes are *branch-equivalent* when their entire downstream structures match:
//! equally many children, pairable one-to-one by equal motif labels, and every pair
//! again branch-equivalent. Sinks are trivially equivalent.
//!
//! Results are memoized per node pair, so shared substructure (common in diagrams
//! with diamond-shaped sharing) is compared once instead of once per path.
//!
//! # Matching strategies
//!
//! How children are paired is configurable via [`MatchStrategy`]:
//!
//! - [`MatchStrategy::FirstMatch`] (default) pairs greedily without backtracking.
//!   When siblings share equal labels but diverge further down, the greedy pairing
//!   can reject branches that a complete matcher would accept. This is the
//!   established behaviour of the reduction and therefore the default.
//! - [`MatchStrategy::Backtracking`] searches for a perfect matching over the
//!   label-equality candidate pairs, accepting iff one exists whose pairs are all
//!   recursively equivalent.

use std::collections::HashMap;

use log::trace;
use petgraph::graph::NodeIndex;

use crate::diagram::SuccessionDiagram;
use crate::error::ReduceError;


/// How children of two compared nodes are paired up.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchStrategy {
    /// For each child of the first node (in diagram order), take the first
    /// not-yet-taken child of the second node with an equal label. Greedy,
    /// non-backtracking; the pairing depends on child iteration order.
    #[default]
    FirstMatch,
    /// Exact bipartite matching: equivalent iff a perfect pairing of label-equal,
    /// recursively equivalent children exists.
    Backtracking,
}

/// A branch-equivalence checker over one diagram.
///
/// Holds the memo table, so reuse the same instance for all queries of one
/// pipeline run. The diagram is borrowed immutably; the checker never mutates it.
pub struct Equivalence<'a> {
    diagram: &'a SuccessionDiagram,
    strategy: MatchStrategy,
    memo: HashMap<(NodeIndex, NodeIndex), bool>,
}

impl<'a> Equivalence<'a> {
    pub fn new(diagram: &'a SuccessionDiagram, strategy: MatchStrategy) -> Equivalence<'a> {
        Equivalence {
            diagram,
            strategy,
            memo: HashMap::new(),
        }
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Test whether the branches below `a` and `b` are structurally equivalent.
    ///
    /// Recursion is bounded by the diagram's node count; exceeding the bound means
    /// the diagram is cyclic, reported as [`ReduceError::CyclicDiagram`] instead of
    /// overflowing the stack.
    pub fn is_equivalent(&mut self, a: NodeIndex, b: NodeIndex) -> Result<bool, ReduceError> {
        self.check(a, b, 0)
    }

    fn check(&mut self, a: NodeIndex, b: NodeIndex, depth: usize) -> Result<bool, ReduceError> {
        if a == b {
            return Ok(true);
        }
        if depth > self.diagram.node_count() {
            return Err(ReduceError::CyclicDiagram {
                node: self.diagram.id(a).to_string(),
            });
        }
        if let Some(&known) = self.memo.get(&(a, b)) {
            return Ok(known);
        }

        let result = match self.strategy {
            MatchStrategy::FirstMatch => self.check_first_match(a, b, depth)?,
            MatchStrategy::Backtracking => self.check_backtracking(a, b, depth)?,
        };

        trace!(
            "Branches of `{}` and `{}` {}.",
            self.diagram.id(a),
            self.diagram.id(b),
            if result { "are equivalent" } else { "differ" }
        );
        self.memo.insert((a, b), result);
        Ok(result)
    }

    fn check_first_match(
        &mut self,
        a: NodeIndex,
        b: NodeIndex,
        depth: usize,
    ) -> Result<bool, ReduceError> {
        let children_a = self.diagram.successors(a);
        let children_b = self.diagram.successors(b);

        // Sinks have no branches to compare.
        if children_a.is_empty() && children_b.is_empty() {
            return Ok(true);
        }
        if children_a.len() != children_b.len() {
            return Ok(false);
        }

        // First pair every child by label, then recurse into the pairs.
        let mut taken = vec![false; children_b.len()];
        let mut pairs = Vec::with_capacity(children_a.len());
        'outer: for &left in &children_a {
            for (j, &right) in children_b.iter().enumerate() {
                if !taken[j] && self.diagram.motif(left) == self.diagram.motif(right) {
                    taken[j] = true;
                    pairs.push((left, right));
                    continue 'outer;
                }
            }
            return Ok(false);
        }

        for (left, right) in pairs {
            if !self.check(left, right, depth + 1)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn check_backtracking(
        &mut self,
        a: NodeIndex,
        b: NodeIndex,
        depth: usize,
    ) -> Result<bool, ReduceError> {
        let children_a = self.diagram.successors(a);
        let children_b = self.diagram.successors(b);

        if children_a.is_empty() && children_b.is_empty() {
            return Ok(true);
        }
        if children_a.len() != children_b.len() {
            return Ok(false);
        }

        let mut taken = vec![false; children_b.len()];
        self.assign(&children_a, &children_b, &mut taken, 0, depth)
    }

    /// Try to assign `left[position..]` to distinct, label-equal, recursively
    /// equivalent children on the right, backtracking on dead ends.
    fn assign(
        &mut self,
        left: &[NodeIndex],
        right: &[NodeIndex],
        taken: &mut Vec<bool>,
        position: usize,
        depth: usize,
    ) -> Result<bool, ReduceError> {
        if position == left.len() {
            return Ok(true);
        }
        for j in 0..right.len() {
            if taken[j] {
                continue;
            }
            if self.diagram.motif(left[position]) != self.diagram.motif(right[j]) {
                continue;
            }
            if !self.check(left[position], right[j], depth + 1)? {
                continue;
            }
            taken[j] = true;
            if self.assign(left, right, taken, position + 1, depth)? {
                return Ok(true);
            }
            taken[j] = false;
        }
        Ok(false)
    }
}
