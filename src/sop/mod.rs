//! Minimized sum-of-products formulas for aggregated source motifs.
//!
//! Each equivalence class of source nodes is labeled by a Boolean formula that
//! covers exactly the value assignments of its member motifs. The minimization
//! itself sits behind the narrow [`CoverMinimizer`] interface: the pipeline only
//! ever hands over a variable order and a set of minterms and receives formula
//! text back, so the solver can be swapped without touching the core.
//!
//! The bundled solver is [`QuineMcCluskey`], an exact-cover minimizer (no
//! don't-care terms) that is fully deterministic for a fixed input.

use std::fmt;

use log::debug;

use crate::aggregate::EquivalenceClass;
use crate::diagram::SuccessionDiagram;
use crate::error::ReduceError;

mod cover;


pub use cover::QuineMcCluskey;

/// A minimized sum-of-products formula, e.g. `(a & !b) | c`. The constants `1`
/// (tautology) and `0` (empty cover) are rendered as bare digits.
///
/// The text is a display label only; reduced class nodes are identified by
/// their class index, never by formula text.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SopFormula(String);

impl SopFormula {
    /// The formula covering the whole space.
    pub fn constant_true() -> SopFormula {
        SopFormula("1".to_string())
    }

    /// The formula covering nothing.
    pub fn constant_false() -> SopFormula {
        SopFormula("0".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SopFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SopFormula {
    fn from(value: String) -> Self {
        SopFormula(value)
    }
}

impl From<&str> for SopFormula {
    fn from(value: &str) -> Self {
        SopFormula(value.to_string())
    }
}

/// The delegation interface for Boolean minimization.
///
/// `minterms` are value vectors listed in the order given by `order`. The result
/// must cover exactly the given minterms; no don't-care terms are involved.
pub trait CoverMinimizer {
    fn minimize(&self, order: &[String], minterms: &[Vec<bool>]) -> SopFormula;
}

/// Compute the minimized formula labeling one equivalence class.
///
/// The variable order is taken from the class representative; every member must
/// fix exactly the same variable set, otherwise minterm construction would be
/// ill-defined and the whole reduction aborts with
/// [`ReduceError::InconsistentVariables`].
pub fn minimize_class<M: CoverMinimizer + ?Sized>(
    diagram: &SuccessionDiagram,
    class: &EquivalenceClass,
    minimizer: &M,
) -> Result<SopFormula, ReduceError> {
    let order = diagram.motif(class.representative()).variables();

    let mut minterms = Vec::with_capacity(class.members.len());
    for &member in &class.members {
        let minterm = diagram.motif(member).minterm(&order).map_err(|mismatch| {
            ReduceError::InconsistentVariables {
                node: diagram.id(member).to_string(),
                expected: mismatch.expected,
                found: mismatch.found,
            }
        })?;
        minterms.push(minterm);
    }

    let formula = minimizer.minimize(&order, &minterms);
    debug!(
        "Class of {} source(s) minimized to `{}`.",
        class.members.len(),
        formula
    );
    Ok(formula)
}
