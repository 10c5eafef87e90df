//! Reduction of stable-motif succession diagrams of Boolean networks.
//!
//! A succession diagram is a directed acyclic graph whose nodes are stable motifs
//! (fixed assignments of Boolean values to network variables) and whose edges are
//! transitions between them. This crate shrinks such a diagram into a smaller,
//! semantically equivalent one:
//!
//! - Source motifs that lead to structurally identical downstream successions are
//!   merged into a single node labeled by a minimized Boolean condition over
//!   their own variable assignments.
//! - Downstream motifs that recur identically below *every* merged source group
//!   are hoisted to top-level, condition-independent nodes.
//!
//! # Pipeline
//!
//! The stages live in one module each and are wired together by
//! [`reduce::reduce`]:
//!
//! 1. [`motif`]: canonical motif labels and their minterms.
//! 2. [`equivalence`]: memoized recursive branch equivalence.
//! 3. [`aggregate`]: equivalence classes of source nodes (union-find).
//! 4. [`sop`]: minimized sum-of-products formulas per class.
//! 5. [`hoist`]: unconditional motif detection.
//! 6. [`reduce`]: reassembly of the reduced diagram.
//!
//! Reading and writing the GraphML markup is kept at the boundary in
//! [`graphml`]; the pipeline itself is a pure in-memory transform.
//!
//! # Example
//!
//! ```no_run
//! use biodivine_algo_succession_reduce::graphml;
//! use biodivine_algo_succession_reduce::reduce::{ReduceConfig, reduce};
//! use biodivine_algo_succession_reduce::sop::QuineMcCluskey;
//!
//! let diagram = graphml::load_diagram("diagram.graphml").unwrap();
//! let reduction = reduce(&diagram, &ReduceConfig::default(), &QuineMcCluskey).unwrap();
//! for class in &reduction.classes {
//!     println!("{} <- {{{}}}", class.formula, class.members.join(", "));
//! }
//! graphml::save_reduction("reduced.graphml", &reduction.diagram).unwrap();
//! ```

#[cfg(test)]
mod test_utils;

pub mod aggregate;
pub mod diagram;
pub mod equivalence;
pub mod error;
pub mod graphml;
pub mod hoist;
pub mod motif;
pub mod reduce;
pub mod sop;
