//! Error taxonomy of the reduction pipeline.
//!
//! Every fallible operation in this crate reports a [`ReduceError`]. A failure anywhere
//! in the pipeline aborts the whole reduction; there are no partial results, so callers
//! (in particular the bundled binary) must not write an output file after an error.

use thiserror::Error;

/// Errors raised while loading or reducing a succession diagram.
///
/// Variants carry enough context (node id, label text) to diagnose the offending
/// part of the input without re-running the pipeline.
#[derive(Error, Debug)]
pub enum ReduceError {
    /// A motif label string could not be parsed.
    #[error("malformed motif label `{label}` on node `{node}`: {reason}")]
    LabelFormat {
        node: String,
        label: String,
        reason: String,
    },

    /// A node in the input document has no `label` attribute. Such nodes are
    /// never silently skipped.
    #[error("node `{node}` has no label attribute")]
    MissingLabel { node: String },

    /// Members of one equivalence class (or a minterm request) disagree on the
    /// variable set, making minterm construction ill-defined.
    #[error("node `{node}` uses variables [{}] but the class uses [{}]", found.join(", "), expected.join(", "))]
    InconsistentVariables {
        node: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// The input diagram is not acyclic. Detected by a topological sort before
    /// the reduction starts, or by the recursion depth guard as a fallback.
    #[error("succession diagram contains a cycle through node `{node}`")]
    CyclicDiagram { node: String },

    /// The diagram has zero source nodes and the configuration asks for this
    /// to be treated as an error.
    #[error("succession diagram has no source nodes")]
    EmptyInput,

    /// Two nodes in the input document share the same id.
    #[error("duplicate node id `{node}`")]
    DuplicateNode { node: String },

    /// An edge in the input document references a node that was never declared.
    #[error("edge endpoint `{node}` is not a declared node")]
    UnknownNode { node: String },

    /// The input document is structurally broken in a way that is not tied to
    /// a single label (e.g. an edge without endpoints).
    #[error("malformed GraphML document: {reason}")]
    MalformedDocument { reason: String },

    /// The input document is not well-formed XML.
    #[error("failed to parse GraphML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// File access failed while loading or saving a diagram.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
