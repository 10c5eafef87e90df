use crate::equivalence::MatchStrategy;

/// What the pipeline does when the diagram has no source nodes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EmptyInputPolicy {
    /// Abort with [`crate::error::ReduceError::EmptyInput`].
    #[default]
    Fail,
    /// Succeed with an empty reduced diagram.
    EmptyResult,
}

/// A "flat" configuration object for the reduction pipeline.
///
/// Input and output locations are deliberately not part of this struct: file
/// handling belongs to the caller (see [`crate::graphml`]), the pipeline itself
/// is a pure in-memory transform.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReduceConfig {
    /// How children are paired during branch-equivalence checks (default:
    /// the established greedy [`MatchStrategy::FirstMatch`]).
    pub match_strategy: MatchStrategy,
    /// Policy for diagrams with zero source nodes (default: fail).
    pub on_empty: EmptyInputPolicy,
}

impl ReduceConfig {
    pub fn new() -> ReduceConfig {
        ReduceConfig::default()
    }
}

impl From<MatchStrategy> for ReduceConfig {
    fn from(match_strategy: MatchStrategy) -> Self {
        ReduceConfig {
            match_strategy,
            ..ReduceConfig::default()
        }
    }
}
