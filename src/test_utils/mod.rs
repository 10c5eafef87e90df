use petgraph::graph::NodeIndex;

use crate::diagram::SuccessionDiagram;
use crate::motif::Motif;

/// Initialize env_logger for tests. Safe to call multiple times.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Build a diagram from `(id, label)` node pairs and `(from, to)` edge pairs.
///
/// Edges are added in the given order, which fixes the successor order seen by
/// the greedy child matcher.
pub fn diagram(nodes: &[(&str, &str)], edges: &[(&str, &str)]) -> SuccessionDiagram {
    let mut diagram = SuccessionDiagram::new();
    for (id, label) in nodes {
        let motif =
            Motif::parse(label).unwrap_or_else(|e| panic!("invalid label `{label}`: {e}"));
        diagram
            .add_motif(*id, motif)
            .expect("node ids must be unique");
    }
    for (from, to) in edges {
        diagram
            .add_transition(from, to)
            .expect("edge endpoints must exist");
    }
    diagram
}

/// Look up a node by id, panicking when absent.
pub fn index(diagram: &SuccessionDiagram, id: &str) -> NodeIndex {
    diagram
        .node_index(id)
        .unwrap_or_else(|| panic!("no node with id `{id}`"))
}

/// Map node indices back to their ids.
pub fn ids(diagram: &SuccessionDiagram, nodes: &[NodeIndex]) -> Vec<String> {
    nodes.iter().map(|&n| diagram.id(n).to_string()).collect()
}
