use crate::diagram::ReducedNode;
use crate::error::ReduceError;
use crate::reduce::{EmptyInputPolicy, ReduceConfig, Reduction, reduce};
use crate::sop::QuineMcCluskey;
use crate::test_utils::{diagram, init_logger};

fn run(d: &crate::diagram::SuccessionDiagram) -> Reduction {
    reduce(d, &ReduceConfig::default(), &QuineMcCluskey).unwrap()
}

#[test]
fn test_merged_sources_become_one_class_node() {
    init_logger();
    // Two sources that differ only in `x` share the child motif `m`.
    let d = diagram(
        &[("a", "{x:0, y:1}"), ("b", "{x:1, y:1}"), ("m", "{z:1}")],
        &[("a", "m"), ("b", "m")],
    );

    let result = run(&d);
    assert_eq!(result.classes.len(), 1);
    assert_eq!(result.classes[0].formula.as_str(), "y");
    assert_eq!(result.classes[0].members, vec!["a", "b"]);
    assert!(result.hoisted.is_empty());

    let reduced = &result.diagram;
    assert_eq!(reduced.node_count(), 2, "One class node plus `m`");
    assert_eq!(reduced.edge_count(), 1);

    let class = reduced.class_nodes()[0];
    let m = reduced.motif_index("m").unwrap();
    assert!(reduced.has_edge(class, m));
    assert_eq!(reduced.node(class).label(), "y");
    assert_eq!(reduced.node(m).label(), "{z:1}");
}

#[test]
fn test_distinct_sources_keep_separate_classes() {
    init_logger();
    // Three sources with pairwise distinct subtrees.
    let d = diagram(
        &[
            ("a", "{x:0, y:0}"),
            ("b", "{x:0, y:1}"),
            ("c", "{x:1, y:0}"),
            ("m1", "{p:1}"),
            ("m2", "{q:1}"),
            ("m3", "{p:1}"),
            ("t", "{r:1}"),
        ],
        &[("a", "m1"), ("b", "m2"), ("c", "m3"), ("m3", "t")],
    );

    let result = run(&d);
    assert_eq!(result.classes.len(), 3, "No merges for distinct subtrees");
    assert!(result.hoisted.is_empty());

    let reduced = &result.diagram;
    assert_eq!(reduced.class_nodes().len(), 3);
    // 3 class nodes + m1, m2, m3, t.
    assert_eq!(reduced.node_count(), 7);
    // One edge per class plus m3 -> t.
    assert_eq!(reduced.edge_count(), 4);

    let m3 = reduced.motif_index("m3").unwrap();
    let t = reduced.motif_index("t").unwrap();
    assert!(reduced.has_edge(m3, t), "Retained subgraph edges are kept");
}

#[test]
fn test_unconditional_motif_is_hoisted_standalone() {
    init_logger();
    // `{stable:1}` occurs under both classes; class of `a` has nothing else
    // and must disappear, class of `b` keeps its edge to `n`.
    let d = diagram(
        &[
            ("a", "{x:0}"),
            ("b", "{x:1}"),
            ("m1", "{stable:1}"),
            ("m2", "{stable:1}"),
            ("n", "{other:1}"),
        ],
        &[("a", "m1"), ("b", "m2"), ("b", "n")],
    );

    let result = run(&d);
    assert_eq!(result.hoisted, vec!["m1"]);
    assert_eq!(result.classes.len(), 2, "Dropped classes are still reported");

    let reduced = &result.diagram;
    // `m1` standalone, one class node for `b`, `n`.
    assert_eq!(reduced.node_count(), 3);
    assert_eq!(reduced.edge_count(), 1);

    let m1 = reduced.motif_index("m1").unwrap();
    assert_eq!(reduced.in_degree(m1), 0, "Hoisted motifs take no class edges");
    assert_eq!(reduced.out_degree(m1), 0);

    let classes = reduced.class_nodes();
    assert_eq!(classes.len(), 1, "The all-unconditional class is removed");
    let n = reduced.motif_index("n").unwrap();
    assert!(reduced.has_edge(classes[0], n));
    assert!(
        reduced.motif_index("m2").is_none(),
        "The twin of the hoisted motif is not retained separately"
    );
}

#[test]
fn test_cyclic_diagram_is_rejected() {
    init_logger();
    let d = diagram(
        &[("a", "{x:0}"), ("b", "{y:1}"), ("c", "{z:1}")],
        &[("a", "b"), ("b", "c"), ("c", "b")],
    );

    let result = reduce(&d, &ReduceConfig::default(), &QuineMcCluskey);
    assert!(matches!(result, Err(ReduceError::CyclicDiagram { .. })));
}

#[test]
fn test_empty_input_policies() {
    init_logger();
    // A diagram with nodes but no sources does not exist in a DAG, so the
    // empty-input case is the empty diagram.
    let d = diagram(&[], &[]);

    let failing = reduce(&d, &ReduceConfig::default(), &QuineMcCluskey);
    assert!(matches!(failing, Err(ReduceError::EmptyInput)));

    let permissive = ReduceConfig {
        on_empty: EmptyInputPolicy::EmptyResult,
        ..ReduceConfig::default()
    };
    let result = reduce(&d, &permissive, &QuineMcCluskey).unwrap();
    assert_eq!(result.diagram.node_count(), 0);
    assert!(result.classes.is_empty());
    assert!(result.hoisted.is_empty());
}

#[test]
fn test_no_class_node_without_outgoing_edges() {
    init_logger();
    let d = diagram(
        &[
            ("a", "{x:0}"),
            ("b", "{x:1}"),
            ("m1", "{stable:1}"),
            ("m2", "{stable:1}"),
            ("n", "{other:1}"),
        ],
        &[("a", "m1"), ("b", "m2"), ("b", "n")],
    );

    let result = run(&d);
    for class in result.diagram.class_nodes() {
        assert!(
            result.diagram.out_degree(class) > 0,
            "Class nodes must always have successors"
        );
    }
}

#[test]
fn test_shared_descendants_are_never_duplicated() {
    init_logger();
    // Both classes retain branches that converge on the shared node `t`.
    let d = diagram(
        &[
            ("a", "{x:0}"),
            ("b", "{x:1}"),
            ("p", "{p:1}"),
            ("q", "{q:1}"),
            ("t", "{end:1}"),
        ],
        &[("a", "p"), ("b", "q"), ("p", "t"), ("q", "t")],
    );

    let result = run(&d);
    let reduced = &result.diagram;

    // 2 class nodes + p + q + one copy of t.
    assert_eq!(reduced.node_count(), 5);
    let t = reduced.motif_index("t").unwrap();
    assert_eq!(reduced.in_degree(t), 2, "Both subgraphs link the same copy");
}

#[test]
fn test_original_ids_and_labels_are_preserved() {
    init_logger();
    let d = diagram(
        &[("a", "{x:1}"), ("m", "{Farnesol:1, ph:0}")],
        &[("a", "m")],
    );

    let result = run(&d);
    let reduced = &result.diagram;
    let m = reduced.motif_index("m").unwrap();
    match reduced.node(m) {
        ReducedNode::Motif { id, motif } => {
            assert_eq!(id, "m");
            assert_eq!(motif.canonical_key(), "{Farnesol:1, ph:0}");
        }
        ReducedNode::Class { .. } => panic!("`m` must stay a motif node"),
    }
}

#[test]
fn test_matching_strategy_changes_aggregation() {
    init_logger();
    // Both sources have two `{m:1}` children, but the child that continues
    // further down is the first under `a` and the second under `b`. The greedy
    // matcher keeps the sources apart; the exact matcher merges them.
    let d = diagram(
        &[
            ("a", "{x:0}"),
            ("b", "{x:1}"),
            ("p", "{m:1}"),
            ("q", "{m:1}"),
            ("p2", "{m:1}"),
            ("q2", "{m:1}"),
            ("t1", "{c:1}"),
            ("t2", "{c:1}"),
        ],
        &[
            ("a", "p"),
            ("a", "q"),
            ("b", "p2"),
            ("b", "q2"),
            ("p", "t1"),
            ("q2", "t2"),
        ],
    );

    let greedy = run(&d);
    assert_eq!(greedy.classes.len(), 2);

    let config = ReduceConfig::from(crate::equivalence::MatchStrategy::Backtracking);
    let exact = reduce(&d, &config, &QuineMcCluskey).unwrap();
    assert_eq!(exact.classes.len(), 1);
    assert_eq!(
        exact.classes[0].formula.as_str(),
        "1",
        "x=0 and x=1 together cover the whole space"
    );
}

#[test]
fn test_reduction_is_deterministic() {
    init_logger();
    let d = diagram(
        &[
            ("a", "{x:0, y:1}"),
            ("b", "{x:1, y:1}"),
            ("c", "{x:0, y:0}"),
            ("m", "{z:1}"),
            ("n", "{w:0}"),
        ],
        &[("a", "m"), ("b", "m"), ("c", "n"), ("n", "m")],
    );

    let first = run(&d);
    let second = run(&d);

    assert_eq!(first.diagram.node_count(), second.diagram.node_count());
    assert_eq!(first.diagram.edge_count(), second.diagram.edge_count());
    let labels = |r: &Reduction| {
        r.classes
            .iter()
            .map(|c| c.formula.as_str().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(labels(&first), labels(&second));
}
