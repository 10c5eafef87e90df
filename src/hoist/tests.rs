use crate::aggregate::aggregate_sources;
use crate::equivalence::{Equivalence, MatchStrategy};
use crate::hoist::unconditional_motifs;
use crate::test_utils::{diagram, ids, index, init_logger};

#[test]
fn test_motif_under_every_class_is_hoisted() {
    init_logger();
    // Two classes ({a}, {b}); both representatives lead to an identical sink `m*`.
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

    let mut equivalence = Equivalence::new(&d, MatchStrategy::FirstMatch);
    let classes = aggregate_sources(&d, &mut equivalence).unwrap();
    assert_eq!(classes.len(), 2, "Different out-degrees keep a and b apart");

    let hoisted = unconditional_motifs(&d, &classes, &mut equivalence).unwrap();
    assert_eq!(ids(&d, &hoisted), vec!["m1"]);
}

#[test]
fn test_missing_match_under_one_class_rejects() {
    init_logger();
    let d = diagram(
        &[
            ("a", "{x:0}"),
            ("b", "{x:1}"),
            ("m1", "{stable:1}"),
            ("n", "{other:1}"),
        ],
        &[("a", "m1"), ("b", "n")],
    );

    let mut equivalence = Equivalence::new(&d, MatchStrategy::FirstMatch);
    let classes = aggregate_sources(&d, &mut equivalence).unwrap();
    assert_eq!(classes.len(), 2);

    let hoisted = unconditional_motifs(&d, &classes, &mut equivalence).unwrap();
    assert!(hoisted.is_empty(), "`m1` has no counterpart under `b`");
}

#[test]
fn test_label_match_alone_is_not_enough() {
    init_logger();
    // `m2` matches `m1` by label but its subtree differs, so nothing is hoisted.
    let d = diagram(
        &[
            ("a", "{x:0}"),
            ("b", "{x:1}"),
            ("m1", "{stable:1}"),
            ("m2", "{stable:1}"),
            ("t", "{deep:1}"),
        ],
        &[("a", "m1"), ("b", "m2"), ("m2", "t")],
    );

    let mut equivalence = Equivalence::new(&d, MatchStrategy::FirstMatch);
    let classes = aggregate_sources(&d, &mut equivalence).unwrap();
    assert_eq!(classes.len(), 2);

    let hoisted = unconditional_motifs(&d, &classes, &mut equivalence).unwrap();
    assert!(hoisted.is_empty());
}

#[test]
fn test_detection_is_reference_class_asymmetric() {
    init_logger();
    // `shared` sits under classes of `b` and `c` but not under the reference
    // class (of `a`), so it must not be hoisted.
    let d = diagram(
        &[
            ("a", "{x:0}"),
            ("b", "{x:1}"),
            ("c", "{y:1}"),
            ("only_a", "{p:1}"),
            ("s1", "{shared:1}"),
            ("s2", "{shared:1}"),
            ("u1", "{q:1}"),
            ("u2", "{q:1}"),
            ("u3", "{r:1}"),
        ],
        &[
            ("a", "only_a"),
            ("b", "s1"),
            ("b", "u1"),
            ("c", "s2"),
            ("c", "u2"),
            ("c", "u3"),
        ],
    );

    let mut equivalence = Equivalence::new(&d, MatchStrategy::FirstMatch);
    let classes = aggregate_sources(&d, &mut equivalence).unwrap();
    assert_eq!(classes.len(), 3);
    assert_eq!(classes[0].representative(), index(&d, "a"));

    let hoisted = unconditional_motifs(&d, &classes, &mut equivalence).unwrap();
    assert!(
        hoisted.is_empty(),
        "Only reference-class successors are candidates"
    );
}

#[test]
fn test_single_class_hoists_nothing() {
    init_logger();
    // Without a second class there is no witness that a successor is
    // condition-independent.
    let d = diagram(
        &[("a", "{x:0}"), ("m", "{p:1}"), ("n", "{q:1}")],
        &[("a", "m"), ("a", "n")],
    );

    let mut equivalence = Equivalence::new(&d, MatchStrategy::FirstMatch);
    let classes = aggregate_sources(&d, &mut equivalence).unwrap();
    assert_eq!(classes.len(), 1);

    let hoisted = unconditional_motifs(&d, &classes, &mut equivalence).unwrap();
    assert!(hoisted.is_empty());
}

#[test]
fn test_no_classes_means_no_motifs() {
    init_logger();
    let d = diagram(&[], &[]);
    let mut equivalence = Equivalence::new(&d, MatchStrategy::FirstMatch);
    let hoisted = unconditional_motifs(&d, &[], &mut equivalence).unwrap();
    assert!(hoisted.is_empty());
}
