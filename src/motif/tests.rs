use crate::motif::{Motif, MotifParseError};

#[test]
fn test_equality_is_order_independent() {
    // The same assignment written in every key order must parse to equal motifs.
    let permutations = [
        "{ph:0, Farnesol:1, Serum:0}",
        "{Farnesol:1, Serum:0, ph:0}",
        "{Serum:0, ph:0, Farnesol:1}",
    ];

    let reference = Motif::parse(permutations[0]).unwrap();
    for text in &permutations {
        let motif = Motif::parse(text).unwrap();
        assert_eq!(motif, reference, "`{}` should equal `{}`", text, permutations[0]);
        assert_eq!(motif.canonical_key(), reference.canonical_key());
    }
}

#[test]
fn test_canonical_key_sorts_variables() {
    let motif = Motif::parse("{z:1, a:0, m:1}").unwrap();
    assert_eq!(motif.canonical_key(), "{a:0, m:1, z:1}");
    assert_eq!(motif.to_string(), motif.canonical_key());
}

#[test]
fn test_parse_tolerates_whitespace() {
    let motif = Motif::parse("  { a : 1 ,b: 0 }  ").unwrap();
    assert_eq!(motif.value("a"), Some(true));
    assert_eq!(motif.value("b"), Some(false));
    assert_eq!(motif.len(), 2);
}

#[test]
fn test_parse_empty_motif() {
    let motif = Motif::parse("{}").unwrap();
    assert!(motif.is_empty());
    assert_eq!(motif.canonical_key(), "{}");
}

#[test]
fn test_parse_duplicate_variable_last_wins() {
    let motif = Motif::parse("{a:0, a:1}").unwrap();
    assert_eq!(motif.value("a"), Some(true));
    assert_eq!(motif.len(), 1);
}

#[test]
fn test_parse_rejects_missing_braces() {
    assert_eq!(Motif::parse("a:0, b:1"), Err(MotifParseError::MissingBraces));
    assert_eq!(Motif::parse("{a:0"), Err(MotifParseError::MissingBraces));
}

#[test]
fn test_parse_rejects_malformed_entry() {
    assert_eq!(
        Motif::parse("{a:0, b}"),
        Err(MotifParseError::MalformedEntry("b".to_string()))
    );
    assert_eq!(
        Motif::parse("{:0}"),
        Err(MotifParseError::MalformedEntry(":0".to_string()))
    );
}

#[test]
fn test_parse_rejects_non_boolean_value() {
    assert_eq!(
        Motif::parse("{a:true}"),
        Err(MotifParseError::InvalidValue {
            variable: "a".to_string(),
            value: "true".to_string(),
        })
    );
}

#[test]
fn test_minterm_follows_variable_order() {
    let motif = Motif::parse("{y:1, x:0}").unwrap();
    let order = vec!["x".to_string(), "y".to_string()];
    assert_eq!(motif.minterm(&order).unwrap(), vec![false, true]);
}

#[test]
fn test_minterm_rejects_inconsistent_variables() {
    let motif = Motif::parse("{x:0, z:1}").unwrap();
    let order = vec!["x".to_string(), "y".to_string()];

    let mismatch = motif.minterm(&order).unwrap_err();
    assert_eq!(mismatch.expected, order);
    assert_eq!(mismatch.found, vec!["x".to_string(), "z".to_string()]);
}

#[test]
fn test_from_iterator_matches_parse() {
    let built: Motif = [("b", false), ("a", true)].into_iter().collect();
    let parsed = Motif::parse("{a:1, b:0}").unwrap();
    assert_eq!(built, parsed);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip() {
    let motif = Motif::parse("{a:1, b:0}").unwrap();
    let json = serde_json::to_string(&motif).unwrap();
    let back: Motif = serde_json::from_str(&json).unwrap();
    assert_eq!(motif, back);
}
