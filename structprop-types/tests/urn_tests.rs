use proptest::prelude::*;
use std::collections::HashSet;
use std::str::FromStr;
use structprop_types::{Urn, UrnParseError};

// ── Parsing ───────────────────────────────────────────────────────

#[test]
fn parse_simple_urn() {
    let urn = Urn::parse("urn:li:corpuser:bob").unwrap();
    assert_eq!(urn.namespace(), "li");
    assert_eq!(urn.entity_type(), "corpuser");
    assert_eq!(urn.id(), "bob");
    assert_eq!(urn.id_parts(), ["bob".to_string()]);
    assert!(!urn.is_tuple());
}

#[test]
fn parse_id_may_contain_colons() {
    let urn = Urn::parse("urn:li:structuredProperty:io.acme.privacy:retention").unwrap();
    assert_eq!(urn.entity_type(), "structuredProperty");
    assert_eq!(urn.id(), "io.acme.privacy:retention");
}

#[test]
fn parse_tuple_urn() {
    let urn = Urn::parse("urn:li:dataset:(urn:li:dataPlatform:hive,db.orders,PROD)").unwrap();
    assert_eq!(urn.entity_type(), "dataset");
    assert!(urn.is_tuple());
    assert_eq!(
        urn.id_parts(),
        [
            "urn:li:dataPlatform:hive".to_string(),
            "db.orders".to_string(),
            "PROD".to_string(),
        ]
    );
}

#[test]
fn parse_nested_tuple_keeps_inner_commas() {
    let urn = Urn::parse("urn:li:dataJob:(urn:li:dataFlow:(airflow,etl,prod),load)").unwrap();
    assert_eq!(
        urn.id_parts(),
        ["urn:li:dataFlow:(airflow,etl,prod)".to_string(), "load".to_string()]
    );
}

#[test]
fn parse_from_str_and_try_from() {
    let a = Urn::from_str("urn:li:tag:pii").unwrap();
    let b = Urn::try_from("urn:li:tag:pii").unwrap();
    assert_eq!(a, b);
}

#[test]
fn from_parts_builds_valid_urn() {
    let urn = Urn::from_parts("li", "corpGroup", "finance").unwrap();
    assert_eq!(urn.to_string(), "urn:li:corpGroup:finance");
}

// ── Rejection ─────────────────────────────────────────────────────

#[test]
fn parse_plain_text_is_missing_prefix() {
    assert_eq!(
        Urn::parse("not a urn"),
        Err(UrnParseError::MissingPrefix("not a urn".to_string()))
    );
}

#[test]
fn parse_empty_string_fails() {
    assert!(matches!(Urn::parse(""), Err(UrnParseError::MissingPrefix(_))));
}

#[test]
fn parse_missing_id_segment() {
    assert!(matches!(
        Urn::parse("urn:li:corpuser"),
        Err(UrnParseError::MissingSegment { segment: "id", .. })
    ));
}

#[test]
fn parse_missing_entity_type_segment() {
    assert!(matches!(
        Urn::parse("urn:li"),
        Err(UrnParseError::MissingSegment { segment: "entity type", .. })
    ));
}

#[test]
fn parse_empty_segments() {
    assert!(matches!(
        Urn::parse("urn::corpuser:bob"),
        Err(UrnParseError::EmptySegment { segment: "namespace", .. })
    ));
    assert!(matches!(
        Urn::parse("urn:li::bob"),
        Err(UrnParseError::EmptySegment { segment: "entity type", .. })
    ));
    assert!(matches!(
        Urn::parse("urn:li:corpuser:"),
        Err(UrnParseError::EmptySegment { segment: "id", .. })
    ));
}

#[test]
fn parse_unbalanced_tuple() {
    assert!(matches!(
        Urn::parse("urn:li:dataset:(a,b"),
        Err(UrnParseError::UnbalancedTuple(_))
    ));
    assert!(matches!(
        Urn::parse("urn:li:dataset:(a)b)"),
        Err(UrnParseError::UnbalancedTuple(_))
    ));
    assert!(matches!(
        Urn::parse("urn:li:dataset:(a,(b)"),
        Err(UrnParseError::UnbalancedTuple(_))
    ));
}

#[test]
fn parse_empty_tuple_part() {
    assert!(matches!(
        Urn::parse("urn:li:dataset:(a,,b)"),
        Err(UrnParseError::EmptyTuplePart(_))
    ));
    assert!(matches!(
        Urn::parse("urn:li:dataset:()"),
        Err(UrnParseError::EmptyTuplePart(_))
    ));
}

#[test]
fn error_messages_name_the_input() {
    let err = Urn::parse("urn:li:corpuser").unwrap_err();
    assert!(err.to_string().contains("urn:li:corpuser"));
    assert!(err.to_string().contains("id"));
}

// ── Traits ────────────────────────────────────────────────────────

#[test]
fn display_round_trips_input() {
    let raw = "urn:li:dataset:(urn:li:dataPlatform:kafka,events,PROD)";
    assert_eq!(Urn::parse(raw).unwrap().to_string(), raw);
}

#[test]
fn hash_and_eq() {
    let a = Urn::parse("urn:li:corpuser:bob").unwrap();
    let b = Urn::parse("urn:li:corpuser:bob").unwrap();
    let mut set = HashSet::new();
    set.insert(a);
    set.insert(b);
    assert_eq!(set.len(), 1);
}

#[test]
fn serializes_as_plain_string() {
    let urn = Urn::parse("urn:li:corpuser:bob").unwrap();
    let json = serde_json::to_string(&urn).unwrap();
    assert_eq!(json, "\"urn:li:corpuser:bob\"");
    let parsed: Urn = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, urn);
}

#[test]
fn deserialize_rejects_malformed_urn() {
    let result: Result<Urn, _> = serde_json::from_str("\"bob\"");
    assert!(result.is_err());
}

// ── Properties ────────────────────────────────────────────────────

fn segment_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9_.-]{0,15}").unwrap()
}

proptest! {
    #[test]
    fn well_formed_segments_always_parse(
        ns in segment_strategy(),
        ty in segment_strategy(),
        id in segment_strategy(),
    ) {
        let urn = Urn::from_parts(&ns, &ty, &id).unwrap();
        prop_assert_eq!(urn.namespace(), ns.as_str());
        prop_assert_eq!(urn.entity_type(), ty.as_str());
        prop_assert_eq!(urn.id(), id.as_str());
        prop_assert_eq!(Urn::parse(&urn.to_string()).unwrap(), urn);
    }

    #[test]
    fn text_without_prefix_never_parses(text in "[a-zA-Z0-9 ]{0,40}") {
        prop_assert!(Urn::parse(&text).is_err());
    }
}
