mod common;

use sarif_tree::model::*;
use sarif_tree::{SarifNode, Structural};
use serde_json::json;

#[test]
fn deep_clone_is_structurally_equal() {
    let log = common::sample_log();
    let copy = log.deep_clone();

    assert!(copy.structural_eq(&log));
    assert_eq!(copy.structural_hash(), log.structural_hash());
}

#[test]
fn mutating_a_cloned_child_leaves_the_source_alone() {
    let original = PhysicalLocation {
        region: Some(Region::lines(10, 12)),
        ..Default::default()
    };
    let mut copy = original.deep_clone();
    if let Some(region) = copy.region.as_mut() {
        region.start_line = Some(99);
    }

    assert_eq!(original.region.as_ref().and_then(|r| r.start_line), Some(10));
    assert!(!copy.structural_eq(&original));
}

#[test]
fn cloned_sequences_and_maps_are_independent() {
    let original = common::result();
    let mut copy = original.deep_clone();

    copy.locations.as_mut().unwrap().push(common::location("file:///x.rs", 1));
    copy.partial_fingerprints
        .as_mut()
        .unwrap()
        .insert("extra".to_string(), "1".to_string());
    copy.properties
        .as_mut()
        .unwrap()
        .insert("confidence".to_string(), json!("low"));

    assert_eq!(original.locations.as_ref().map(Vec::len), Some(1));
    assert_eq!(original.partial_fingerprints.as_ref().map(|m| m.len()), Some(1));
    assert_eq!(
        original
            .properties
            .as_ref()
            .and_then(|p| p.get("confidence")),
        Some(&json!("high"))
    );
}

#[test]
fn clone_preserves_null_and_empty_fields() {
    let original = Stack {
        message: None,
        frames: Some(Vec::new()),
        properties: None,
    };
    let copy = original.deep_clone();

    assert!(copy.message.is_none());
    assert_eq!(copy.frames.as_ref().map(Vec::len), Some(0));
    assert!(copy.properties.is_none());
}
