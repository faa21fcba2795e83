//! End-to-end normalization scenarios.

use serde_json::json;

use lore_transform::{NormalizeOptions, normalize_characters};

#[test]
fn wizard_gate_drops_non_wizards() {
    let raw = vec![
        json!({"id": 1, "wizard": true, "yearOfBirth": "1980", "house": "Gryffindor"}),
        json!({"id": 2, "wizard": false, "yearOfBirth": "unknown", "house": "Slytherin"}),
    ];
    let options = NormalizeOptions::new().with_wizard_only(true);
    let records = normalize_characters(&raw, &options);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, Some(1));
    assert_eq!(records[0].year_of_birth, Some(1980.0));
    assert_eq!(records[0].house.as_deref(), Some("Gryffindor"));
}

#[test]
fn gate_disabled_keeps_everything() {
    let raw = vec![
        json!({"id": 1, "wizard": true}),
        json!({"id": 2, "wizard": false}),
        json!({"id": 3}),
    ];
    let records = normalize_characters(&raw, &NormalizeOptions::default());
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].wizard, None);
}

#[test]
fn missing_wizard_flag_counts_as_gated_out() {
    // Tri-state flag: only an explicit `true` passes the gate.
    let raw = vec![json!({"id": 7, "name": "Argus Filch"})];
    let options = NormalizeOptions::new().with_wizard_only(true);
    assert!(normalize_characters(&raw, &options).is_empty());
}

#[test]
fn output_order_matches_input_order() {
    let raw: Vec<_> = (1..=5).map(|id| json!({"id": id})).collect();
    let records = normalize_characters(&raw, &NormalizeOptions::default());
    let ids: Vec<_> = records.iter().map(|record| record.id).collect();
    assert_eq!(ids, vec![Some(1), Some(2), Some(3), Some(4), Some(5)]);
}

#[test]
fn numeric_coercion_is_uniform_across_fields() {
    let raw = vec![json!({
        "id": 4,
        "yearOfBirth": "1,980",
        "wand": {"wood": "holly", "core": "phoenix feather", "length": "11"}
    })];
    let records = normalize_characters(&raw, &NormalizeOptions::default());
    assert_eq!(records[0].year_of_birth, Some(1980.0));
    assert_eq!(records[0].wand.length, Some(11.0));
}
