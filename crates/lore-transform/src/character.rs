//! Normalization of raw wizarding-API character records.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use lore_model::{Character, Wand};

use crate::numeric::parse_numeric;
use crate::options::NormalizeOptions;

/// Normalize a batch of raw character records.
///
/// One output record per retained input record, in input order. Records that
/// are not JSON objects are logged and skipped; a single malformed record
/// never aborts the batch. With `wizard_only` enabled, records whose
/// `wizard` flag is not `true` are gated out silently.
pub fn normalize_characters(raw: &[Value], options: &NormalizeOptions) -> Vec<Character> {
    let mut records = Vec::with_capacity(raw.len());
    for value in raw {
        let Some(object) = value.as_object() else {
            warn!(
                name = record_name(value),
                "skipping malformed character record"
            );
            continue;
        };
        if options.wizard_only && object.get("wizard").and_then(Value::as_bool) != Some(true) {
            continue;
        }
        records.push(character_from_raw(object));
    }
    debug!(
        input = raw.len(),
        output = records.len(),
        "characters normalized"
    );
    records
}

fn character_from_raw(object: &Map<String, Value>) -> Character {
    Character {
        id: raw_id(object),
        name: opt_string(object, "name"),
        alternate_names: string_list(object, "alternate_names"),
        house: opt_string(object, "house"),
        year_of_birth: raw_numeric(object, "yearOfBirth"),
        ancestry: opt_string(object, "ancestry"),
        gender: opt_string(object, "gender"),
        species: opt_string(object, "species"),
        wizard: opt_bool(object, "wizard"),
        wand: wand_from_raw(object.get("wand")),
        patronus: opt_string(object, "patronus"),
        hogwarts_student: opt_bool(object, "hogwartsStudent"),
        hogwarts_staff: opt_bool(object, "hogwartsStaff"),
        actor: opt_string(object, "actor"),
        alternate_actors: string_list(object, "alternate_actors"),
        alive: opt_bool(object, "alive"),
        image: opt_string(object, "image"),
        eye_colour: opt_string(object, "eyeColour"),
        hair_colour: opt_string(object, "hairColour"),
        date_of_birth: opt_string(object, "dateOfBirth"),
    }
}

/// Flatten the nested wand sub-record, defaulting every key to null.
fn wand_from_raw(value: Option<&Value>) -> Wand {
    let Some(object) = value.and_then(Value::as_object) else {
        return Wand::default();
    };
    Wand {
        wood: opt_string(object, "wood"),
        core: opt_string(object, "core"),
        length: raw_numeric(object, "length"),
    }
}

/// The identifier is externally assigned; accept a JSON number or a numeric
/// string.
fn raw_id(object: &Map<String, Value>) -> Option<i64> {
    match object.get("id") {
        Some(Value::Number(number)) => number.as_i64(),
        Some(Value::String(text)) => text.parse().ok(),
        _ => None,
    }
}

fn raw_numeric(object: &Map<String, Value>, key: &str) -> Option<f64> {
    object.get(key).and_then(parse_numeric)
}

fn opt_string(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

fn opt_bool(object: &Map<String, Value>, key: &str) -> Option<bool> {
    object.get(key).and_then(Value::as_bool)
}

fn string_list(object: &Map<String, Value>, key: &str) -> Vec<String> {
    object
        .get(key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn record_name(value: &Value) -> &str {
    value
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
}
