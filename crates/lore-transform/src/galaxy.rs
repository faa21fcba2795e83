//! Normalization of raw galactic-API records (people, planets, starships).
//!
//! Identifiers are derived from each record's resource URL; relation lists
//! become lists of optional foreign keys with order preserved.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use lore_model::{Person, Planet, Starship};

use crate::numeric::parse_numeric;
use crate::refs::{id_from_value, id_list};

/// Normalize a batch of raw person records, in input order.
pub fn normalize_people(raw: &[Value]) -> Vec<Person> {
    normalize_batch(raw, "person", person_from_raw)
}

/// Normalize a batch of raw planet records, in input order.
pub fn normalize_planets(raw: &[Value]) -> Vec<Planet> {
    normalize_batch(raw, "planet", planet_from_raw)
}

/// Normalize a batch of raw starship records, in input order.
pub fn normalize_starships(raw: &[Value]) -> Vec<Starship> {
    normalize_batch(raw, "starship", starship_from_raw)
}

/// Shared per-record isolation loop: malformed records are logged and
/// skipped, the batch continues.
fn normalize_batch<T>(
    raw: &[Value],
    kind: &'static str,
    from_raw: fn(&Map<String, Value>) -> T,
) -> Vec<T> {
    let mut records = Vec::with_capacity(raw.len());
    for value in raw {
        let Some(object) = value.as_object() else {
            warn!(kind, name = record_name(value), "skipping malformed record");
            continue;
        };
        records.push(from_raw(object));
    }
    debug!(
        kind,
        input = raw.len(),
        output = records.len(),
        "records normalized"
    );
    records
}

fn person_from_raw(object: &Map<String, Value>) -> Person {
    Person {
        id: url_id(object),
        name: opt_string(object, "name"),
        height: raw_numeric(object, "height"),
        mass: raw_numeric(object, "mass"),
        hair_color: opt_string(object, "hair_color"),
        skin_color: opt_string(object, "skin_color"),
        eye_color: opt_string(object, "eye_color"),
        birth_year: opt_string(object, "birth_year"),
        gender: opt_string(object, "gender"),
        homeworld_id: object.get("homeworld").and_then(id_from_value),
        film_ids: relation_ids(object, "films"),
        species_ids: relation_ids(object, "species"),
        vehicle_ids: relation_ids(object, "vehicles"),
        starship_ids: relation_ids(object, "starships"),
        created: opt_string(object, "created"),
        edited: opt_string(object, "edited"),
        url: opt_string(object, "url"),
    }
}

fn planet_from_raw(object: &Map<String, Value>) -> Planet {
    Planet {
        id: url_id(object),
        name: opt_string(object, "name"),
        rotation_period: raw_numeric(object, "rotation_period"),
        orbital_period: raw_numeric(object, "orbital_period"),
        diameter: raw_numeric(object, "diameter"),
        climate: opt_string(object, "climate"),
        gravity: opt_string(object, "gravity"),
        terrain: opt_string(object, "terrain"),
        surface_water: raw_numeric(object, "surface_water"),
        population: raw_numeric(object, "population"),
        resident_ids: relation_ids(object, "residents"),
        film_ids: relation_ids(object, "films"),
        created: opt_string(object, "created"),
        edited: opt_string(object, "edited"),
        url: opt_string(object, "url"),
    }
}

fn starship_from_raw(object: &Map<String, Value>) -> Starship {
    Starship {
        id: url_id(object),
        name: opt_string(object, "name"),
        model: opt_string(object, "model"),
        manufacturer: opt_string(object, "manufacturer"),
        cost_in_credits: raw_numeric(object, "cost_in_credits"),
        length: raw_numeric(object, "length"),
        max_atmosphering_speed: raw_numeric(object, "max_atmosphering_speed"),
        // May be a range like "1-3"; kept textual.
        crew: opt_string(object, "crew"),
        passengers: raw_numeric(object, "passengers"),
        cargo_capacity: raw_numeric(object, "cargo_capacity"),
        consumables: opt_string(object, "consumables"),
        hyperdrive_rating: raw_numeric(object, "hyperdrive_rating"),
        mglt: raw_numeric(object, "MGLT"),
        starship_class: opt_string(object, "starship_class"),
        pilot_ids: relation_ids(object, "pilots"),
        film_ids: relation_ids(object, "films"),
        created: opt_string(object, "created"),
        edited: opt_string(object, "edited"),
        url: opt_string(object, "url"),
    }
}

fn url_id(object: &Map<String, Value>) -> Option<i64> {
    object.get("url").and_then(id_from_value)
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

fn relation_ids(object: &Map<String, Value>, key: &str) -> Vec<Option<i64>> {
    object
        .get(key)
        .and_then(Value::as_array)
        .map(|values| id_list(values))
        .unwrap_or_default()
}

fn record_name(value: &Value) -> &str {
    value
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn person_ids_come_from_urls() {
        let raw = vec![json!({
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77",
            "homeworld": "https://swapi.dev/api/planets/1/",
            "films": ["https://swapi.dev/api/films/1/", "https://swapi.dev/api/films/2/"],
            "url": "https://swapi.dev/api/people/1/"
        })];
        let people = normalize_people(&raw);
        let person = &people[0];
        assert_eq!(person.id, Some(1));
        assert_eq!(person.homeworld_id, Some(1));
        assert_eq!(person.film_ids, vec![Some(1), Some(2)]);
        assert_eq!(person.height, Some(172.0));
    }

    #[test]
    fn planet_unknown_population_is_null() {
        let raw = vec![json!({
            "name": "Hoth",
            "population": "unknown",
            "diameter": "7200",
            "url": "https://swapi.dev/api/planets/4/"
        })];
        let planets = normalize_planets(&raw);
        assert_eq!(planets[0].population, None);
        assert_eq!(planets[0].diameter, Some(7200.0));
    }

    #[test]
    fn starship_crew_range_stays_textual() {
        let raw = vec![json!({
            "name": "Millennium Falcon",
            "crew": "4",
            "passengers": "6",
            "cost_in_credits": "100,000",
            "MGLT": "75",
            "url": "https://swapi.dev/api/starships/10/"
        })];
        let starships = normalize_starships(&raw);
        let ship = &starships[0];
        assert_eq!(ship.crew.as_deref(), Some("4"));
        assert_eq!(ship.passengers, Some(6.0));
        assert_eq!(ship.cost_in_credits, Some(100_000.0));
        assert_eq!(ship.mglt, Some(75.0));
    }
}
