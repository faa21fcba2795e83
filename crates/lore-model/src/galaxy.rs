//! Flat record types for the galactic domain (people, planets, starships).
//!
//! Cross-references to other resources are stored as integer foreign keys
//! extracted from resource URLs. List-valued relations preserve order and
//! keep `null` placeholders for entries whose URL could not be parsed.

use serde::{Deserialize, Serialize};

use crate::value::{FieldValue, Row, ToRow};

/// A normalized person record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub height: Option<f64>,
    pub mass: Option<f64>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    /// Kept textual: source values like "19BBY" are not numeric.
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub homeworld_id: Option<i64>,
    pub film_ids: Vec<Option<i64>>,
    pub species_ids: Vec<Option<i64>>,
    pub vehicle_ids: Vec<Option<i64>>,
    pub starship_ids: Vec<Option<i64>>,
    pub created: Option<String>,
    pub edited: Option<String>,
    pub url: Option<String>,
}

/// A normalized planet record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub rotation_period: Option<f64>,
    pub orbital_period: Option<f64>,
    pub diameter: Option<f64>,
    pub climate: Option<String>,
    pub gravity: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<f64>,
    pub population: Option<f64>,
    pub resident_ids: Vec<Option<i64>>,
    pub film_ids: Vec<Option<i64>>,
    pub created: Option<String>,
    pub edited: Option<String>,
    pub url: Option<String>,
}

/// A normalized starship record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Starship {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<f64>,
    pub length: Option<f64>,
    pub max_atmosphering_speed: Option<f64>,
    /// Kept textual: source values may be ranges like "1-3".
    pub crew: Option<String>,
    pub passengers: Option<f64>,
    pub cargo_capacity: Option<f64>,
    pub consumables: Option<String>,
    pub hyperdrive_rating: Option<f64>,
    #[serde(rename = "MGLT")]
    pub mglt: Option<f64>,
    pub starship_class: Option<String>,
    pub pilot_ids: Vec<Option<i64>>,
    pub film_ids: Vec<Option<i64>>,
    pub created: Option<String>,
    pub edited: Option<String>,
    pub url: Option<String>,
}

fn insert_id(row: &mut Row, id: Option<i64>) {
    row.insert("id".to_string(), FieldValue::number(id.map(|id| id as f64)));
}

impl ToRow for Person {
    fn to_row(&self) -> Row {
        let mut row = Row::new();
        insert_id(&mut row, self.id);
        row.insert("name".to_string(), FieldValue::text(self.name.as_deref()));
        row.insert("height".to_string(), FieldValue::number(self.height));
        row.insert("mass".to_string(), FieldValue::number(self.mass));
        row.insert(
            "hair_color".to_string(),
            FieldValue::text(self.hair_color.as_deref()),
        );
        row.insert(
            "skin_color".to_string(),
            FieldValue::text(self.skin_color.as_deref()),
        );
        row.insert(
            "eye_color".to_string(),
            FieldValue::text(self.eye_color.as_deref()),
        );
        row.insert(
            "birth_year".to_string(),
            FieldValue::text(self.birth_year.as_deref()),
        );
        row.insert(
            "gender".to_string(),
            FieldValue::text(self.gender.as_deref()),
        );
        row.insert(
            "homeworld_id".to_string(),
            FieldValue::number(self.homeworld_id.map(|id| id as f64)),
        );
        row
    }
}

impl ToRow for Planet {
    fn to_row(&self) -> Row {
        let mut row = Row::new();
        insert_id(&mut row, self.id);
        row.insert("name".to_string(), FieldValue::text(self.name.as_deref()));
        row.insert(
            "rotation_period".to_string(),
            FieldValue::number(self.rotation_period),
        );
        row.insert(
            "orbital_period".to_string(),
            FieldValue::number(self.orbital_period),
        );
        row.insert("diameter".to_string(), FieldValue::number(self.diameter));
        row.insert(
            "climate".to_string(),
            FieldValue::text(self.climate.as_deref()),
        );
        row.insert(
            "gravity".to_string(),
            FieldValue::text(self.gravity.as_deref()),
        );
        row.insert(
            "terrain".to_string(),
            FieldValue::text(self.terrain.as_deref()),
        );
        row.insert(
            "surface_water".to_string(),
            FieldValue::number(self.surface_water),
        );
        row.insert(
            "population".to_string(),
            FieldValue::number(self.population),
        );
        row
    }
}

impl ToRow for Starship {
    fn to_row(&self) -> Row {
        let mut row = Row::new();
        insert_id(&mut row, self.id);
        row.insert("name".to_string(), FieldValue::text(self.name.as_deref()));
        row.insert("model".to_string(), FieldValue::text(self.model.as_deref()));
        row.insert(
            "manufacturer".to_string(),
            FieldValue::text(self.manufacturer.as_deref()),
        );
        row.insert(
            "cost_in_credits".to_string(),
            FieldValue::number(self.cost_in_credits),
        );
        row.insert("length".to_string(), FieldValue::number(self.length));
        row.insert(
            "max_atmosphering_speed".to_string(),
            FieldValue::number(self.max_atmosphering_speed),
        );
        row.insert("crew".to_string(), FieldValue::text(self.crew.as_deref()));
        row.insert(
            "passengers".to_string(),
            FieldValue::number(self.passengers),
        );
        row.insert(
            "cargo_capacity".to_string(),
            FieldValue::number(self.cargo_capacity),
        );
        row.insert(
            "consumables".to_string(),
            FieldValue::text(self.consumables.as_deref()),
        );
        row.insert(
            "hyperdrive_rating".to_string(),
            FieldValue::number(self.hyperdrive_rating),
        );
        row.insert("mglt".to_string(), FieldValue::number(self.mglt));
        row.insert(
            "starship_class".to_string(),
            FieldValue::text(self.starship_class.as_deref()),
        );
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starship_mglt_serializes_uppercase() {
        let starship = Starship {
            mglt: Some(75.0),
            ..Starship::default()
        };
        let json = serde_json::to_value(&starship).expect("serialize starship");
        assert_eq!(json["MGLT"], 75.0);
        assert!(json.get("mglt").is_none());
    }

    #[test]
    fn person_row_keeps_birth_year_textual() {
        let person = Person {
            birth_year: Some("19BBY".to_string()),
            height: Some(172.0),
            ..Person::default()
        };
        let row = person.to_row();
        assert_eq!(row["birth_year"], FieldValue::Text("19BBY".to_string()));
        assert_eq!(row["height"], FieldValue::Number(172.0));
    }

    #[test]
    fn relation_lists_preserve_null_placeholders() {
        let person = Person {
            film_ids: vec![Some(1), None, Some(3)],
            ..Person::default()
        };
        let json = serde_json::to_value(&person).expect("serialize person");
        assert_eq!(json["film_ids"], serde_json::json!([1, null, 3]));
    }
}
