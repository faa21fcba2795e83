//! Flat record types for the wizarding-world character domain.

use serde::{Deserialize, Serialize};

use crate::value::{FieldValue, Row, ToRow};

/// Wand sub-record, kept nested in staged and persisted documents.
///
/// Every key is always present; missing data serializes as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wand {
    pub wood: Option<String>,
    pub core: Option<String>,
    pub length: Option<f64>,
}

/// A normalized character record.
///
/// The field set is fixed: a serialized character always carries every
/// attribute, with `null` standing in for missing data. Numeric attributes
/// are either finite numbers or `null`, never raw strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub alternate_names: Vec<String>,
    pub house: Option<String>,
    pub year_of_birth: Option<f64>,
    pub ancestry: Option<String>,
    pub gender: Option<String>,
    pub species: Option<String>,
    pub wizard: Option<bool>,
    pub wand: Wand,
    pub patronus: Option<String>,
    pub hogwarts_student: Option<bool>,
    pub hogwarts_staff: Option<bool>,
    pub actor: Option<String>,
    pub alternate_actors: Vec<String>,
    pub alive: Option<bool>,
    pub image: Option<String>,
    pub eye_colour: Option<String>,
    pub hair_colour: Option<String>,
    pub date_of_birth: Option<String>,
}

impl ToRow for Character {
    fn to_row(&self) -> Row {
        let mut row = Row::new();
        row.insert(
            "id".to_string(),
            FieldValue::number(self.id.map(|id| id as f64)),
        );
        row.insert("name".to_string(), FieldValue::text(self.name.as_deref()));
        row.insert("house".to_string(), FieldValue::text(self.house.as_deref()));
        row.insert(
            "year_of_birth".to_string(),
            FieldValue::number(self.year_of_birth),
        );
        row.insert(
            "ancestry".to_string(),
            FieldValue::text(self.ancestry.as_deref()),
        );
        row.insert(
            "gender".to_string(),
            FieldValue::text(self.gender.as_deref()),
        );
        row.insert(
            "species".to_string(),
            FieldValue::text(self.species.as_deref()),
        );
        row.insert("wizard".to_string(), FieldValue::boolean(self.wizard));
        // Nested wand: hoist the numeric leaf under a prefixed name so wand
        // length participates in analysis; wood/core stay document-only.
        row.insert(
            "wand_length".to_string(),
            FieldValue::number(self.wand.length),
        );
        row.insert(
            "patronus".to_string(),
            FieldValue::text(self.patronus.as_deref()),
        );
        row.insert(
            "hogwarts_student".to_string(),
            FieldValue::boolean(self.hogwarts_student),
        );
        row.insert(
            "hogwarts_staff".to_string(),
            FieldValue::boolean(self.hogwarts_staff),
        );
        row.insert("actor".to_string(), FieldValue::text(self.actor.as_deref()));
        row.insert("alive".to_string(), FieldValue::boolean(self.alive));
        row.insert("image".to_string(), FieldValue::text(self.image.as_deref()));
        row.insert(
            "eye_colour".to_string(),
            FieldValue::text(self.eye_colour.as_deref()),
        );
        row.insert(
            "hair_colour".to_string(),
            FieldValue::text(self.hair_colour.as_deref()),
        );
        row.insert(
            "date_of_birth".to_string(),
            FieldValue::text(self.date_of_birth.as_deref()),
        );
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_character_keeps_null_fields() {
        let character = Character {
            id: Some(9),
            name: Some("Minerva McGonagall".to_string()),
            ..Character::default()
        };
        let json = serde_json::to_value(&character).expect("serialize character");
        assert_eq!(json["id"], 9);
        assert!(json["house"].is_null());
        assert!(json["wand"]["core"].is_null());
        assert_eq!(json["alternate_names"], serde_json::json!([]));
    }

    #[test]
    fn row_hoists_wand_length() {
        let character = Character {
            wand: Wand {
                wood: Some("fir".to_string()),
                core: Some("dragon heartstring".to_string()),
                length: Some(9.5),
            },
            ..Character::default()
        };
        let row = character.to_row();
        assert_eq!(row["wand_length"], FieldValue::Number(9.5));
        assert!(!row.contains_key("wand"));
        assert!(!row.contains_key("wand_core"));
    }

    #[test]
    fn row_tags_booleans_as_bool() {
        let character = Character {
            wizard: Some(true),
            ..Character::default()
        };
        let row = character.to_row();
        assert_eq!(row["wizard"], FieldValue::Bool(true));
        assert!(row["alive"].is_null());
    }
}
