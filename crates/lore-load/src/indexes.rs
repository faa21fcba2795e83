//! Index definitions per collection.

use mongodb::IndexModel;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;

/// Collections the sink manages.
pub const COLLECTIONS: [&str; 4] = ["characters", "people", "planets", "starships"];

/// Index models for one collection.
///
/// Every collection gets a unique index on the external identifier plus a
/// secondary index on `name`. The character collection adds the commonly
/// filtered lookup fields; the nested wand core uses its dot path.
pub fn index_models_for(collection: &str) -> Vec<IndexModel> {
    let mut models = vec![
        IndexModel::builder()
            .keys(doc! {"id": 1})
            .options(IndexOptions::builder().unique(true).build())
            .build(),
        IndexModel::builder().keys(doc! {"name": 1}).build(),
    ];
    if collection == "characters" {
        for field in ["house", "ancestry", "wand.core", "year_of_birth"] {
            models.push(IndexModel::builder().keys(doc! {field: 1}).build());
        }
    }
    models
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_index_is_unique() {
        let models = index_models_for("people");
        let id_index = &models[0];
        assert_eq!(id_index.keys, doc! {"id": 1});
        assert_eq!(
            id_index.options.as_ref().and_then(|options| options.unique),
            Some(true)
        );
    }

    #[test]
    fn characters_get_lookup_indexes() {
        let models = index_models_for("characters");
        let keys: Vec<_> = models.iter().map(|model| model.keys.clone()).collect();
        assert!(keys.contains(&doc! {"house": 1}));
        assert!(keys.contains(&doc! {"wand.core": 1}));
        assert!(keys.contains(&doc! {"year_of_birth": 1}));
        assert_eq!(models.len(), 6);
    }

    #[test]
    fn galactic_collections_stay_lean() {
        assert_eq!(index_models_for("starships").len(), 2);
    }
}
