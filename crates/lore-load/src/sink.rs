//! MongoDB sink adapter.
//!
//! The pipeline is synchronous; the async driver is wrapped behind a private
//! current-thread runtime so callers see plain blocking methods. Loads are
//! idempotent: each record is upserted by its external `id`, optionally after
//! a wholesale pre-delete of the collection. Single-writer, single-run
//! semantics are assumed — the sink does not coordinate concurrent writers.

use mongodb::bson::{Bson, Document, doc};
use mongodb::{Client, Database};
use serde::Serialize;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, info, warn};

use crate::error::{LoadError, Result};
use crate::indexes::{COLLECTIONS, index_models_for};

/// Sink connection configuration.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// MongoDB connection string.
    pub uri: String,
    /// Target database name.
    pub database: String,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "lore".to_string(),
        }
    }
}

/// Outcome of loading one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub collection: String,
    /// Documents inserted or modified. Replacing a document with identical
    /// content counts as zero.
    pub written: usize,
}

/// Connected sink handle.
pub struct MongoSink {
    database: Database,
    runtime: Runtime,
}

impl MongoSink {
    /// Connect to the sink and verify the connection with a ping.
    pub fn connect(config: &SinkConfig) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(LoadError::Runtime)?;
        let database = runtime.block_on(async {
            let client = Client::with_uri_str(&config.uri).await?;
            let database = client.database(&config.database);
            database.run_command(doc! {"ping": 1}).await?;
            Ok::<_, mongodb::error::Error>(database)
        })?;
        info!(database = %config.database, "connected to sink");
        Ok(Self { database, runtime })
    }

    /// Upsert a batch of records into one collection, keyed by `id`.
    ///
    /// With `replace` set, all existing documents are deleted first so the
    /// collection ends up exactly mirroring the batch. A record that fails
    /// to encode or write is logged and skipped; the batch continues.
    pub fn load_collection<T: Serialize>(
        &self,
        name: &str,
        records: &[T],
        replace: bool,
    ) -> Result<LoadSummary> {
        let collection = self.database.collection::<Document>(name);
        let written = self.runtime.block_on(async {
            if replace {
                let deleted = collection.delete_many(doc! {}).await?.deleted_count;
                debug!(collection = name, deleted, "existing documents removed");
            }

            let mut written = 0usize;
            for record in records {
                let document = match mongodb::bson::to_document(record) {
                    Ok(document) => document,
                    Err(err) => {
                        warn!(collection = name, error = %err, "skipping unencodable record");
                        continue;
                    }
                };
                let filter = doc! {"id": document.get("id").cloned().unwrap_or(Bson::Null)};
                match collection
                    .replace_one(filter, document)
                    .upsert(true)
                    .await
                {
                    Ok(result) => {
                        if result.upserted_id.is_some() || result.modified_count > 0 {
                            written += 1;
                        }
                    }
                    Err(err) => {
                        warn!(collection = name, error = %err, "skipping failed upsert");
                    }
                }
            }
            Ok::<_, LoadError>(written)
        })?;

        info!(collection = name, written, total = records.len(), "collection loaded");
        Ok(LoadSummary {
            collection: name.to_string(),
            written,
        })
    }

    /// Create any missing managed collections.
    pub fn create_collections(&self) -> Result<()> {
        self.runtime.block_on(async {
            let existing = self.database.list_collection_names().await?;
            for name in COLLECTIONS {
                if existing.iter().any(|collection| collection == name) {
                    debug!(collection = name, "collection already exists");
                } else {
                    self.database.create_collection(name).await?;
                    info!(collection = name, "collection created");
                }
            }
            Ok(())
        })
    }

    /// Declare the uniqueness constraint and secondary lookup indexes.
    pub fn create_indexes(&self) -> Result<()> {
        self.runtime.block_on(async {
            for name in COLLECTIONS {
                let collection = self.database.collection::<Document>(name);
                for model in index_models_for(name) {
                    collection.create_index(model).await?;
                }
                debug!(collection = name, "indexes created");
            }
            Ok(())
        })
    }

    /// Create collections and indexes in one pass.
    pub fn setup(&self) -> Result<()> {
        self.create_collections()?;
        self.create_indexes()?;
        info!("sink setup complete");
        Ok(())
    }

    /// Drop every managed collection. Destructive; used by `setup --drop`.
    pub fn drop_collections(&self) -> Result<()> {
        self.runtime.block_on(async {
            let existing = self.database.list_collection_names().await?;
            for name in COLLECTIONS {
                if existing.iter().any(|collection| collection == name) {
                    self.database.collection::<Document>(name).drop().await?;
                    warn!(collection = name, "collection dropped");
                }
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_local_sink() {
        let config = SinkConfig::default();
        assert_eq!(config.uri, "mongodb://localhost:27017");
        assert_eq!(config.database, "lore");
    }
}
