//! Pipeline stages with explicit inputs and outputs.
//!
//! The pipeline runs strictly sequentially:
//! 1. **Extract**: fetch raw collections from the source API
//! 2. **Transform**: normalize raw records into flat typed records
//! 3. **Load** (optional): upsert flat records into MongoDB
//! 4. **Analyze**: build the descriptive-statistics report
//!
//! Each stage reads its input from the staging directory (or takes it from
//! the previous stage in `run`) and returns a typed result.

use core::time::Duration;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use tracing::{error, info, info_span};

use lore_analysis::build_report;
use lore_extract::{ApiClient, ExtractorConfig, Source};
use lore_load::{LoadSummary, MongoSink, SinkConfig};
use lore_model::{Row, ToRow};
use lore_transform::{
    NormalizeOptions, normalize_characters, normalize_people, normalize_planets,
    normalize_starships,
};

use crate::staging::{self, AnalysisReportPayload, RawData, TransformedData};

/// Schema identifier stamped into the report payload.
const REPORT_SCHEMA: &str = "lore.analysis_report";
const REPORT_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Stage 1: Extract
// ============================================================================

/// Configuration for the extract stage.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub source: Source,
    pub base_url: Option<String>,
    pub delay_ms: Option<u64>,
    pub timeout_secs: u64,
    pub data_dir: PathBuf,
}

/// Result of the extract stage.
#[derive(Debug)]
pub struct ExtractResult {
    /// Record counts per collection.
    pub counts: BTreeMap<String, usize>,
    /// Path of the written staging file.
    pub path: PathBuf,
}

/// Fetch all collections of the configured source and stage them.
pub fn extract(config: &ExtractConfig) -> Result<ExtractResult> {
    let span = info_span!("extract", source = %config.source);
    let _guard = span.enter();
    let start = Instant::now();

    let mut client_config = ExtractorConfig::for_source(config.source);
    if let Some(base_url) = &config.base_url {
        client_config.base_url = base_url.trim_end_matches('/').to_string();
    }
    if let Some(delay_ms) = config.delay_ms {
        client_config.delay = Duration::from_millis(delay_ms);
    }
    client_config.timeout = Duration::from_secs(config.timeout_secs);

    let client = ApiClient::new(client_config).context("create HTTP client")?;
    let mut collections = client.extract_all(config.source);

    let counts: BTreeMap<String, usize> = collections
        .iter()
        .map(|(name, records)| (name.clone(), records.len()))
        .collect();

    let raw = match config.source {
        Source::Wizarding => RawData::Wizarding {
            characters: collections.remove("characters").unwrap_or_default(),
        },
        Source::Galactic => RawData::Galactic {
            people: collections.remove("people").unwrap_or_default(),
            planets: collections.remove("planets").unwrap_or_default(),
            starships: collections.remove("starships").unwrap_or_default(),
        },
    };
    let path = staging::write_raw(&config.data_dir, &raw)?;

    info!(
        source = %config.source,
        record_count = counts.values().sum::<usize>(),
        duration_ms = start.elapsed().as_millis(),
        "extract complete"
    );
    Ok(ExtractResult { counts, path })
}

// ============================================================================
// Stage 2: Transform
// ============================================================================

/// Result of the transform stage.
#[derive(Debug)]
pub struct TransformResult {
    /// The normalized collections, kept for downstream stages in `run`.
    pub data: TransformedData,
    /// Path of the written staging file.
    pub path: PathBuf,
}

/// Normalize the staged raw records and stage the flat records.
pub fn transform(data_dir: &Path, options: &NormalizeOptions) -> Result<TransformResult> {
    let span = info_span!("transform");
    let _guard = span.enter();
    let start = Instant::now();

    let raw = staging::read_raw(data_dir)?;
    let data = match raw {
        RawData::Wizarding { characters } => TransformedData::Wizarding {
            characters: normalize_characters(&characters, options),
        },
        RawData::Galactic {
            people,
            planets,
            starships,
        } => TransformedData::Galactic {
            people: normalize_people(&people),
            planets: normalize_planets(&planets),
            starships: normalize_starships(&starships),
        },
    };
    let path = staging::write_transformed(data_dir, &data)?;

    info!(
        record_count = data.counts().iter().map(|(_, count)| count).sum::<usize>(),
        duration_ms = start.elapsed().as_millis(),
        "transform complete"
    );
    Ok(TransformResult { data, path })
}

// ============================================================================
// Stage 3: Load
// ============================================================================

/// Load the staged flat records into the sink.
///
/// A sink connectivity failure is logged and reported as zero-count
/// summaries; it never aborts the pipeline.
pub fn load(data: &TransformedData, config: &SinkConfig, replace: bool) -> Vec<LoadSummary> {
    let span = info_span!("load", database = %config.database);
    let _guard = span.enter();
    let start = Instant::now();

    let sink = match MongoSink::connect(config) {
        Ok(sink) => sink,
        Err(err) => {
            error!(error = %err, "sink unavailable, nothing loaded");
            return data
                .counts()
                .iter()
                .map(|(collection, _)| LoadSummary {
                    collection: (*collection).to_string(),
                    written: 0,
                })
                .collect();
        }
    };

    let summaries = match data {
        TransformedData::Wizarding { characters } => {
            vec![load_collection(&sink, "characters", characters, replace)]
        }
        TransformedData::Galactic {
            people,
            planets,
            starships,
        } => vec![
            load_collection(&sink, "people", people, replace),
            load_collection(&sink, "planets", planets, replace),
            load_collection(&sink, "starships", starships, replace),
        ],
    };

    info!(
        written = summaries.iter().map(|summary| summary.written).sum::<usize>(),
        duration_ms = start.elapsed().as_millis(),
        "load complete"
    );
    summaries
}

fn load_collection<T: serde::Serialize>(
    sink: &MongoSink,
    name: &str,
    records: &[T],
    replace: bool,
) -> LoadSummary {
    sink.load_collection(name, records, replace)
        .unwrap_or_else(|err| {
            error!(collection = name, error = %err, "load failed");
            LoadSummary {
                collection: name.to_string(),
                written: 0,
            }
        })
}

// ============================================================================
// Stage 4: Analyze
// ============================================================================

/// Configuration for the analyze stage.
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub collection: Option<String>,
    pub target: Option<String>,
    pub top_n: usize,
}

/// Result of the analyze stage.
#[derive(Debug)]
pub struct AnalyzeResult {
    pub payload: AnalysisReportPayload,
    pub path: PathBuf,
}

/// Build and stage the analysis report for one collection.
pub fn analyze(data: &TransformedData, config: &AnalyzeConfig, data_dir: &Path) -> Result<AnalyzeResult> {
    let span = info_span!("analyze");
    let _guard = span.enter();
    let start = Instant::now();

    let (collection, rows) = select_rows(data, config.collection.as_deref())?;
    let target = config
        .target
        .clone()
        .unwrap_or_else(|| default_target(collection).to_string());

    let report = build_report(&rows, &target, config.top_n);
    let payload = AnalysisReportPayload {
        schema: REPORT_SCHEMA.to_string(),
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        collection: collection.to_string(),
        target_field: target,
        report,
    };
    let path = staging::write_report(data_dir, &payload)?;

    info!(
        collection,
        total_records = payload.report.total_records,
        summarized_fields = payload.report.statistical_summary.len(),
        duration_ms = start.elapsed().as_millis(),
        "analyze complete"
    );
    Ok(AnalyzeResult { payload, path })
}

/// Pick the collection to analyze and convert it to rows.
fn select_rows<'a>(
    data: &TransformedData,
    requested: Option<&'a str>,
) -> Result<(&'a str, Vec<Row>)> {
    match data {
        TransformedData::Wizarding { characters } => match requested {
            None | Some("characters") => Ok(("characters", to_rows(characters))),
            Some(other) => bail!("collection {other} is not in the staged wizarding data"),
        },
        TransformedData::Galactic {
            people,
            planets,
            starships,
        } => match requested {
            None | Some("people") => Ok(("people", to_rows(people))),
            Some("planets") => Ok(("planets", to_rows(planets))),
            Some("starships") => Ok(("starships", to_rows(starships))),
            Some(other) => bail!("collection {other} is not in the staged galactic data"),
        },
    }
}

fn to_rows<T: ToRow>(records: &[T]) -> Vec<Row> {
    records.iter().map(ToRow::to_row).collect()
}

/// Default ranking target per collection.
fn default_target(collection: &str) -> &'static str {
    match collection {
        "people" => "gender",
        "planets" => "climate",
        "starships" => "starship_class",
        _ => "house",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lore_model::Character;

    #[test]
    fn default_targets_per_collection() {
        assert_eq!(default_target("characters"), "house");
        assert_eq!(default_target("people"), "gender");
        assert_eq!(default_target("starships"), "starship_class");
    }

    #[test]
    fn select_rows_rejects_foreign_collections() {
        let data = TransformedData::Wizarding {
            characters: vec![Character::default()],
        };
        assert!(select_rows(&data, Some("people")).is_err());
        let (collection, rows) = select_rows(&data, None).expect("default collection");
        assert_eq!(collection, "characters");
        assert_eq!(rows.len(), 1);
    }
}
