//! Staged-file I/O between pipeline stages.
//!
//! Each stage writes one pretty-printed JSON document into the data
//! directory and the next stage reads it back. A missing input file is the
//! one hard failure in the pipeline: there is nothing meaningful to compute,
//! so the command exits nonzero instead of degrading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use lore_model::{AnalysisReport, Character, Person, Planet, Starship};

/// Staged output of the extract stage.
pub const RAW_FILE: &str = "raw_data.json";
/// Staged output of the transform stage.
pub const TRANSFORMED_FILE: &str = "transformed_data.json";
/// Final analysis report document.
pub const REPORT_FILE: &str = "analysis_report.json";

/// Raw collections as fetched, keyed per source shape.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawData {
    Wizarding {
        characters: Vec<Value>,
    },
    Galactic {
        people: Vec<Value>,
        planets: Vec<Value>,
        starships: Vec<Value>,
    },
}

/// Normalized collections, keyed per source shape.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransformedData {
    Wizarding {
        characters: Vec<Character>,
    },
    Galactic {
        people: Vec<Person>,
        planets: Vec<Planet>,
        starships: Vec<Starship>,
    },
}

impl TransformedData {
    /// Collection names and record counts, in staging order.
    pub fn counts(&self) -> Vec<(&'static str, usize)> {
        match self {
            TransformedData::Wizarding { characters } => {
                vec![("characters", characters.len())]
            }
            TransformedData::Galactic {
                people,
                planets,
                starships,
            } => vec![
                ("people", people.len()),
                ("planets", planets.len()),
                ("starships", starships.len()),
            ],
        }
    }
}

/// Envelope written around the analysis report.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisReportPayload {
    pub schema: String,
    pub schema_version: u32,
    pub generated_at: String,
    pub collection: String,
    pub target_field: String,
    #[serde(flatten)]
    pub report: AnalysisReport,
}

/// Write the raw staging file, creating the data directory if needed.
pub fn write_raw(data_dir: &Path, data: &RawData) -> Result<PathBuf> {
    write_staged(data_dir, RAW_FILE, data)
}

/// Read the raw staging file. Hard error when it does not exist.
pub fn read_raw(data_dir: &Path) -> Result<RawData> {
    read_staged(data_dir, RAW_FILE, "lore extract")
}

/// Write the transformed staging file.
pub fn write_transformed(data_dir: &Path, data: &TransformedData) -> Result<PathBuf> {
    write_staged(data_dir, TRANSFORMED_FILE, data)
}

/// Read the transformed staging file. Hard error when it does not exist.
pub fn read_transformed(data_dir: &Path) -> Result<TransformedData> {
    read_staged(data_dir, TRANSFORMED_FILE, "lore transform")
}

/// Write the analysis report document.
pub fn write_report(data_dir: &Path, payload: &AnalysisReportPayload) -> Result<PathBuf> {
    write_staged(data_dir, REPORT_FILE, payload)
}

fn write_staged<T: Serialize>(data_dir: &Path, file: &str, data: &T) -> Result<PathBuf> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("create data directory {}", data_dir.display()))?;
    let path = data_dir.join(file);
    let json = serde_json::to_string_pretty(data).context("serialize staged data")?;
    fs::write(&path, format!("{json}\n")).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

fn read_staged<T: DeserializeOwned>(data_dir: &Path, file: &str, produced_by: &str) -> Result<T> {
    let path = data_dir.join(file);
    if !path.exists() {
        bail!(
            "staged input {} not found; run `{produced_by}` first",
            path.display()
        );
    }
    let contents =
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse {}", path.display()))
}
