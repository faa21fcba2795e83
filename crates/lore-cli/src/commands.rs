use anyhow::Result;
use tracing::warn;

use lore_extract::Source;
use lore_load::{MongoSink, SinkConfig};
use lore_transform::NormalizeOptions;

use crate::cli::{AnalyzeArgs, ExtractArgs, LoadArgs, RunArgs, SetupArgs, TransformArgs};
use crate::pipeline::{self, AnalyzeConfig, ExtractConfig};
use crate::staging;
use crate::summary::print_report_summary;
use crate::types::{RunResult, StageSummary};

pub fn run_extract(args: &ExtractArgs) -> Result<()> {
    let result = pipeline::extract(&extract_config(args))?;
    println!("Raw data saved to {}", result.path.display());
    for (collection, count) in &result.counts {
        println!("  {collection}: {count} records");
    }
    Ok(())
}

pub fn run_transform(args: &TransformArgs) -> Result<()> {
    let options = NormalizeOptions::new().with_wizard_only(args.wizard_only);
    let result = pipeline::transform(&args.data_dir, &options)?;
    println!("Transformed data saved to {}", result.path.display());
    for (collection, count) in result.data.counts() {
        println!("  {collection}: {count} records");
    }
    Ok(())
}

pub fn run_load(args: &LoadArgs) -> Result<()> {
    let data = staging::read_transformed(&args.data_dir)?;
    let config = SinkConfig {
        uri: args.uri.clone(),
        database: args.database.clone(),
    };
    let summaries = pipeline::load(&data, &config, !args.no_replace);
    println!("Loaded into {}:", args.database);
    for summary in summaries {
        println!("  {}: {} documents", summary.collection, summary.written);
    }
    Ok(())
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let data = staging::read_transformed(&args.data_dir)?;
    let config = AnalyzeConfig {
        collection: args.collection.clone(),
        target: args.target.clone(),
        top_n: args.top_n,
    };
    let result = pipeline::analyze(&data, &config, &args.data_dir)?;
    println!("Report saved to {}", result.path.display());
    print_report_summary(&result.payload);
    Ok(())
}

pub fn run_setup(args: &SetupArgs) -> Result<()> {
    let config = SinkConfig {
        uri: args.uri.clone(),
        database: args.database.clone(),
    };
    let sink = MongoSink::connect(&config)?;
    if args.drop {
        sink.drop_collections()?;
        println!("Collections dropped from {}", args.database);
    } else {
        sink.setup()?;
        println!("Collections and indexes ready in {}", args.database);
    }
    Ok(())
}

/// Full pipeline: extract, transform, optional load, analyze.
pub fn run_pipeline(args: &RunArgs) -> Result<RunResult> {
    let mut stages = Vec::new();
    let mut errors = Vec::new();
    let data_dir = args.extract.data_dir.clone();

    // Extract
    let extracted = pipeline::extract(&extract_config(&args.extract))?;
    stages.push(StageSummary {
        stage: "extract",
        detail: collection_list(extracted.counts.keys().map(String::as_str)),
        records: extracted.counts.values().sum(),
        output: Some(extracted.path),
    });

    // Transform
    let options = NormalizeOptions::new().with_wizard_only(args.wizard_only);
    let transformed = pipeline::transform(&data_dir, &options)?;
    stages.push(StageSummary {
        stage: "transform",
        detail: collection_list(transformed.data.counts().iter().map(|(name, _)| *name)),
        records: transformed
            .data
            .counts()
            .iter()
            .map(|(_, count)| count)
            .sum(),
        output: Some(transformed.path.clone()),
    });

    // Load (opt-in)
    if args.load {
        let config = SinkConfig {
            uri: args.uri.clone(),
            database: args.database.clone(),
        };
        let summaries = pipeline::load(&transformed.data, &config, !args.no_replace);
        let written: usize = summaries.iter().map(|summary| summary.written).sum();
        let expected: usize = transformed
            .data
            .counts()
            .iter()
            .map(|(_, count)| count)
            .sum();
        if written == 0 && expected > 0 {
            errors.push("load: no documents written (sink unavailable?)".to_string());
        }
        stages.push(StageSummary {
            stage: "load",
            detail: format!("database {}", args.database),
            records: written,
            output: None,
        });
    } else {
        warn!("persistence disabled; skipping load stage");
    }

    // Analyze
    let analyze_config = AnalyzeConfig {
        collection: args.collection.clone(),
        target: args.target.clone(),
        top_n: args.top_n,
    };
    let analyzed = pipeline::analyze(&transformed.data, &analyze_config, &data_dir)?;
    stages.push(StageSummary {
        stage: "analyze",
        detail: format!(
            "{} by {}",
            analyzed.payload.collection, analyzed.payload.target_field
        ),
        records: analyzed.payload.report.total_records,
        output: Some(analyzed.path.clone()),
    });
    print_report_summary(&analyzed.payload);

    let has_errors = !errors.is_empty();
    Ok(RunResult {
        source: Source::from(args.extract.source).to_string(),
        data_dir,
        stages,
        errors,
        has_errors,
    })
}

fn extract_config(args: &ExtractArgs) -> ExtractConfig {
    ExtractConfig {
        source: args.source.into(),
        base_url: args.base_url.clone(),
        delay_ms: args.delay_ms,
        timeout_secs: args.timeout_secs,
        data_dir: args.data_dir.clone(),
    }
}

fn collection_list<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
