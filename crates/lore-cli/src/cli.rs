//! CLI argument definitions for the lore-etl pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use lore_extract::Source;

#[derive(Parser)]
#[command(
    name = "lore",
    version,
    about = "Batch ETL for fictional-universe reference data",
    long_about = "Pull character, people, planet, and starship records from \
                  public REST APIs, normalize them into a flat typed schema, \
                  optionally load them into MongoDB, and compute a \
                  descriptive-statistics report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch raw collections from a source API into the staging directory.
    Extract(ExtractArgs),

    /// Normalize staged raw records into flat typed records.
    Transform(TransformArgs),

    /// Load staged flat records into MongoDB.
    Load(LoadArgs),

    /// Compute the descriptive-statistics report over staged flat records.
    Analyze(AnalyzeArgs),

    /// Run the full pipeline: extract, transform, optional load, analyze.
    Run(RunArgs),

    /// Create MongoDB collections and indexes.
    Setup(SetupArgs),
}

#[derive(Parser)]
pub struct ExtractArgs {
    /// Source API to pull from.
    #[arg(long, value_enum, default_value = "wizarding")]
    pub source: SourceArg,

    /// Override the source API base URL.
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the inter-request delay in milliseconds
    /// (default: 1000 for wizarding, 100 for galactic).
    #[arg(long = "delay-ms", value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Per-request timeout in seconds.
    #[arg(long = "timeout-secs", value_name = "SECS", default_value_t = 15)]
    pub timeout_secs: u64,

    /// Staging directory for pipeline files.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,
}

#[derive(Parser)]
pub struct TransformArgs {
    /// Staging directory for pipeline files.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Keep only character records whose wizard flag is true.
    #[arg(long = "wizard-only")]
    pub wizard_only: bool,
}

#[derive(Parser)]
pub struct LoadArgs {
    /// Staging directory for pipeline files.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// MongoDB connection string.
    #[arg(long, value_name = "URI", default_value = "mongodb://localhost:27017")]
    pub uri: String,

    /// Target database name.
    #[arg(long, value_name = "NAME", default_value = "lore")]
    pub database: String,

    /// Keep existing documents instead of deleting them before the load.
    #[arg(long = "no-replace")]
    pub no_replace: bool,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Staging directory for pipeline files.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Collection to analyze (default: characters for wizarding data,
    /// people for galactic data).
    #[arg(long, value_name = "NAME")]
    pub collection: Option<String>,

    /// Categorical target field for feature ranking (default: a
    /// per-collection choice, e.g. house for characters).
    #[arg(long, value_name = "FIELD")]
    pub target: Option<String>,

    /// Number of top-ranked features to keep.
    #[arg(long = "top-n", value_name = "N", default_value_t = 5)]
    pub top_n: usize,
}

#[derive(Parser)]
pub struct RunArgs {
    #[command(flatten)]
    pub extract: ExtractArgs,

    /// Keep only character records whose wizard flag is true.
    #[arg(long = "wizard-only")]
    pub wizard_only: bool,

    /// Persist flat records into MongoDB after the transform stage.
    #[arg(long)]
    pub load: bool,

    /// MongoDB connection string (used with --load).
    #[arg(long, value_name = "URI", default_value = "mongodb://localhost:27017")]
    pub uri: String,

    /// Target database name (used with --load).
    #[arg(long, value_name = "NAME", default_value = "lore")]
    pub database: String,

    /// Keep existing documents instead of deleting them before the load.
    #[arg(long = "no-replace")]
    pub no_replace: bool,

    /// Collection to analyze (default depends on the source).
    #[arg(long, value_name = "NAME")]
    pub collection: Option<String>,

    /// Categorical target field for feature ranking.
    #[arg(long, value_name = "FIELD")]
    pub target: Option<String>,

    /// Number of top-ranked features to keep.
    #[arg(long = "top-n", value_name = "N", default_value_t = 5)]
    pub top_n: usize,
}

#[derive(Parser)]
pub struct SetupArgs {
    /// MongoDB connection string.
    #[arg(long, value_name = "URI", default_value = "mongodb://localhost:27017")]
    pub uri: String,

    /// Target database name.
    #[arg(long, value_name = "NAME", default_value = "lore")]
    pub database: String,

    /// Drop the managed collections instead of creating them.
    #[arg(long)]
    pub drop: bool,
}

/// CLI source choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SourceArg {
    /// Wizarding-world API (characters).
    Wizarding,
    /// Galactic API (people, planets, starships).
    Galactic,
}

impl From<SourceArg> for Source {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Wizarding => Source::Wizarding,
            SourceArg::Galactic => Source::Galactic,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
