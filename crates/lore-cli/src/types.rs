use std::path::PathBuf;

/// Summary of one pipeline stage for the final run table.
#[derive(Debug)]
pub struct StageSummary {
    pub stage: &'static str,
    /// What the stage acted on (collection names, target field, ...).
    pub detail: String,
    pub records: usize,
    pub output: Option<PathBuf>,
}

/// Result of a full `lore run` invocation.
#[derive(Debug)]
pub struct RunResult {
    pub source: String,
    pub data_dir: PathBuf,
    pub stages: Vec<StageSummary>,
    pub errors: Vec<String>,
    pub has_errors: bool,
}
