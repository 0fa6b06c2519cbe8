use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct FetchItem {
    pub url: String,
    /// Where the artifact is written, resolved under the project root.
    pub artifact_path: PathBuf,
}

#[derive(Clone, Copy, Debug)]
pub struct FetchOptions {
    /// Re-fetch and overwrite even if the artifact already exists.
    pub force: bool,
    pub timeout: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Fetched { bytes: u64 },
    SkippedExisting,
}
