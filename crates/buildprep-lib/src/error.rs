use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildPrepError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid command-line arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("Dependency path does not exist: {path}")]
    DependencyPathValidation { path: PathBuf },

    #[error("Invalid fetch URL {url}: {reason}")]
    FetchUrl { url: String, reason: String },

    #[error("Fetch failed for {url}: server returned status {status}")]
    FetchStatus { url: String, status: u16 },

    #[error("Failed to write artifact to {path}: {reason}")]
    ArtifactWrite { path: PathBuf, reason: String },

    #[error("Build directory creation failed at {path}: {reason}")]
    BuildDirectoryCreation { path: PathBuf, reason: String },

    #[error("Failed to spawn build generator {program}: {reason}")]
    GeneratorSpawn { program: String, reason: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}
