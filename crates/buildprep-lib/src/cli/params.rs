use crate::config::BuildConfig;
use crate::fetch::{FetchItem, FetchOptions};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ConfigureParams {
    pub project_root: PathBuf,
    pub dependency_dir: PathBuf,
    pub build: BuildConfig,
}

#[derive(Debug, Clone)]
pub struct PrepareParams {
    pub configure: ConfigureParams,
    pub fetch_item: FetchItem,
    pub fetch_options: FetchOptions,
}
