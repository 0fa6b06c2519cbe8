use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_FETCH_URL: &str =
    "https://raw.githubusercontent.com/nothings/stb/master/stb_image.h";

/// Where the vendored header is fetched from and where it lands, relative to
/// the project root.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct FetchConfig {
    pub url: String,
    pub artifact_path: PathBuf,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FETCH_URL.to_string(),
            artifact_path: PathBuf::from("include/stb/stb_image.h"),
        }
    }
}

/// How the build-configuration tool is invoked. `source_root` is resolved
/// relative to the build directory the generator runs in.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct BuildConfig {
    pub directory: PathBuf,
    pub program: String,
    pub dependency_var: String,
    pub source_root: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("build"),
            program: "cmake".to_string(),
            dependency_var: "GLEW_DIR".to_string(),
            source_root: PathBuf::from(".."),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub build: BuildConfig,
}
