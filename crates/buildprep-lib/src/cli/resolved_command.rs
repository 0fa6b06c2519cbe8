use crate::cli::args::Command;
use crate::cli::params::{ConfigureParams, PrepareParams};
use crate::config::{BuildConfig, Config, load_config};
use crate::error::BuildPrepError;
use crate::fetch::{FetchItem, FetchOptions};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Configure(ConfigureParams),
    Prepare(PrepareParams),
}

/// Validate a command and resolve it into runnable parameters. All
/// validation happens here, before any filesystem or network side effect.
pub fn resolve_command(command: Command) -> Result<ResolvedCommand, BuildPrepError> {
    match command {
        Command::Configure {
            dependency_dir,
            config_path,
            project_root,
            build_dir,
        } => {
            let app_config = load_or_default(config_path.as_deref())?;
            let params =
                resolve_configure_params(app_config.build, dependency_dir, project_root, build_dir)?;

            Ok(ResolvedCommand::Configure(params))
        }
        Command::Prepare {
            dependency_dir,
            config_path,
            project_root,
            build_dir,
            fetch_url,
            artifact_path,
            force_fetch,
            fetch_timeout_secs,
        } => {
            if fetch_timeout_secs == 0 {
                return Err(BuildPrepError::CliArgumentValidation {
                    details: "fetch-timeout must be greater than 0.".to_string(),
                });
            }

            let app_config = load_or_default(config_path.as_deref())?;
            let configure = resolve_configure_params(
                app_config.build,
                dependency_dir,
                project_root,
                build_dir,
            )?;

            let url = fetch_url.unwrap_or(app_config.fetch.url);
            Url::parse(&url).map_err(|e| BuildPrepError::FetchUrl {
                url: url.clone(),
                reason: e.to_string(),
            })?;

            let artifact_rel = artifact_path
                .map(PathBuf::from)
                .unwrap_or(app_config.fetch.artifact_path);

            Ok(ResolvedCommand::Prepare(PrepareParams {
                fetch_item: FetchItem {
                    url,
                    artifact_path: configure.project_root.join(artifact_rel),
                },
                fetch_options: FetchOptions {
                    force: force_fetch,
                    timeout: Duration::from_secs(fetch_timeout_secs),
                },
                configure,
            }))
        }
    }
}

fn load_or_default(config_path: Option<&str>) -> Result<Config, BuildPrepError> {
    match config_path {
        Some(path) => load_config(path),
        None => Ok(Config::default()),
    }
}

fn resolve_configure_params(
    mut build: BuildConfig,
    dependency_dir: String,
    project_root: String,
    build_dir: Option<String>,
) -> Result<ConfigureParams, BuildPrepError> {
    let dependency_dir = PathBuf::from(dependency_dir);
    if !dependency_dir.exists() {
        return Err(BuildPrepError::DependencyPathValidation {
            path: dependency_dir,
        });
    }

    if let Some(dir) = build_dir {
        build.directory = PathBuf::from(dir);
    }

    Ok(ConfigureParams {
        project_root: PathBuf::from(project_root),
        dependency_dir,
        build,
    })
}
