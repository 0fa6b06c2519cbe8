use super::invocation::plan_invocation;
use crate::config::BuildConfig;
use crate::error::BuildPrepError;
use std::path::Path;
use std::process::ExitStatus;
use tokio::process::Command;
use tracing::{info, warn};

/// Create the build directory and run the build generator from inside it.
///
/// Directory creation is idempotent. A generator that starts but exits
/// non-zero is reported through the returned status and a warning, not an
/// error; only failing to spawn it at all is.
pub async fn bootstrap_build_dir(
    build: &BuildConfig,
    dependency_dir: &Path,
    project_root: &Path,
) -> Result<ExitStatus, BuildPrepError> {
    let invocation = plan_invocation(build, dependency_dir, project_root);

    tokio::fs::create_dir_all(&invocation.working_dir)
        .await
        .map_err(|e| BuildPrepError::BuildDirectoryCreation {
            path: invocation.working_dir.clone(),
            reason: e.to_string(),
        })?;

    info!(
        program = %invocation.program,
        build_dir = %invocation.working_dir.display(),
        "Running build generator"
    );

    let status = Command::new(&invocation.program)
        .args(&invocation.args)
        .current_dir(&invocation.working_dir)
        .status()
        .await
        .map_err(|e| BuildPrepError::GeneratorSpawn {
            program: invocation.program.clone(),
            reason: e.to_string(),
        })?;

    if !status.success() {
        warn!(
            program = %invocation.program,
            ?status,
            "Build generator exited with a failure status"
        );
    }

    Ok(status)
}
