use crate::cli::ConfigureParams;
use crate::error::BuildPrepError;
use crate::generate::bootstrap_build_dir;
use tracing;

pub async fn run_configure(params: ConfigureParams) -> Result<(), BuildPrepError> {
    let ConfigureParams {
        project_root,
        dependency_dir,
        build,
    } = params;

    tracing::info!(
        "Bootstrapping build directory under {}",
        project_root.display()
    );
    let status = bootstrap_build_dir(&build, &dependency_dir, &project_root).await?;

    tracing::info!("Build generator finished ({})", status);
    Ok(())
}
