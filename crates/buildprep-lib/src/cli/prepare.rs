use crate::cli::PrepareParams;
use crate::cli::configure::run_configure;
use crate::error::BuildPrepError;
use crate::fetch::{FetchOutcome, fetch_artifact};
use tracing;

pub async fn run_prepare(params: PrepareParams) -> Result<(), BuildPrepError> {
    let PrepareParams {
        configure,
        fetch_item,
        fetch_options,
    } = params;

    // The fetch happens first: a failed fetch must abort before the build
    // directory is touched.
    match fetch_artifact(&fetch_item, &fetch_options).await? {
        FetchOutcome::Fetched { bytes } => {
            tracing::info!("Fetched {} bytes from {}", bytes, fetch_item.url);
        }
        FetchOutcome::SkippedExisting => {
            tracing::info!(
                "Artifact already present at {}, pass --force-fetch to re-fetch",
                fetch_item.artifact_path.display()
            );
        }
    }

    run_configure(configure).await
}
