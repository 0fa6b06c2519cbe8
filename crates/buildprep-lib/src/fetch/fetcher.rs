use super::types::{FetchItem, FetchOptions, FetchOutcome};
use crate::error::BuildPrepError;
use reqwest::StatusCode;
use tracing::{debug, info};

/// Fetch a single artifact over HTTP and write it below the project tree.
///
/// Anything other than HTTP 200 is an error; the caller is expected to abort
/// before touching the build directory. An artifact that is already on disk
/// is left alone unless `options.force` is set.
pub async fn fetch_artifact(
    item: &FetchItem,
    options: &FetchOptions,
) -> Result<FetchOutcome, BuildPrepError> {
    if item.artifact_path.exists() && !options.force {
        debug!(
            output = %item.artifact_path.display(),
            "Artifact already exists, skipping fetch"
        );
        return Ok(FetchOutcome::SkippedExisting);
    }

    info!(url = %item.url, output = %item.artifact_path.display(), "Fetching artifact");

    let client = reqwest::Client::builder().timeout(options.timeout).build()?;
    let response = client.get(&item.url).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(BuildPrepError::FetchStatus {
            url: item.url.clone(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await?;

    if let Some(parent) = item.artifact_path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            BuildPrepError::ArtifactWrite {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            }
        })?;
    }

    tokio::fs::write(&item.artifact_path, &body)
        .await
        .map_err(|e| BuildPrepError::ArtifactWrite {
            path: item.artifact_path.clone(),
            reason: e.to_string(),
        })?;

    info!(
        url = %item.url,
        output = %item.artifact_path.display(),
        bytes = body.len(),
        "Artifact fetched"
    );
    Ok(FetchOutcome::Fetched {
        bytes: body.len() as u64,
    })
}
