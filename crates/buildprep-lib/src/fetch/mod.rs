mod fetcher;
mod types;

pub use fetcher::fetch_artifact;
pub use types::{FetchItem, FetchOptions, FetchOutcome};
