mod loader;
mod model;

pub use loader::load_config;
pub use model::{BuildConfig, Config, FetchConfig, DEFAULT_FETCH_URL};
