pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod generate;

pub use config::Config;
pub use error::BuildPrepError;
