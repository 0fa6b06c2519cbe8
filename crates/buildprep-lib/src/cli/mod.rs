mod args;
mod configure;
mod params;
mod prepare;
mod resolved_command;

pub use args::{Command, parse_args};
pub use configure::run_configure;
pub use params::{ConfigureParams, PrepareParams};
pub use prepare::run_prepare;
pub use resolved_command::{ResolvedCommand, resolve_command};
