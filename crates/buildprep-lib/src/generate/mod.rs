mod bootstrap;
mod invocation;

pub use bootstrap::bootstrap_build_dir;
pub use invocation::{GeneratorInvocation, plan_invocation};
