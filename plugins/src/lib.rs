pub mod factory;
pub mod runner;

pub use factory::build_runner;
pub use runner::dry_run::DryRunRunnerPlugin;
pub use runner::process::ProcessRunnerPlugin;
