pub mod dry_run;
pub mod process;

pub(crate) use chartops_core::runner::{
    RunnerPlugin, RunnerSession, RunnerStartArgs, SessionExit, Signal,
};
