//! GitHub Actions binding: run context in, workflow commands and step outputs out.

mod commands;
mod context;
mod outputs;

pub use commands::WorkflowCommand;
pub use context::{CiContext, PullRequest};
pub use outputs::{ActionOutputs, OutputSink};
