//! Concurrent dispatch and end-to-end coordination

pub mod dispatcher;
pub mod orchestrator;

pub use dispatcher::{run_tasks, Completion};
pub use orchestrator::{run, PipelineConfig, RunSummary};
