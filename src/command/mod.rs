//! Command dispatch
//!
//! Commands are looked up by name in a [`CommandRegistry`], validated,
//! executed, and their typed [`CommandResult`] is delivered to a
//! [`ResultSink`] by the [`CommandPipeline`].

pub mod analyze;
pub mod pipeline;
pub mod registry;
pub mod result;
pub mod sink;

pub use analyze::{validate_analyze, AnalyzeExecutor};
pub use pipeline::CommandPipeline;
pub use registry::{CommandEntry, CommandExecutor, CommandRegistry, CommandRegistryBuilder, CommandValidator};
pub use result::{CommandOutput, CommandResult};
pub use sink::{InstructionsProvider, RecordingSink, ResultSink};
