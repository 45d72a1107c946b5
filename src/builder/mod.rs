//! Build orchestration: external Maven invocation, the sequential run loop
//! and the per-module report.

pub mod invoker;
pub mod orchestrator;
pub mod report;

pub use invoker::{InvocationRequest, InvocationResult, InvokeError, Invoker, MavenInvoker};
pub use orchestrator::{BuildOrchestrator, RunOutcome};
pub use report::{BuildReport, Outcome};
