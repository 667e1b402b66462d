//! Execution services
//!
//! - [`ArchTestExecution`] - The execution contract
//! - [`evaluate`] - Run one execution, honoring the group ignore marker
//! - [`RuleExecution`] / [`MethodExecution`] - Field and method backed checks
//! - [`ArchTestRunner`] - Evaluate many executions and report to a sink

mod execution;
mod method_execution;
mod rule_execution;
mod runner;

pub use execution::{ArchTestExecution, CheckPanicked, evaluate};
pub use method_execution::{CheckFn, CheckResult, MethodExecution};
pub use rule_execution::RuleExecution;
pub use runner::{ArchTestRunner, RunSummary};
