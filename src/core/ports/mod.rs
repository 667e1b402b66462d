//! Port traits (interfaces) for external collaborators
//!
//! These traits define the boundaries between the execution core and the
//! things it does not own: the rules being checked and the sinks outcomes
//! are reported to.
//!
//! Implementations of [`ReportSink`] live in the `adapters` module.

mod arch_rule;
mod report_sink;

pub use arch_rule::{ArchRule, FnRule, RuleViolation, rule_fn};
#[cfg(test)]
pub(crate) use report_sink::MockReportSink;
pub use report_sink::ReportSink;
