//! Reporting sink port
//!
//! Defines where outcomes go once an execution has been evaluated.

use super::super::models::{Cause, Description};

/// Consumer of evaluation outcomes
///
/// Implementations decide how outcomes are aggregated, displayed or
/// persisted (in-memory collector, console, log). Receivers take `&self`;
/// an implementation shared between threads serializes calls itself.
#[cfg_attr(test, mockall::automock)]
pub trait ReportSink: Send + Sync {
    /// An execution ran and passed
    fn finished(&self, description: &Description) -> anyhow::Result<()>;

    /// An execution was skipped
    fn ignored(&self, description: &Description) -> anyhow::Result<()>;

    /// An execution ran and failed with `cause`
    fn failed(&self, description: &Description, cause: &Cause) -> anyhow::Result<()>;
}
