//! Runner - evaluates executions and reports their outcomes
//!
//! Evaluation is sequential. Every outcome is handed to the sink through
//! [`Outcome::report`](crate::core::models::Outcome::report); the runner never inspects which sink operation ran.

use crate::config::RunnerSettings;
use crate::core::models::{ClassModel, OutcomeKind};
use crate::core::ports::ReportSink;

use super::ArchTestExecution;

/// Counts of a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Executions that passed
    pub passed: usize,
    /// Executions that were skipped
    pub ignored: usize,
    /// Descriptions of executions that failed, in evaluation order
    pub failed: Vec<String>,
    /// Executions never evaluated because the run stopped early
    pub skipped_after_failure: usize,
}

impl RunSummary {
    /// Number of executions evaluated
    #[must_use]
    pub fn evaluated(&self) -> usize {
        self.passed + self.ignored + self.failed.len()
    }

    /// Whether no execution failed
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Evaluates a set of executions against one class model
#[derive(Debug, Clone, Copy, Default)]
pub struct ArchTestRunner {
    settings: RunnerSettings,
}

impl ArchTestRunner {
    /// Runner with the given settings
    #[must_use]
    pub const fn new(settings: RunnerSettings) -> Self {
        Self { settings }
    }

    /// Evaluate every execution and report each outcome to `sink`
    ///
    /// Check failures are part of the summary. A sink error aborts the run
    /// and is returned unchanged.
    pub fn run(
        &self,
        executions: &[Box<dyn ArchTestExecution>],
        classes: &ClassModel,
        sink: &dyn ReportSink,
    ) -> anyhow::Result<RunSummary> {
        log::debug!("Running {} executions against {} classes", executions.len(), classes.len());
        let mut summary = RunSummary::default();

        for (index, execution) in executions.iter().enumerate() {
            let outcome = execution.evaluate(classes);
            match outcome.kind() {
                OutcomeKind::Passed => summary.passed += 1,
                OutcomeKind::Ignored => summary.ignored += 1,
                OutcomeKind::Failed => summary.failed.push(outcome.description().to_string()),
            }
            let failed = outcome.is_failed();
            outcome.report(sink)?;

            if failed && self.settings.fail_fast {
                summary.skipped_after_failure = executions.len() - index - 1;
                log::warn!(
                    "Stopping after first failure, {} executions not evaluated",
                    summary.skipped_after_failure
                );
                break;
            }
        }

        log::info!(
            "{} passed, {} ignored, {} failed",
            summary.passed,
            summary.ignored,
            summary.failed.len()
        );
        Ok(summary)
    }
}
