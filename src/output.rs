//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::core::models::{Description, OutcomeKind};
use crate::core::services::RunSummary;

/// Output mode for reporters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

impl std::str::FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output mode: {s}. Use: human, json")),
        }
    }
}

/// One reported outcome, as written by the console sink in JSON mode
#[derive(Debug, Serialize)]
pub struct OutcomeLine<'a> {
    /// passed, ignored or failed
    pub status: OutcomeKind,
    /// Owning group
    pub group: &'a str,
    /// Execution name
    pub name: &'a str,
    /// Failure cause, rendered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl<'a> OutcomeLine<'a> {
    /// Line for `description` with `status`
    #[must_use]
    pub fn new(status: OutcomeKind, description: &'a Description, cause: Option<String>) -> Self {
        Self {
            status,
            group: description.group(),
            name: description.name(),
            cause,
        }
    }
}

/// Result of a whole run
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Whether no execution failed
    pub success: bool,
    /// Executions that passed
    pub passed: usize,
    /// Executions that were skipped
    pub ignored: usize,
    /// Failed executions
    pub failed: Vec<String>,
    /// Executions not evaluated because of fail-fast
    #[serde(skip_serializing_if = "is_zero")]
    pub not_evaluated: usize,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl From<&RunSummary> for RunReport {
    fn from(summary: &RunSummary) -> Self {
        Self {
            success: summary.is_success(),
            passed: summary.passed,
            ignored: summary.ignored,
            failed: summary.failed.clone(),
            not_evaluated: summary.skipped_after_failure,
        }
    }
}

impl RunReport {
    /// Render the report to standard output based on output mode
    pub fn render(&self, mode: OutputMode) {
        if let Err(err) = self.write_to(&mut io::stdout().lock(), mode) {
            log::warn!("Failed to write run report: {err}");
        }
    }

    /// Write the report to `out`
    ///
    /// JSON mode writes a single line, so it can follow the JSON lines of a
    /// console sink on the same stream.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W, mode: OutputMode) -> io::Result<()> {
        match mode {
            OutputMode::Human => writeln!(out, "{}", self.human_text())?,
            OutputMode::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)?;
            },
        }
        out.flush()
    }

    /// Human-readable rendering
    #[must_use]
    pub fn human_text(&self) -> String {
        let total = self.passed + self.ignored + self.failed.len();
        if total == 0 {
            return "No architecture checks to run.".to_string();
        }

        let mut text = format!(
            "{total} check(s): {} passed, {} ignored, {} failed",
            self.passed,
            self.ignored,
            self.failed.len()
        );
        if !self.failed.is_empty() {
            text.push_str("\n\nFailed:");
            for name in &self.failed {
                text.push_str(&format!("\n  {name}"));
            }
        }
        if self.not_evaluated > 0 {
            text.push_str(&format!("\n\nStopped early: {} check(s) not evaluated", self.not_evaluated));
        }
        text
    }
}
