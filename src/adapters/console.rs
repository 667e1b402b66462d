//! Console reporting sink
//!
//! Writes one line per event. Human mode prints a status tag, JSON mode one
//! object per line. Built from the `[output]` configuration section.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use colored::Colorize;

use crate::config::OutputSettings;
use crate::core::models::{Cause, Description, OutcomeKind};
use crate::core::ports::ReportSink;
use crate::core::services::RunSummary;
use crate::output::{OutcomeLine, OutputMode, RunReport};

/// Sink writing reported outcomes to a writer
#[derive(Debug)]
pub struct ConsoleSink<W> {
    out: Mutex<W>,
    mode: OutputMode,
    color: bool,
}

impl ConsoleSink<io::Stdout> {
    /// Sink writing to standard output as configured by `settings`
    #[must_use]
    pub fn stdout(settings: &OutputSettings) -> Self {
        Self::from_settings(io::stdout(), settings)
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    /// Sink writing to `out`
    pub fn new(out: W, mode: OutputMode, color: bool) -> Self {
        Self {
            out: Mutex::new(out),
            mode,
            color,
        }
    }

    /// Sink writing to `out` as configured by `settings`
    #[must_use]
    pub fn from_settings(out: W, settings: &OutputSettings) -> Self {
        Self::new(out, settings.mode, settings.color)
    }

    /// Output mode of this sink
    #[must_use]
    pub const fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write the summary of a finished run after the reported events
    pub fn summarize(&self, summary: &RunSummary) -> anyhow::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        RunReport::from(summary).write_to(&mut *out, self.mode)?;
        Ok(())
    }

    /// Consume the sink and return the writer
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn tag(&self, kind: OutcomeKind) -> String {
        let tag = match kind {
            OutcomeKind::Passed => "PASSED ",
            OutcomeKind::Ignored => "IGNORED",
            OutcomeKind::Failed => "FAILED ",
        };
        if !self.color {
            return tag.to_string();
        }
        match kind {
            OutcomeKind::Passed => tag.green().to_string(),
            OutcomeKind::Ignored => tag.yellow().to_string(),
            OutcomeKind::Failed => tag.red().bold().to_string(),
        }
    }

    fn write_event(
        &self,
        kind: OutcomeKind,
        description: &Description,
        cause: Option<&Cause>,
    ) -> anyhow::Result<()> {
        let line = match self.mode {
            OutputMode::Human => {
                let mut line = format!("{} {description}", self.tag(kind));
                if let Some(cause) = cause {
                    for cause_line in cause.to_string().lines() {
                        line.push_str(&format!("\n        {cause_line}"));
                    }
                }
                line
            },
            OutputMode::Json => serde_json::to_string(&OutcomeLine::new(
                kind,
                description,
                cause.map(ToString::to_string),
            ))?,
        };

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> ReportSink for ConsoleSink<W> {
    fn finished(&self, description: &Description) -> anyhow::Result<()> {
        self.write_event(OutcomeKind::Passed, description, None)
    }

    fn ignored(&self, description: &Description) -> anyhow::Result<()> {
        self.write_event(OutcomeKind::Ignored, description, None)
    }

    fn failed(&self, description: &Description, cause: &Cause) -> anyhow::Result<()> {
        self.write_event(OutcomeKind::Failed, description, Some(cause))
    }
}
