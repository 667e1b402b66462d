//! Reporting sink backed by the `log` facade

use crate::core::models::{Cause, Description};
use crate::core::ports::ReportSink;

/// Logs passed executions at info, ignored at warn, failed at error
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn finished(&self, description: &Description) -> anyhow::Result<()> {
        log::info!("PASSED {description}");
        Ok(())
    }

    fn ignored(&self, description: &Description) -> anyhow::Result<()> {
        log::warn!("IGNORED {description}");
        Ok(())
    }

    fn failed(&self, description: &Description, cause: &Cause) -> anyhow::Result<()> {
        log::error!("FAILED {description}: {cause}");
        Ok(())
    }
}
