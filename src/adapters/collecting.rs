//! In-memory reporting sink

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::models::{Cause, Description, OutcomeKind};
use crate::core::ports::ReportSink;

/// One call received by a [`CollectingSink`]
#[derive(Debug, Clone)]
pub enum SinkEvent {
    /// `finished` was called
    Finished(Description),
    /// `ignored` was called
    Ignored(Description),
    /// `failed` was called
    Failed(Description, Cause),
}

impl SinkEvent {
    /// Description the event was reported for
    #[must_use]
    pub const fn description(&self) -> &Description {
        match self {
            Self::Finished(d) | Self::Ignored(d) | Self::Failed(d, _) => d,
        }
    }

    /// Which outcome the event stands for
    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Finished(_) => OutcomeKind::Passed,
            Self::Ignored(_) => OutcomeKind::Ignored,
            Self::Failed(..) => OutcomeKind::Failed,
        }
    }
}

/// Sink that records every event in order
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl CollectingSink {
    /// An empty collector
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    #[must_use]
    pub fn events(&self) -> Vec<SinkEvent> {
        self.lock().clone()
    }

    /// Number of recorded events of `kind`
    #[must_use]
    pub fn count(&self, kind: OutcomeKind) -> usize {
        self.lock().iter().filter(|e| e.kind() == kind).count()
    }

    /// Number of recorded events
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock leaves the Vec intact, so keep using it
    fn lock(&self) -> MutexGuard<'_, Vec<SinkEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, event: SinkEvent) {
        self.lock().push(event);
    }
}

impl ReportSink for CollectingSink {
    fn finished(&self, description: &Description) -> anyhow::Result<()> {
        self.push(SinkEvent::Finished(description.clone()));
        Ok(())
    }

    fn ignored(&self, description: &Description) -> anyhow::Result<()> {
        self.push(SinkEvent::Ignored(description.clone()));
        Ok(())
    }

    fn failed(&self, description: &Description, cause: &Cause) -> anyhow::Result<()> {
        self.push(SinkEvent::Failed(description.clone(), cause.clone()));
        Ok(())
    }
}
