//! Outcome of evaluating one execution
//!
//! Exactly one [`Outcome`] is produced per evaluation. It knows which sink
//! operation it maps to, so sinks never branch on the outcome kind.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::Description;
use crate::core::ports::ReportSink;

/// Captured failure cause, shared so its identity survives reporting
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// Closed set of evaluation results
///
/// Not `Clone`: an outcome is reported at most once.
///
/// ```compile_fail
/// use archcheck::adapters::CollectingSink;
/// use archcheck::core::models::{Description, Markers, Outcome};
///
/// let outcome = Outcome::passed(Description::new("LayerRules", "no_cycles", Markers::new()));
/// let sink = CollectingSink::new();
/// outcome.clone().report(&sink).unwrap();
/// outcome.report(&sink).unwrap();
/// ```
#[derive(Debug)]
pub enum Outcome {
    /// The check ran and found no violation
    Passed {
        /// Execution that passed
        description: Description,
    },
    /// The check was skipped and never ran
    Ignored {
        /// Execution that was skipped
        description: Description,
    },
    /// The check ran and failed
    Failed {
        /// Execution that failed
        description: Description,
        /// Error produced by the check
        cause: Cause,
    },
}

/// Kind of an outcome, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    /// See [`Outcome::Passed`]
    Passed,
    /// See [`Outcome::Ignored`]
    Ignored,
    /// See [`Outcome::Failed`]
    Failed,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => write!(f, "passed"),
            Self::Ignored => write!(f, "ignored"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

impl Outcome {
    /// A passing outcome
    #[must_use]
    pub const fn passed(description: Description) -> Self {
        Self::Passed { description }
    }

    /// A skipped outcome
    #[must_use]
    pub const fn ignored(description: Description) -> Self {
        Self::Ignored { description }
    }

    /// A failed outcome carrying `cause`
    #[must_use]
    pub const fn failed(description: Description, cause: Cause) -> Self {
        Self::Failed { description, cause }
    }

    /// Deliver this outcome to `sink`
    ///
    /// Triggers exactly one sink call. Errors raised by the sink are
    /// returned as-is.
    pub fn report(self, sink: &dyn ReportSink) -> anyhow::Result<()> {
        match self {
            Self::Passed { description } => sink.finished(&description),
            Self::Ignored { description } => sink.ignored(&description),
            Self::Failed { description, cause } => sink.failed(&description, &cause),
        }
    }

    /// Description of the evaluated execution
    #[must_use]
    pub const fn description(&self) -> &Description {
        match self {
            Self::Passed { description }
            | Self::Ignored { description }
            | Self::Failed { description, .. } => description,
        }
    }

    /// Failure cause, for failed outcomes
    #[must_use]
    pub const fn cause(&self) -> Option<&Cause> {
        match self {
            Self::Failed { cause, .. } => Some(cause),
            Self::Passed { .. } | Self::Ignored { .. } => None,
        }
    }

    /// Kind of this outcome
    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Passed { .. } => OutcomeKind::Passed,
            Self::Ignored { .. } => OutcomeKind::Ignored,
            Self::Failed { .. } => OutcomeKind::Failed,
        }
    }

    /// Whether the check passed
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    /// Whether the check was skipped
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored { .. })
    }

    /// Whether the check failed
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
