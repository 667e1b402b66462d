//! Test execution - one runnable architecture check
//!
//! An execution is bound to its owning [`TestGroup`] and knows how to check
//! a [`ClassModel`]. The ignore short-circuit lives in [`evaluate`], outside
//! the trait, so no implementor can replace it.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use thiserror::Error;

use crate::core::models::{Cause, ClassModel, Description, Marker, Markers, Outcome, TestGroup};

/// A runnable architecture check
///
/// Implementors supply identity and [`perform_check`](Self::perform_check).
/// Run an execution through [`evaluate`], never by calling `perform_check`
/// directly.
pub trait ArchTestExecution: Send + Sync {
    /// Owning group descriptor
    fn group(&self) -> &TestGroup;

    /// Display name of this execution
    fn name(&self) -> &str;

    /// Markers attached to this execution
    fn markers(&self) -> &Markers;

    /// Run the check itself, translating a violation into a failed outcome
    ///
    /// Called by [`evaluate`] at most once per evaluation.
    fn perform_check(&self, classes: &ClassModel) -> Outcome;

    /// Stable identity used for display and in every outcome
    fn describe_self(&self) -> Description {
        Description::new(self.group().name(), self.name(), self.markers().clone())
    }
}

/// Evaluate `execution` against `classes`
///
/// If the owning group carries an [`Ignore`](crate::core::models::Ignore)
/// marker the check never runs and the outcome is `Ignored`. Only the group
/// is consulted; an ignore marker on the execution itself has no effect here.
pub fn evaluate<E>(execution: &E, classes: &ClassModel) -> Outcome
where
    E: ArchTestExecution + ?Sized,
{
    if let Some(ignore) = execution.group().ignore() {
        log::debug!(
            "Skipping {} ({})",
            execution.describe_self(),
            ignore.reason.as_deref().unwrap_or("group ignored")
        );
        return Outcome::ignored(execution.describe_self());
    }
    log::debug!("Evaluating {} against {} classes", execution.describe_self(), classes.len());
    execution.perform_check(classes)
}

impl dyn ArchTestExecution + '_ {
    /// Evaluate this execution against `classes`, see [`evaluate`]
    #[must_use]
    pub fn evaluate(&self, classes: &ClassModel) -> Outcome {
        evaluate(self, classes)
    }

    /// Look up a marker of this execution by type
    #[must_use]
    pub fn marker<M: Marker>(&self) -> Option<&M> {
        self.markers().get::<M>()
    }
}

impl fmt::Display for dyn ArchTestExecution + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe_self())
    }
}

impl fmt::Debug for dyn ArchTestExecution + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArchTestExecution").field("description", &self.describe_self()).finish()
    }
}

/// A check panicked instead of returning
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("check panicked: {message}")]
pub struct CheckPanicked {
    /// Panic payload rendered as text
    pub message: String,
}

impl CheckPanicked {
    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        Self { message }
    }
}

/// Run `check`, turning a panic into a failure cause
pub(crate) fn run_guarded<F>(check: F) -> Result<(), Cause>
where
    F: FnOnce() -> Result<(), Cause>,
{
    panic::catch_unwind(AssertUnwindSafe(check))
        .unwrap_or_else(|payload| Err(Arc::new(CheckPanicked::from_payload(payload.as_ref()))))
}

/// Build the outcome for a check result
pub(crate) fn outcome_of(description: Description, result: Result<(), Cause>) -> Outcome {
    match result {
        Ok(()) => Outcome::passed(description),
        Err(cause) => {
            log::debug!("{description} failed: {cause}");
            Outcome::failed(description, cause)
        },
    }
}
