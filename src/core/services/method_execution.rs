//! Method execution - a check function declared as a method of a test group

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use super::execution::{ArchTestExecution, outcome_of, run_guarded};
use crate::core::models::{
    Cause, CheckMember, ClassModel, ConfigurationError, MemberDeclaration, MemberKind, Markers, Outcome,
    TestGroup,
};

/// Result of a check method; any error converts with `?`, `anyhow` included
pub type CheckResult = Result<(), Box<dyn Error + Send + Sync + 'static>>;

/// Shared check function
pub type CheckFn = Arc<dyn Fn(&ClassModel) -> CheckResult + Send + Sync>;

/// Executes a check method of a test group
pub struct MethodExecution {
    group: Arc<TestGroup>,
    member: CheckMember,
    markers: Markers,
    check: CheckFn,
}

impl MethodExecution {
    /// Bind `check`, declared by `method`, to `group`
    ///
    /// Fails if the method is not public and static.
    pub fn new<F>(
        group: Arc<TestGroup>,
        method: MemberDeclaration,
        check: F,
    ) -> Result<Self, ConfigurationError>
    where
        F: Fn(&ClassModel) -> CheckResult + Send + Sync + 'static,
    {
        let member = CheckMember::validate(method)?.require_kind(MemberKind::Method)?;
        Ok(Self {
            group,
            member,
            markers: Markers::new(),
            check: Arc::new(check),
        })
    }

    /// Attach markers to this execution
    #[must_use]
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// The validated method
    #[must_use]
    pub const fn member(&self) -> &CheckMember {
        &self.member
    }
}

impl fmt::Debug for MethodExecution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodExecution")
            .field("group", &self.group.name())
            .field("member", &self.member.name())
            .finish_non_exhaustive()
    }
}

impl ArchTestExecution for MethodExecution {
    fn group(&self) -> &TestGroup {
        &self.group
    }

    fn name(&self) -> &str {
        self.member.name()
    }

    fn markers(&self) -> &Markers {
        &self.markers
    }

    fn perform_check(&self, classes: &ClassModel) -> Outcome {
        let result = run_guarded(|| (self.check)(classes).map_err(|e| -> Cause { Arc::from(e) }));
        outcome_of(self.describe_self(), result)
    }
}
