//! Rule execution - a rule held by a field member

use std::sync::Arc;

use super::execution::{ArchTestExecution, outcome_of, run_guarded};
use crate::core::models::{
    Cause, CheckMember, ClassModel, ConfigurationError, MemberDeclaration, MemberKind, Markers, Outcome,
    TestGroup,
};
use crate::core::ports::ArchRule;

/// Executes a single [`ArchRule`] declared as a field of a test group
pub struct RuleExecution {
    group: Arc<TestGroup>,
    member: CheckMember,
    markers: Markers,
    rule: Arc<dyn ArchRule>,
}

impl RuleExecution {
    /// Bind `rule`, declared by `field`, to `group`
    ///
    /// Fails if the field is not public and static.
    pub fn new(
        group: Arc<TestGroup>,
        field: MemberDeclaration,
        rule: Arc<dyn ArchRule>,
    ) -> Result<Self, ConfigurationError> {
        let member = CheckMember::validate(field)?.require_kind(MemberKind::Field)?;
        Ok(Self {
            group,
            member,
            markers: Markers::new(),
            rule,
        })
    }

    /// Attach markers to this execution
    #[must_use]
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// The validated field
    #[must_use]
    pub const fn member(&self) -> &CheckMember {
        &self.member
    }

    /// The rule being checked
    #[must_use]
    pub fn rule(&self) -> &dyn ArchRule {
        self.rule.as_ref()
    }
}

impl std::fmt::Debug for RuleExecution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleExecution")
            .field("group", &self.group.name())
            .field("member", &self.member.name())
            .field("rule", &self.rule.description())
            .finish()
    }
}

impl ArchTestExecution for RuleExecution {
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
        let result = run_guarded(|| self.rule.check(classes).map_err(|v| -> Cause { Arc::new(v) }));
        outcome_of(self.describe_self(), result)
    }
}
