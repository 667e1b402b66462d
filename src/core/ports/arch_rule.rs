//! Architecture rule port
//!
//! What a rule means is up to the rule. Executions only need to ask it to
//! check a class model and receive a violation report back.

use std::fmt;

use super::super::models::ClassModel;

/// A rule was violated by the class model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleViolation {
    /// Description of the violated rule
    pub rule: String,
    /// One message per violating element
    pub violations: Vec<String>,
}

impl RuleViolation {
    /// Violation of `rule` with the given messages
    pub fn new(rule: impl Into<String>, violations: Vec<String>) -> Self {
        Self {
            rule: rule.into(),
            violations,
        }
    }
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Architecture Violation - Rule '{}' was violated ({} times):",
            self.rule,
            self.violations.len()
        )?;
        for violation in &self.violations {
            write!(f, "\n{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for RuleViolation {}

/// A check over the class model
pub trait ArchRule: Send + Sync {
    /// Human-readable rule text
    fn description(&self) -> String;

    /// Check the model, reporting every violation
    fn check(&self, classes: &ClassModel) -> Result<(), RuleViolation>;
}

/// Rule backed by a closure returning violation messages
pub struct FnRule<F> {
    description: String,
    f: F,
}

impl<F> fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule").field("description", &self.description).finish_non_exhaustive()
    }
}

impl<F> ArchRule for FnRule<F>
where
    F: Fn(&ClassModel) -> Vec<String> + Send + Sync,
{
    fn description(&self) -> String {
        self.description.clone()
    }

    fn check(&self, classes: &ClassModel) -> Result<(), RuleViolation> {
        let violations = (self.f)(classes);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(RuleViolation::new(self.description.clone(), violations))
        }
    }
}

/// Build a rule from a closure that lists violations
///
/// An empty list means the rule holds.
pub fn rule_fn<F>(description: impl Into<String>, f: F) -> FnRule<F>
where
    F: Fn(&ClassModel) -> Vec<String> + Send + Sync,
{
    FnRule {
        description: description.into(),
        f,
    }
}
