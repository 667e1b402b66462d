//! Tests for test executions
//!
//! Evaluating an execution yields exactly one outcome. A group-level ignore
//! marker short-circuits before the check runs.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use archcheck::adapters::CollectingSink;
use archcheck::core::models::{
    ArchTest, ClassModel, Ignore, Markers, MemberDeclaration, Outcome, OutcomeKind, TestGroup,
};
use archcheck::core::ports::{ArchRule, RuleViolation, rule_fn};
use archcheck::core::services::{ArchTestExecution, ArchTestRunner, RuleExecution, evaluate};

use crate::common::{CountingCheck, group, ignored_group, layered_model};

// =============================================================================
// Ignore short-circuit
// =============================================================================

#[test]
fn ignored_group_yields_ignored_without_running_check() {
    let check = CountingCheck::new(ignored_group("LayerRules"), "no_cycles", || {
        Err("would fail".into())
    });

    let outcome = check.evaluate();

    assert_eq!(outcome.kind(), OutcomeKind::Ignored);
    assert_eq!(outcome.description(), &check.execution.describe_self());
    assert_eq!(check.calls(), 0);
}

#[test]
fn ignored_group_stays_ignored_on_repeated_evaluation() {
    let check = CountingCheck::new(ignored_group("LayerRules"), "no_cycles", || Ok(()));

    for _ in 0..3 {
        assert!(check.evaluate().is_ignored());
    }
    assert_eq!(check.calls(), 0);
}

#[test]
fn ignore_marker_on_execution_alone_does_not_skip() {
    let check = CountingCheck::new(group("LayerRules"), "no_cycles", || Ok(()));
    let execution = check.execution.with_markers(Markers::new().with(Ignore::default()));

    assert!(evaluate(&execution, &layered_model()).is_passed());
    assert!(execution.markers().get::<Ignore>().is_some());
}

/// An implementor outside the crate, counting each check it runs
struct EagerExecution {
    group: TestGroup,
    markers: Markers,
    calls: AtomicUsize,
}

impl EagerExecution {
    fn in_group(group: TestGroup) -> Self {
        Self {
            group,
            markers: Markers::new(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl ArchTestExecution for EagerExecution {
    fn group(&self) -> &TestGroup {
        &self.group
    }

    fn name(&self) -> &str {
        "eager"
    }

    fn markers(&self) -> &Markers {
        &self.markers
    }

    fn perform_check(&self, _classes: &ClassModel) -> Outcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Outcome::passed(self.describe_self())
    }
}

#[test]
fn ignored_group_is_enforced_for_any_implementor() {
    let ignored = || TestGroup::with_markers("Legacy", Markers::new().with(Ignore::because("migrating")));

    let execution = EagerExecution::in_group(ignored());
    assert!(evaluate(&execution, &layered_model()).is_ignored());
    assert_eq!(execution.calls.load(Ordering::SeqCst), 0);

    let boxed: Box<dyn ArchTestExecution> = Box::new(EagerExecution::in_group(ignored()));
    assert!(boxed.evaluate(&layered_model()).is_ignored());

    let sink = CollectingSink::new();
    let summary = ArchTestRunner::default().run(&[boxed], &layered_model(), &sink).unwrap();
    assert_eq!(summary.ignored, 1);
    assert_eq!(sink.count(OutcomeKind::Ignored), 1);
}

// =============================================================================
// Markers
// =============================================================================

#[test]
fn boxed_execution_looks_up_markers_by_type() {
    let check = CountingCheck::new(group("LayerRules"), "no_cycles", || Ok(()));
    let markers = Markers::new().with(ArchTest).with(Ignore::because("flaky on CI"));
    let execution: Box<dyn ArchTestExecution> = Box::new(check.execution.with_markers(markers));

    assert_eq!(execution.marker::<ArchTest>(), Some(&ArchTest));
    assert_eq!(execution.marker::<Ignore>().and_then(|i| i.reason.as_deref()), Some("flaky on CI"));
    assert!(execution.evaluate(&layered_model()).is_passed());
}

#[test]
fn missing_marker_is_none_on_boxed_execution() {
    let check = CountingCheck::new(group("LayerRules"), "no_cycles", || Ok(()));
    let execution: Box<dyn ArchTestExecution> = Box::new(check.execution);

    assert!(execution.marker::<ArchTest>().is_none());
    assert!(execution.marker::<Ignore>().is_none());
}

// =============================================================================
// Pass / fail
// =============================================================================

#[test]
fn passing_check_yields_passed_and_runs_once() {
    let check = CountingCheck::new(group("LayerRules"), "no_cycles", || Ok(()));

    let outcome = check.evaluate();

    assert!(outcome.is_passed());
    assert_eq!(outcome.description().to_string(), "no_cycles(LayerRules)");
    assert_eq!(check.calls(), 1);
}

#[test]
fn failing_check_yields_failed_with_cause() {
    let check = CountingCheck::new(group("LayerRules"), "no_cycles", || {
        Err(RuleViolation::new("no cycles", vec!["a -> b -> a".into()]).into())
    });

    let outcome = check.evaluate();

    assert!(outcome.is_failed());
    let violation = outcome.cause().and_then(|c| c.downcast_ref::<RuleViolation>()).unwrap();
    assert_eq!(violation.rule, "no cycles");
    assert_eq!(check.calls(), 1);
}

#[test]
fn anyhow_errors_are_captured() {
    let check = CountingCheck::new(group("LayerRules"), "from_anyhow", || {
        Err(anyhow::anyhow!("class model incomplete").into())
    });

    let outcome = check.evaluate();
    assert_eq!(outcome.cause().map(ToString::to_string).as_deref(), Some("class model incomplete"));
}

#[test]
fn rule_execution_checks_the_given_model() {
    let rule = rule_fn("web classes only depend on core", |classes| {
        classes
            .in_package("app.web")
            .flat_map(|c| c.dependencies.iter().filter(|d| !d.starts_with("app.core.")))
            .cloned()
            .collect()
    });
    let execution = RuleExecution::new(
        group("LayerRules"),
        MemberDeclaration::field("LayerRules", "web_depends_on_core"),
        Arc::new(rule),
    )
    .unwrap();

    assert!(evaluate(&execution, &layered_model()).is_passed());
    assert_eq!(execution.rule().description(), "web classes only depend on core");
}

#[test]
fn empty_model_is_passed_through() {
    let rule = rule_fn("model is not empty", |classes| {
        if classes.is_empty() { vec!["no classes".to_string()] } else { vec![] }
    });
    let execution = RuleExecution::new(
        group("Sanity"),
        MemberDeclaration::field("Sanity", "not_empty"),
        Arc::new(rule),
    )
    .unwrap();

    assert!(evaluate(&execution, &ClassModel::default()).is_failed());
    assert!(evaluate(&execution, &layered_model()).is_passed());
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn identity_is_stable() {
    let check = CountingCheck::new(group("LayerRules"), "no_cycles", || Ok(()));
    let execution: &dyn ArchTestExecution = &check.execution;

    assert_eq!(execution.describe_self(), execution.describe_self());
    assert_eq!(execution.name(), execution.name());
    assert_eq!(execution.to_string(), "no_cycles(LayerRules)");
    assert_eq!(check.calls(), 0);
}

#[test]
fn executions_share_model_across_threads() {
    let model = Arc::new(layered_model());
    let checks: Vec<_> = (0..4)
        .map(|i| CountingCheck::new(group("Parallel"), &format!("check_{i}"), || Ok(())))
        .collect();

    std::thread::scope(|scope| {
        for check in &checks {
            let model = Arc::clone(&model);
            scope.spawn(move || assert!(evaluate(&check.execution, &model).is_passed()));
        }
    });

    assert!(checks.iter().all(|c| c.calls() == 1));
}
