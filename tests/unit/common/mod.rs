//! Shared test fixtures and helpers
//!
//! This module provides common executions and class models for testing
//! archcheck components.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use archcheck::core::models::{
    ClassInfo, ClassModel, Ignore, Markers, MemberDeclaration, Outcome, TestGroup,
};
use archcheck::core::services::{CheckResult, MethodExecution, evaluate};

/// A small layered model:
/// ```text
/// app.web.Controller  -> app.core.Service
/// app.core.Service    -> app.core.Repository
/// app.core.Repository
/// ```
pub fn layered_model() -> ClassModel {
    ClassModel::new(vec![
        ClassInfo::new("app.web.Controller", "app.web").depends_on("app.core.Service"),
        ClassInfo::new("app.core.Service", "app.core").depends_on("app.core.Repository"),
        ClassInfo::new("app.core.Repository", "app.core"),
    ])
}

/// Group without markers
pub fn group(name: &str) -> Arc<TestGroup> {
    Arc::new(TestGroup::new(name))
}

/// Group carrying the ignore marker
pub fn ignored_group(name: &str) -> Arc<TestGroup> {
    Arc::new(TestGroup::with_markers(name, Markers::new().with(Ignore::because("under review"))))
}

/// Method execution whose check counts its invocations
pub struct CountingCheck {
    pub execution: MethodExecution,
    pub calls: Arc<AtomicUsize>,
}

impl CountingCheck {
    /// Check named `name` in `group` producing `result` each time
    pub fn new<F>(group: Arc<TestGroup>, name: &str, result: F) -> Self
    where
        F: Fn() -> CheckResult + Send + Sync + 'static,
    {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let owner = group.name().to_string();
        let execution = MethodExecution::new(group, MemberDeclaration::method(owner, name), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            result()
        })
        .expect("public static method");
        Self { execution, calls }
    }

    /// Number of times the check ran
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Evaluate against the layered model
    pub fn evaluate(&self) -> Outcome {
        evaluate(&self.execution, &layered_model())
    }
}
