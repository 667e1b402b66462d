//! archcheck - run architecture checks against a class model and report
//! their outcomes
//!
//! An execution is one named check bound to its owning test group. Evaluating
//! it against a [`ClassModel`](core::models::ClassModel) yields exactly one
//! [`Outcome`](core::models::Outcome): passed, ignored or failed. The outcome
//! then reports itself to a [`ReportSink`](core::ports::ReportSink).
//!
//! ```
//! use std::sync::Arc;
//!
//! use archcheck::adapters::CollectingSink;
//! use archcheck::core::models::{ClassInfo, ClassModel, MemberDeclaration, TestGroup};
//! use archcheck::core::ports::rule_fn;
//! use archcheck::core::services::{RuleExecution, evaluate};
//!
//! let group = Arc::new(TestGroup::new("LayerRules"));
//! let rule = rule_fn("classes have a package", |classes| {
//!     classes.iter().filter(|c| c.package.is_empty()).map(|c| c.name.clone()).collect()
//! });
//! let execution = RuleExecution::new(
//!     group,
//!     MemberDeclaration::field("LayerRules", "packaged"),
//!     Arc::new(rule),
//! )?;
//!
//! let classes = ClassModel::new(vec![ClassInfo::new("app.Main", "app")]);
//! let sink = CollectingSink::new();
//! evaluate(&execution, &classes).report(&sink)?;
//! assert_eq!(sink.len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
