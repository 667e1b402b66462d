//! Tests for the check-member guard
//!
//! Only public, static members may become executions.

use archcheck::core::models::{
    CheckMember, ConfigurationError, MemberDeclaration, MemberKind, Visibility,
};
use archcheck::core::services::{MethodExecution, RuleExecution};
use test_case::test_case;

use crate::common::group;

#[test_case(MemberKind::Field ; "field")]
#[test_case(MemberKind::Method ; "method")]
fn public_static_member_is_returned_unchanged(kind: MemberKind) {
    let decl = match kind {
        MemberKind::Field => MemberDeclaration::field("LayerRules", "rule"),
        MemberKind::Method => MemberDeclaration::method("LayerRules", "rule"),
    };

    let member = CheckMember::validate(decl.clone()).unwrap();

    assert_eq!(member.declaration(), &decl);
    assert_eq!(member.name(), "rule");
}

#[test_case(Visibility::Private, true ; "private static")]
#[test_case(Visibility::Protected, true ; "protected static")]
#[test_case(Visibility::PackagePrivate, true ; "package private static")]
#[test_case(Visibility::Public, false ; "public instance")]
#[test_case(Visibility::Private, false ; "private instance")]
fn other_members_are_rejected(visibility: Visibility, is_static: bool) {
    let mut decl = MemberDeclaration::field("LayerRules", "rule").with_visibility(visibility);
    decl.is_static = is_static;

    let err = CheckMember::validate(decl.clone()).unwrap_err();

    assert_eq!(err, ConfigurationError::NotPublicStatic { member: decl });
    assert!(err.to_string().starts_with("With @ArchTest annotated members must be public and static"));
}

#[test]
fn rejection_happens_at_construction() {
    let result = MethodExecution::new(
        group("LayerRules"),
        MemberDeclaration::method("LayerRules", "check").with_visibility(Visibility::Private),
        |_| -> archcheck::core::services::CheckResult { panic!("never evaluated") },
    );
    assert!(matches!(result, Err(ConfigurationError::NotPublicStatic { .. })));
}

#[test]
fn rule_execution_requires_field() {
    let rule = archcheck::core::ports::rule_fn("anything", |_| Vec::new());
    let err = RuleExecution::new(
        group("LayerRules"),
        MemberDeclaration::method("LayerRules", "check"),
        std::sync::Arc::new(rule),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ConfigurationError::WrongKind {
            expected: MemberKind::Field,
            found: MemberKind::Method,
            ..
        }
    ));
}

#[test]
fn display_names_visibility_and_static() {
    let decl = MemberDeclaration::method("LayerRules", "check")
        .with_visibility(Visibility::Protected)
        .non_static();
    assert_eq!(decl.to_string(), "protected LayerRules.check");
    assert_eq!(MemberDeclaration::field("A", "b").to_string(), "public static A.b");
}
