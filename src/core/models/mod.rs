//! Domain models for archcheck
//!
//! Pure data structures with no I/O dependencies beyond loading a class model.
//!
//! - [`TestGroup`] / [`Description`] - Who owns an execution and how it is named
//! - [`Markers`] - Typed, annotation-like metadata such as [`Ignore`]
//! - [`CheckMember`] - A member declaration proven to be public and static
//! - [`Outcome`] - Passed, ignored or failed
//! - [`ClassModel`] - The read-only snapshot every check runs against

mod class_model;
mod description;
mod marker;
mod member;
mod outcome;

pub use class_model::{ClassInfo, ClassModel, ClassModelError};
pub use description::{Description, TestGroup};
pub use marker::{ArchTest, Ignore, Marker, Markers};
pub use member::{CheckMember, ConfigurationError, MemberDeclaration, MemberKind, Visibility};
pub use outcome::{Cause, Outcome, OutcomeKind};
