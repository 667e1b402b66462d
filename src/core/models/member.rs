//! Member declarations and the check-member guard
//!
//! Only public, static members may become executions. [`CheckMember`] can
//! only be obtained through [`CheckMember::validate`], so holding one is
//! proof the guard ran.

use std::fmt;

use thiserror::Error;

use super::ArchTest;

/// Declared visibility of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Visible everywhere
    Public,
    /// Visible to subtypes
    Protected,
    /// Visible within the declaring package
    PackagePrivate,
    /// Visible within the declaring type
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Protected => write!(f, "protected"),
            Self::PackagePrivate => write!(f, "package-private"),
            Self::Private => write!(f, "private"),
        }
    }
}

/// Kind of declared member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// A field holding a rule
    Field,
    /// A method taking the class model
    Method,
}

/// A declared field or method that may hold a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDeclaration {
    /// Declaring type
    pub owner: String,
    /// Member name
    pub name: String,
    /// Field or method
    pub kind: MemberKind,
    /// Declared visibility
    pub visibility: Visibility,
    /// Whether the member is static
    pub is_static: bool,
}

impl MemberDeclaration {
    /// Public static field
    pub fn field(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            kind: MemberKind::Field,
            visibility: Visibility::Public,
            is_static: true,
        }
    }

    /// Public static method
    pub fn method(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: MemberKind::Method,
            ..Self::field(owner, name)
        }
    }

    /// Same member with a different visibility
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Same member, declared non-static
    #[must_use]
    pub fn non_static(mut self) -> Self {
        self.is_static = false;
        self
    }
}

impl fmt::Display for MemberDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.visibility)?;
        if self.is_static {
            write!(f, "static ")?;
        }
        write!(f, "{}.{}", self.owner, self.name)
    }
}

/// Setup-time error raised when a declaration cannot become a check
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The member is not both public and static
    #[error(
        "With @{marker} annotated members must be public and static (found {member})",
        marker = ArchTest::NAME
    )]
    NotPublicStatic {
        /// The rejected member
        member: MemberDeclaration,
    },

    /// A field was offered where a method is required, or vice versa
    #[error("member {member} is a {found:?}, expected a {expected:?}")]
    WrongKind {
        /// The rejected member
        member: MemberDeclaration,
        /// Kind required by the execution
        expected: MemberKind,
        /// Kind actually declared
        found: MemberKind,
    },
}

/// A member that passed the public-and-static guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckMember(MemberDeclaration);

impl CheckMember {
    /// Validate a candidate member
    ///
    /// Returns the same declaration, unchanged, wrapped as a `CheckMember`.
    pub fn validate(member: MemberDeclaration) -> Result<Self, ConfigurationError> {
        if member.visibility == Visibility::Public && member.is_static {
            Ok(Self(member))
        } else {
            Err(ConfigurationError::NotPublicStatic { member })
        }
    }

    /// The validated declaration
    #[must_use]
    pub const fn declaration(&self) -> &MemberDeclaration {
        &self.0
    }

    /// Member name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Unwrap the declaration
    #[must_use]
    pub fn into_inner(self) -> MemberDeclaration {
        self.0
    }

    pub(crate) fn require_kind(self, expected: MemberKind) -> Result<Self, ConfigurationError> {
        if self.0.kind == expected {
            Ok(self)
        } else {
            let found = self.0.kind;
            Err(ConfigurationError::WrongKind {
                member: self.0,
                expected,
                found,
            })
        }
    }
}
