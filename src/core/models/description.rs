//! Test groups and execution descriptions
//!
//! A [`TestGroup`] is the owning descriptor of a set of executions (the
//! equivalent of a test class). A [`Description`] is the stable identity of
//! one execution, used for display and carried by every outcome.

use std::fmt;

use serde::{Serialize, Serializer};

use super::{Ignore, Markers};

/// Owning group of one or more executions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestGroup {
    name: String,
    markers: Markers,
}

impl TestGroup {
    /// Create a group without markers
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markers: Markers::new(),
        }
    }

    /// Create a group with markers
    pub fn with_markers(name: impl Into<String>, markers: Markers) -> Self {
        Self {
            name: name.into(),
            markers,
        }
    }

    /// Group name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Markers attached to the group
    #[must_use]
    pub const fn markers(&self) -> &Markers {
        &self.markers
    }

    /// The ignore marker of this group, if any
    #[must_use]
    pub fn ignore(&self) -> Option<&Ignore> {
        self.markers.get::<Ignore>()
    }
}

/// Identity of a single execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    group: String,
    name: String,
    markers: Markers,
}

impl Description {
    /// Describe execution `name` of `group`
    pub fn new(group: impl Into<String>, name: impl Into<String>, markers: Markers) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            markers,
        }
    }

    /// Name of the owning group
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Display name of the execution
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Markers of the execution itself
    #[must_use]
    pub const fn markers(&self) -> &Markers {
        &self.markers
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.group)
    }
}

impl Serialize for Description {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
