//! Marker metadata
//!
//! Markers are annotation-like values attached to test groups and
//! executions. They are looked up by their Rust type, so every marker kind
//! is simply a type implementing [`Marker`].

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A piece of metadata that can be attached to a group or execution
pub trait Marker: Any + fmt::Debug + Send + Sync {}

/// Skip every execution of the group carrying this marker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ignore {
    /// Optional human-readable reason, shown by reporters
    pub reason: Option<String>,
}

impl Ignore {
    /// Ignore marker with a reason
    #[must_use]
    pub fn because(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }
}

impl Marker for Ignore {}

/// Marks a member for inclusion as an architecture check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchTest;

impl ArchTest {
    /// Display name used in configuration messages
    pub const NAME: &'static str = "ArchTest";
}

impl Marker for ArchTest {}

#[derive(Clone)]
struct Entry {
    value: Arc<dyn Any + Send + Sync>,
    rendered: String,
}

/// Immutable set of markers, at most one per marker type
#[derive(Clone, Default)]
pub struct Markers {
    entries: HashMap<TypeId, Entry>,
}

impl Markers {
    /// An empty marker set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this set with `marker` added (replacing one of the same type)
    #[must_use]
    pub fn with<M: Marker>(mut self, marker: M) -> Self {
        let rendered = format!("{marker:?}");
        self.entries.insert(
            TypeId::of::<M>(),
            Entry {
                value: Arc::new(marker),
                rendered,
            },
        );
        self
    }

    /// Look up the marker of type `M`
    #[must_use]
    pub fn get<M: Marker>(&self) -> Option<&M> {
        self.entries.get(&TypeId::of::<M>()).and_then(|e| e.value.downcast_ref::<M>())
    }

    /// Whether a marker of type `M` is present
    #[must_use]
    pub fn contains<M: Marker>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<M>())
    }

    /// Number of markers
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn rendered(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.values().map(|e| e.rendered.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Markers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rendered()).finish()
    }
}

// Compared per type by rendered value: marker types carry no equality bound
impl PartialEq for Markers {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(id, entry)| other.entries.get(id).is_some_and(|o| o.rendered == entry.rendered))
    }
}

impl Eq for Markers {}
