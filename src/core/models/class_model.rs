//! Class model
//!
//! A read-only snapshot of the classes under test. How it gets built is not
//! this crate's business; checks only read it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading a class model
#[derive(Error, Debug)]
pub enum ClassModelError {
    /// The model file could not be read
    #[error("failed to read class model {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The model is not valid JSON
    #[error("invalid class model: {0}")]
    Json(#[from] serde_json::Error),
}

/// One class of the codebase under test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    /// Fully qualified name
    pub name: String,
    /// Package (or module path) the class lives in
    #[serde(default)]
    pub package: String,
    /// Fully qualified names of classes this class depends on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

impl ClassInfo {
    /// Create a class in `package`
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            dependencies: Vec::new(),
        }
    }

    /// Add a dependency
    #[must_use]
    pub fn depends_on(mut self, name: impl Into<String>) -> Self {
        self.dependencies.push(name.into());
        self
    }
}

/// Immutable snapshot of the classes under test
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassModel {
    classes: Vec<ClassInfo>,
}

impl ClassModel {
    /// Build a model from classes
    #[must_use]
    pub fn new(classes: Vec<ClassInfo>) -> Self {
        Self { classes }
    }

    /// Parse a model from a JSON array of classes
    pub fn from_json(content: &str) -> Result<Self, ClassModelError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a model from a JSON file
    pub fn load(path: &Path) -> Result<Self, ClassModelError> {
        let content = fs::read_to_string(path).map_err(|source| ClassModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let model = Self::from_json(&content)?;
        log::debug!("Loaded {} classes from {}", model.len(), path.display());
        Ok(model)
    }

    /// Iterate over all classes
    pub fn iter(&self) -> impl Iterator<Item = &ClassInfo> {
        self.classes.iter()
    }

    /// Find a class by fully qualified name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ClassInfo> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Classes residing in `package` or one of its subpackages
    pub fn in_package<'a>(&'a self, package: &'a str) -> impl Iterator<Item = &'a ClassInfo> + 'a {
        self.classes.iter().filter(move |c| {
            c.package == package
                || c.package.strip_prefix(package).is_some_and(|rest| rest.starts_with('.'))
        })
    }

    /// Number of classes
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the model has no classes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl<'a> IntoIterator for &'a ClassModel {
    type Item = &'a ClassInfo;
    type IntoIter = std::slice::Iter<'a, ClassInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}
