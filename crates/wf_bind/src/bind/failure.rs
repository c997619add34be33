use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

use crate::error::{BindError, FailureKind};

// -----------------------------------------------------------------------------
// BindStage

/// Where in the binding of one parameter a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindStage {
    /// Reading the parameter name.
    Parse,
    /// Checking the path against the target.
    Resolve,
    /// Converting the raw values.
    Coerce,
    /// Storing the converted value.
    Apply,
}

impl fmt::Display for BindStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Parse => "parse",
            Self::Resolve => "resolve",
            Self::Coerce => "coerce",
            Self::Apply => "apply",
        })
    }
}

// -----------------------------------------------------------------------------
// BindingFailure

/// One parameter that could not be bound.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot bind `{path}` ({stage}): {cause}")]
pub struct BindingFailure {
    path: String,
    values: Vec<String>,
    stage: BindStage,
    cause: BindError,
}

impl BindingFailure {
    pub fn new(
        path: impl Into<String>,
        values: impl Into<Vec<String>>,
        stage: BindStage,
        cause: impl Into<BindError>,
    ) -> Self {
        Self {
            path: path.into(),
            values: values.into(),
            stage,
            cause: cause.into(),
        }
    }

    /// The parameter name as received.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The raw values of the parameter.
    #[inline]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    #[inline]
    pub fn stage(&self) -> BindStage {
        self.stage
    }

    #[inline]
    pub fn cause(&self) -> &BindError {
        &self.cause
    }

    #[inline]
    pub fn kind(&self) -> FailureKind {
        self.cause.kind()
    }

    /// See [`FailureKind::is_informational`].
    #[inline]
    pub fn is_informational(&self) -> bool {
        self.kind().is_informational()
    }
}

// -----------------------------------------------------------------------------
// BindingErrors

/// The failures of one bind pass, in the order they happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingErrors {
    failures: Vec<BindingFailure>,
}

impl BindingErrors {
    #[inline]
    pub const fn new() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, failure: BindingFailure) {
        self.failures.push(failure);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, BindingFailure> {
        self.failures.iter()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.failures.clear();
    }

    /// Failures of the parameter named `path`.
    pub fn for_path<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a BindingFailure> {
        self.failures.iter().filter(move |failure| failure.path == path)
    }

    /// Failures meant for the user, leaving out informational ones.
    pub fn reportable(&self) -> impl Iterator<Item = &BindingFailure> {
        self.failures
            .iter()
            .filter(|failure| !failure.is_informational())
    }

    pub fn has_reportable(&self) -> bool {
        self.reportable().next().is_some()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<BindingFailure> {
        self.failures
    }
}

impl Extend<BindingFailure> for BindingErrors {
    fn extend<I: IntoIterator<Item = BindingFailure>>(&mut self, iter: I) {
        self.failures.extend(iter);
    }
}

impl IntoIterator for BindingErrors {
    type Item = BindingFailure;
    type IntoIter = alloc::vec::IntoIter<BindingFailure>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a BindingErrors {
    type Item = &'a BindingFailure;
    type IntoIter = core::slice::Iter<'a, BindingFailure>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}
