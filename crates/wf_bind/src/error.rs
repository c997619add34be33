//! Errors raised while binding a single parameter.
//!
//! None of these escape a bind pass: the driver turns each one into a
//! [`BindingFailure`](crate::bind::BindingFailure) and carries on with the
//! next parameter.

use alloc::string::String;
use core::any::type_name;

use thiserror::Error;

use crate::path::PathSegment;

// -----------------------------------------------------------------------------
// ParseError

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    #[error("malformed parameter name at byte {offset}: {reason}")]
    Malformed { offset: usize, reason: &'static str },
}

// -----------------------------------------------------------------------------
// TypeMismatch

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("expected a value of type `{expected}`, found `{found}`")]
pub struct TypeMismatch {
    pub expected: &'static str,
    pub found: &'static str,
}

// -----------------------------------------------------------------------------
// AccessError

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    #[error("`{type_path}` has no bindable property `{name}`")]
    UnknownProperty {
        name: String,
        type_path: &'static str,
    },

    #[error("`{path}` is reserved and cannot be bound from request input")]
    Forbidden { path: String },

    #[error("`{segment}` cannot be applied to `{type_path}`")]
    NotIndexable {
        segment: PathSegment,
        type_path: &'static str,
    },

    #[error("index {index} exceeds the limit of {limit}")]
    IndexLimit { index: usize, limit: usize },

    #[error("no value is present at `{segment}`")]
    Absent { segment: PathSegment },

    #[error("`{type_path}` has no constructor")]
    NotInstantiable { type_path: &'static str },

    #[error("invalid map key `{key}`")]
    BadKey {
        key: String,
        #[source]
        cause: CoercionError,
    },

    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),
}

// -----------------------------------------------------------------------------
// CoercionError

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoercionError {
    #[error("`{value}` is not a valid `{type_path}`")]
    BadFormat {
        value: String,
        type_path: &'static str,
    },

    #[error("request values cannot be converted to `{type_path}`")]
    Unsupported { type_path: &'static str },
}

impl CoercionError {
    /// `value` could not be read as a `T`.
    #[inline]
    pub fn bad_format<T: ?Sized>(value: &str) -> Self {
        Self::BadFormat {
            value: value.into(),
            type_path: type_name::<T>(),
        }
    }

    /// No conversion to `T` is known.
    #[inline]
    pub fn unsupported<T: ?Sized>() -> Self {
        Self::Unsupported {
            type_path: type_name::<T>(),
        }
    }
}

impl From<TypeMismatch> for CoercionError {
    #[inline]
    fn from(value: TypeMismatch) -> Self {
        Self::Unsupported {
            type_path: value.expected,
        }
    }
}

// -----------------------------------------------------------------------------
// BindError

/// Any failure of one parameter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BindError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Coercion(#[from] CoercionError),
}

impl From<TypeMismatch> for BindError {
    #[inline]
    fn from(value: TypeMismatch) -> Self {
        Self::Access(AccessError::TypeMismatch(value))
    }
}

impl BindError {
    /// The flat classification of this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Parse(ParseError::Malformed { .. }) => FailureKind::Malformed,
            Self::Access(err) => match err {
                AccessError::UnknownProperty { .. } => FailureKind::UnknownProperty,
                AccessError::Forbidden { .. } => FailureKind::Forbidden,
                AccessError::NotIndexable { .. } => FailureKind::NotIndexable,
                AccessError::IndexLimit { .. } => FailureKind::IndexLimit,
                AccessError::Absent { .. } => FailureKind::Absent,
                AccessError::NotInstantiable { .. } => FailureKind::NotInstantiable,
                AccessError::BadKey { .. } => FailureKind::BadKey,
                AccessError::TypeMismatch(_) => FailureKind::TypeMismatch,
            },
            Self::Coercion(err) => match err {
                CoercionError::BadFormat { .. } => FailureKind::BadFormat,
                CoercionError::Unsupported { .. } => FailureKind::Unsupported,
            },
        }
    }
}

// -----------------------------------------------------------------------------
// FailureKind

/// Every way a parameter can fail, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum FailureKind {
    Malformed,
    UnknownProperty,
    Forbidden,
    NotIndexable,
    IndexLimit,
    Absent,
    NotInstantiable,
    BadKey,
    TypeMismatch,
    BadFormat,
    Unsupported,
}

impl FailureKind {
    /// Informational failures are collected and logged but are not meant to
    /// reach the user.
    #[inline]
    pub const fn is_informational(self) -> bool {
        matches!(self, Self::UnknownProperty)
    }
}
