//! Conversion of raw request strings into typed values.
//!
//! Lookup order for a target [`Shape`](crate::shape::Shape):
//!
//! 1. a [`TypeTraitCoerce`] registered for the type;
//! 2. the shape's built-in conversion;
//! 3. otherwise [`CoercionError::Unsupported`].
//!
//! Scalars read the first raw value. Apart from strings, values are trimmed
//! and a blank value means "no value": the target is left as it was and no
//! failure is recorded. Collections convert every raw value on its own and
//! skip the blank ones.
//!
//! [`TypeTraitCoerce`]: crate::registry::TypeTraitCoerce

// -----------------------------------------------------------------------------
// Modules

mod collection;
mod context;
mod scalar;

// -----------------------------------------------------------------------------
// Exports

pub use collection::{coerce_array, coerce_collection, coerce_each, coerce_optional};
pub use context::BindContext;
pub use scalar::{FromParam, coerce_scalar};

use crate::error::CoercionError;
