//! Capability traits behind [`BindRef`](crate::BindRef) and
//! [`BindMut`](crate::BindMut).
//!
//! - [`Bean`]: named properties, usually derived.
//! - [`BindList`]: a sequence that grows on demand.
//! - [`BindArray`]: a sequence of fixed length.
//! - [`BindSet`]: a de-duplicating collection.
//! - [`BindMap`]: entries addressed by a typed key.
//! - [`BindOption`]: a slot that may be empty.

// -----------------------------------------------------------------------------
// Modules

mod array;
mod bean;
mod list;
mod map;
mod option;
mod set;

// -----------------------------------------------------------------------------
// Exports

pub use array::BindArray;
pub use bean::Bean;
pub use list::BindList;
pub use map::BindMap;
pub use option::BindOption;
pub use set::BindSet;
