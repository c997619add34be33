//! [`Typed`](crate::Typed) and [`Bindable`](crate::Bindable) for foreign types.
//!
//! ## Implemented Menu
//!
//! - scalars:
//!     - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//!     - `bool`, `char`, `String`
//! - `Option<T>`
//! - lists: `Vec<T>`, `VecDeque<T>`
//! - arrays: `[T; N]`, `Box<[T]>`
//! - sets: `BTreeSet<T>`, `HashSet<T, S>` ("std" feature)
//! - maps: `BTreeMap<K, V>`, `HashMap<K, V, S>` ("std" feature)
//! - chrono ("chrono" feature): `NaiveDate`, `NaiveDateTime`

// -----------------------------------------------------------------------------
// Modules

mod array;
mod btree;
mod list;
mod native;
mod option;

#[cfg(feature = "std")]
mod hash;

#[cfg(feature = "chrono")]
mod chrono;

// -----------------------------------------------------------------------------
// Helpers

use alloc::boxed::Box;

use crate::Bindable;
use crate::error::TypeMismatch;

/// The [`Bindable::set`] of every sized type: moves `value` into `target`
/// when it holds a `T`.
#[inline]
pub fn set_by_take<T: Bindable>(target: &mut T, value: Box<dyn Bindable>) -> Result<(), TypeMismatch> {
    *target = value.take::<T>()?;
    Ok(())
}
