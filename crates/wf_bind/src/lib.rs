#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Derive output names this crate as `wf_bind`, which must also resolve from
// inside the crate for its own tests.
extern crate self as wf_bind;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod bindable;

pub mod access;
pub mod bind;
pub mod coerce;
pub mod error;
pub mod impls;
pub mod ops;
pub mod path;
pub mod registry;
pub mod shape;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use bindable::{BindMut, BindRef, Bindable, Typed};
pub use wf_bind_derive as derive;

/// Most used items.
pub mod prelude {
    pub use crate::bind::{Binder, BinderConfig, BindingErrors, ParamMap};
    pub use crate::derive::Bindable;
    pub use crate::ops::Bean;
    pub use crate::{Bindable, Typed};
}
