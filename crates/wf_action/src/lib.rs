#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod context;
pub mod roundtrip;
pub mod validation;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use context::{ActionBean, ActionBeanContext};
pub use roundtrip::{Outcome, Roundtrip};
pub use validation::{ValidationError, ValidationErrors};
