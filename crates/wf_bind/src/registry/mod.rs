//! Startup-time catalogue of bindable types and their overrides.
//!
//! ## Menu
//!
//! - [`TypeTrait`]: a capability attached to a registered type.
//! - [`FromType`]: builds a `TypeTrait` from a type.
//! - [`TypeMeta`]: a type's [`Shape`](crate::shape::Shape) and its `TypeTrait` table.
//! - [`BindRegistry`]: the store of `TypeMeta`s, shared read-only by binders.
//! - TypeTraits:
//!     - [`TypeTraitCoerce`]: a conversion rule that wins over the built-in one.
//!     - [`TypeTraitConstruct`]: a constructor used when a value must be created.
//!
//! ## auto_register
//!
//! See [`BindRegistry::auto_register`]. It relies on the [`inventory`] crate,
//! which covers the major platforms. Elsewhere the call does nothing and
//! returns `false`.
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod from_type;
mod traits;
mod type_meta;
mod type_registry;
mod type_trait;

// -----------------------------------------------------------------------------
// Exports

pub use from_type::FromType;
pub use traits::{TypeTraitCoerce, TypeTraitConstruct};
pub use type_meta::TypeMeta;
pub use type_registry::BindRegistry;
pub use type_trait::TypeTrait;
