//! Parsing of the derive input.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod bind_derive;
mod rename;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes, VariantAttributes};
pub(crate) use bind_derive::{BindDerive, BindField, BindKind, BindVariant};
pub(crate) use rename::RenameRule;
