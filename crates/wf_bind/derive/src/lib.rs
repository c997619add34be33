//! `#[derive(Bindable)]`, see [`derive_bindable`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static BIND_ATTRIBUTE_NAME: &str = "bind";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Bindable Derivation
///
/// `#[derive(Bindable)]` implements `Typed` and `Bindable`, plus:
///
/// - `Bean` for structs with named fields. Each field becomes a property,
///   and its type must itself be bindable.
/// - `FromParam` for enums whose variants are all units. A request value
///   selects the variant with exactly that name.
///
/// Structs marked `#[bind(scalar)]` are bound from a single request value
/// through a hand-written `FromParam`.
///
/// ## Container attributes
///
/// ```rust, ignore
/// #[derive(Bindable, Default)]
/// #[bind(rename_all = "camelCase", default, auto_register)]
/// struct Person {
///     first_name: String,          // bound as `firstName`
///     #[bind(rename = "years")]
///     age: u32,                    // bound as `years`
///     #[bind(skip)]
///     secret: String,              // never bound
/// }
/// ```
///
/// - `rename_all = "..."`: one of `camelCase`, `PascalCase`, `snake_case`,
///   `kebab-case`, `SCREAMING_SNAKE_CASE`, `lowercase`, `UPPERCASE`. Applies
///   to fields of structs and variants of enums.
/// - `default`: the type implements `Default`, which the binder uses to
///   create missing values along a path. Without it, a constructor must be
///   registered before the type can be created.
/// - `auto_register`: collect the type for `BindRegistry::auto_register`.
///   Ignored for generic types and when the `auto_register` feature is off.
/// - `scalar`: bind from one value with the type's `FromParam`.
///
/// ## Field and variant attributes
///
/// - `rename = "..."`: the exact name used in requests.
/// - `skip` (fields only): not a property. The field keeps whatever value
///   the bean was created with.
///
/// Types with lifetime parameters cannot be derived.
#[proc_macro_derive(Bindable, attributes(bind))]
pub fn derive_bindable(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::BindDerive::from_input(&ast) {
        Ok(derive) => impls::expand(&derive).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
