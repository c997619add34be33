//! Paths of `wf_bind` items used by generated code.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// The path generated code uses to reach `wf_bind`.
///
/// Depends on the caller's manifest: `::wf_bind` for direct users,
/// `::wf_core::bind` through the facade, and so on. Reading the manifest is
/// not free, so the result is computed once per derive and passed around.
pub(crate) fn wf_bind() -> syn::Path {
    wf_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("wf_bind"))
}

#[inline(always)]
pub(crate) fn typed_(wf_bind_path: &syn::Path) -> TokenStream {
    quote! { #wf_bind_path::Typed }
}

#[inline(always)]
pub(crate) fn bindable_(wf_bind_path: &syn::Path) -> TokenStream {
    quote! { #wf_bind_path::Bindable }
}

#[inline(always)]
pub(crate) fn bean_(wf_bind_path: &syn::Path) -> TokenStream {
    quote! { #wf_bind_path::ops::Bean }
}

#[inline(always)]
pub(crate) fn shape_(wf_bind_path: &syn::Path) -> TokenStream {
    quote! { #wf_bind_path::shape }
}

#[inline(always)]
pub(crate) fn coerce_(wf_bind_path: &syn::Path) -> TokenStream {
    quote! { #wf_bind_path::coerce }
}

#[inline(always)]
pub(crate) fn error_(wf_bind_path: &syn::Path) -> TokenStream {
    quote! { #wf_bind_path::error }
}

#[inline(always)]
pub(crate) fn box_(wf_bind_path: &syn::Path) -> TokenStream {
    quote! { #wf_bind_path::__macro_exports::alloc_utils::Box }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(wf_bind_path: &syn::Path) -> TokenStream {
    quote! { #wf_bind_path::__macro_exports::auto_register }
}

// -----------------------------------------------------------------------------
// Prelude items, spelled out for `no_std` callers

#[inline(always)]
pub(crate) fn option_() -> TokenStream {
    quote! { ::core::option::Option }
}

#[inline(always)]
pub(crate) fn result_() -> TokenStream {
    quote! { ::core::result::Result }
}
