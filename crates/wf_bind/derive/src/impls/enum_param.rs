use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{BindDerive, BindVariant};

/// Generate `FromParam` for a unit-only enum. Names match exactly.
pub(crate) fn impl_enum_param(derive: &BindDerive, variants: &[BindVariant]) -> TokenStream {
    let wf_bind = &derive.wf_bind_path;
    let coerce_ = crate::path::coerce_(wf_bind);
    let error_ = crate::path::error_(wf_bind);
    let result_ = crate::path::result_();

    let names = variants.iter().map(|variant| &variant.name);
    let idents = variants.iter().map(|variant| &variant.ident);

    let ident = derive.ident;
    let (impl_generics, ty_generics, where_clause) = derive.generics.split_for_impl();

    quote! {
        impl #impl_generics #coerce_::FromParam for #ident #ty_generics #where_clause {
            fn from_param(
                text: &str,
                _: &#coerce_::BindContext<'_>,
            ) -> #result_<Self, #error_::CoercionError> {
                match text {
                    #(#names => #result_::Ok(Self::#idents),)*
                    _ => #result_::Err(#error_::CoercionError::bad_format::<Self>(text)),
                }
            }
        }
    }
}
