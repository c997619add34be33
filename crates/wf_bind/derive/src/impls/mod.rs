// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod bean;
mod enum_param;
mod scalar;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{BindDerive, BindKind};

use auto_register::get_auto_register_impl;
use bean::impl_bean;
use enum_param::impl_enum_param;
use scalar::impl_scalar;

/// Generate every impl `#[derive(Bindable)]` emits for `derive`.
pub(crate) fn expand(derive: &BindDerive) -> TokenStream {
    let kind_tokens = match &derive.kind {
        BindKind::Bean(fields) => impl_bean(derive, fields),
        BindKind::Enum(variants) => {
            let from_param_tokens = impl_enum_param(derive, variants);
            let scalar_tokens = impl_scalar(derive);
            quote! {
                #from_param_tokens

                #scalar_tokens
            }
        }
        BindKind::Scalar => impl_scalar(derive),
    };

    let auto_register_tokens = get_auto_register_impl(derive);

    quote! {
        #kind_tokens

        #auto_register_tokens
    }
}
