use quote::quote_spanned;

use crate::derive_data::BindDerive;

/// Generate `auto_register` submission.
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(derive: &BindDerive) -> proc_macro2::TokenStream {
    let Some(span) = derive.attrs.auto_register else {
        return crate::utils::empty();
    };
    // Invalid for generic types.
    if derive.is_generic() {
        return crate::utils::empty();
    }

    let auto_register_ = crate::path::auto_register_(&derive.wf_bind_path);
    let ident = derive.ident;

    quote_spanned! { span =>
        #auto_register_::inventory::submit!{
            #auto_register_::__AutoRegisterFunc(
                <#ident as #auto_register_::__RegisterType>::__register
            )
        }
    }
}

/// Generate `auto_register` submission.
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &BindDerive) -> proc_macro2::TokenStream {
    crate::utils::empty()
}
