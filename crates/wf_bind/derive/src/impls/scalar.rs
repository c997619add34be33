use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::BindDerive;

/// Generate `Typed` and `Bindable` for a type converted by its `FromParam`.
pub(crate) fn impl_scalar(derive: &BindDerive) -> TokenStream {
    let wf_bind = &derive.wf_bind_path;
    let typed_ = crate::path::typed_(wf_bind);
    let bindable_ = crate::path::bindable_(wf_bind);
    let shape_ = crate::path::shape_(wf_bind);
    let coerce_ = crate::path::coerce_(wf_bind);
    let error_ = crate::path::error_(wf_bind);
    let box_ = crate::path::box_(wf_bind);
    let result_ = crate::path::result_();

    let construct_tokens = match derive.attrs.default {
        Some(_) => quote! { .with_construct(#shape_::construct_default::<Self>) },
        None => crate::utils::empty(),
    };

    let ident = derive.ident;
    let (impl_generics, ty_generics, _) = derive.generics.split_for_impl();
    let where_clause = derive.where_clause([syn::parse_quote!(Self: #coerce_::FromParam)]);

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            fn type_shape() -> #shape_::Shape {
                #shape_::Shape::scalar::<Self>()
                #construct_tokens
            }
        }

        impl #impl_generics #bindable_ for #ident #ty_generics #where_clause {
            #[inline]
            fn bind_shape(&self) -> #shape_::Shape {
                <Self as #typed_>::type_shape()
            }

            #[inline]
            fn bind_ref(&self) -> #wf_bind::BindRef<'_> {
                #wf_bind::BindRef::Scalar(self)
            }

            #[inline]
            fn bind_mut(&mut self) -> #wf_bind::BindMut<'_> {
                #wf_bind::BindMut::Scalar(self)
            }

            #[inline]
            fn set(
                &mut self,
                value: #box_<dyn #bindable_>,
            ) -> #result_<(), #error_::TypeMismatch> {
                #wf_bind::impls::set_by_take(self, value)
            }
        }
    }
}
