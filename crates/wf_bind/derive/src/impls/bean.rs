use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{BindDerive, BindField};

/// Generate `Typed`, `Bindable` and `Bean` for a struct with named fields.
pub(crate) fn impl_bean(derive: &BindDerive, fields: &[BindField]) -> TokenStream {
    let wf_bind = &derive.wf_bind_path;
    let typed_ = crate::path::typed_(wf_bind);
    let bindable_ = crate::path::bindable_(wf_bind);
    let bean_ = crate::path::bean_(wf_bind);
    let shape_ = crate::path::shape_(wf_bind);
    let error_ = crate::path::error_(wf_bind);
    let box_ = crate::path::box_(wf_bind);
    let option_ = crate::path::option_();
    let result_ = crate::path::result_();

    let active = fields.iter().filter(|field| !field.skip).collect::<Vec<_>>();
    let names = active.iter().map(|field| &field.name).collect::<Vec<_>>();
    let members = active.iter().map(|field| &field.member).collect::<Vec<_>>();
    let tys = active.iter().map(|field| &field.ty).collect::<Vec<_>>();

    let construct_tokens = match derive.attrs.default {
        Some(_) => quote! { .with_construct(#shape_::construct_default::<Self>) },
        None => crate::utils::empty(),
    };

    let ident = derive.ident;
    let (impl_generics, ty_generics, _) = derive.generics.split_for_impl();
    let where_clause = derive.where_clause(
        tys.iter()
            .map(|ty| syn::parse_quote!(#ty: #typed_ + #bindable_)),
    );

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            fn type_shape() -> #shape_::Shape {
                #shape_::Shape::bean::<Self>(#shape_::BeanShape::new(
                    &[#(#names),*],
                    |name: &str| match name {
                        #(#names => #option_::Some(<#tys as #typed_>::type_shape()),)*
                        _ => #option_::None,
                    },
                ))
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
                #wf_bind::BindRef::Bean(self)
            }

            #[inline]
            fn bind_mut(&mut self) -> #wf_bind::BindMut<'_> {
                #wf_bind::BindMut::Bean(self)
            }

            #[inline]
            fn set(
                &mut self,
                value: #box_<dyn #bindable_>,
            ) -> #result_<(), #error_::TypeMismatch> {
                #wf_bind::impls::set_by_take(self, value)
            }
        }

        impl #impl_generics #bean_ for #ident #ty_generics #where_clause {
            fn property(&self, name: &str) -> #option_<&dyn #bindable_> {
                match name {
                    #(#names => #option_::Some(&self.#members as &dyn #bindable_),)*
                    _ => #option_::None,
                }
            }

            fn property_mut(&mut self, name: &str) -> #option_<&mut dyn #bindable_> {
                match name {
                    #(#names => #option_::Some(&mut self.#members as &mut dyn #bindable_),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn property_names(&self) -> &'static [&'static str] {
                &[#(#names),*]
            }
        }
    }
}
