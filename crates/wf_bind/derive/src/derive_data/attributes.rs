//! The `#[bind(...)]` attributes.

use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

use super::RenameRule;
use crate::BIND_ATTRIBUTE_NAME;

fn bind_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(BIND_ATTRIBUTE_NAME))
}

fn set_once<T>(slot: &mut Option<T>, value: T, span: Span, name: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(span, format!("duplicate `{name}` attribute")));
    }
    *slot = Some(value);
    Ok(())
}

// -----------------------------------------------------------------------------
// TypeAttributes

#[derive(Debug, Default)]
pub(crate) struct TypeAttributes {
    pub rename_all: Option<RenameRule>,
    pub default: Option<Span>,
    pub auto_register: Option<Span>,
    pub scalar: Option<Span>,
}

impl TypeAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in bind_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                let span = meta.path.span();
                if meta.path.is_ident("rename_all") {
                    let lit: LitStr = meta.value()?.parse()?;
                    set_once(&mut out.rename_all, RenameRule::from_lit(&lit)?, span, "rename_all")
                } else if meta.path.is_ident("default") {
                    set_once(&mut out.default, span, span, "default")
                } else if meta.path.is_ident("auto_register") {
                    set_once(&mut out.auto_register, span, span, "auto_register")
                } else if meta.path.is_ident("scalar") {
                    set_once(&mut out.scalar, span, span, "scalar")
                } else {
                    Err(meta.error(
                        "unknown container attribute, expected `rename_all`, `default`, `auto_register` or `scalar`",
                    ))
                }
            })?;
        }
        Ok(out)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    pub rename: Option<LitStr>,
    pub skip: Option<Span>,
}

impl FieldAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in bind_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                let span = meta.path.span();
                if meta.path.is_ident("rename") {
                    set_once(&mut out.rename, meta.value()?.parse()?, span, "rename")
                } else if meta.path.is_ident("skip") {
                    set_once(&mut out.skip, span, span, "skip")
                } else {
                    Err(meta.error("unknown field attribute, expected `rename` or `skip`"))
                }
            })?;
        }
        Ok(out)
    }
}

// -----------------------------------------------------------------------------
// VariantAttributes

#[derive(Debug, Default)]
pub(crate) struct VariantAttributes {
    pub rename: Option<LitStr>,
}

impl VariantAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in bind_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                let span = meta.path.span();
                if meta.path.is_ident("rename") {
                    set_once(&mut out.rename, meta.value()?.parse()?, span, "rename")
                } else {
                    Err(meta.error("unknown variant attribute, expected `rename`"))
                }
            })?;
        }
        Ok(out)
    }
}
