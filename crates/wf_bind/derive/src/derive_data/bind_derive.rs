use std::collections::BTreeSet;

use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type};

use super::{FieldAttributes, RenameRule, TypeAttributes, VariantAttributes};

// -----------------------------------------------------------------------------
// BindField / BindVariant

/// A struct field and the property name it is bound under.
pub(crate) struct BindField {
    pub member: Ident,
    pub ty: Type,
    pub name: String,
    pub skip: bool,
}

/// A unit variant and the request value selecting it.
pub(crate) struct BindVariant {
    pub ident: Ident,
    pub name: String,
}

pub(crate) enum BindKind {
    Bean(Vec<BindField>),
    Enum(Vec<BindVariant>),
    Scalar,
}

// -----------------------------------------------------------------------------
// BindDerive

pub(crate) struct BindDerive<'a> {
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub attrs: TypeAttributes,
    pub kind: BindKind,
    pub wf_bind_path: syn::Path,
}

fn property_name(ident: &Ident, rename: Option<&syn::LitStr>, rule: Option<RenameRule>) -> String {
    match (rename, rule) {
        (Some(lit), _) => lit.value(),
        (None, Some(rule)) => rule.apply(&ident.unraw().to_string()),
        (None, None) => ident.unraw().to_string(),
    }
}

fn check_unique<'n>(names: impl Iterator<Item = (&'n str, proc_macro2::Span)>) -> syn::Result<()> {
    let mut seen = BTreeSet::new();
    for (name, span) in names {
        if !seen.insert(name) {
            return Err(syn::Error::new(span, format!("duplicate bind name `{name}`")));
        }
    }
    Ok(())
}

impl<'a> BindDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if let Some(lifetime) = input.generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.span(),
                "`Bindable` cannot be derived for types with lifetime parameters",
            ));
        }

        let attrs = TypeAttributes::parse(&input.attrs)?;
        let kind = if attrs.scalar.is_some() {
            BindKind::Scalar
        } else {
            match &input.data {
                Data::Struct(data) => Self::parse_bean(&data.fields, attrs.rename_all, input)?,
                Data::Enum(data) => Self::parse_enum(data, attrs.rename_all)?,
                Data::Union(_) => {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "`Bindable` cannot be derived for unions",
                    ));
                }
            }
        };

        Ok(Self {
            ident: &input.ident,
            generics: &input.generics,
            attrs,
            kind,
            wf_bind_path: crate::path::wf_bind(),
        })
    }

    fn parse_bean(
        fields: &Fields,
        rule: Option<RenameRule>,
        input: &DeriveInput,
    ) -> syn::Result<BindKind> {
        let Fields::Named(named) = fields else {
            return Err(syn::Error::new(
                input.ident.span(),
                "`Bindable` needs named fields, use `#[bind(scalar)]` to bind from a single value",
            ));
        };

        let mut out = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let attrs = FieldAttributes::parse(&field.attrs)?;
            let Some(member) = field.ident.clone() else {
                continue;
            };
            let name = property_name(&member, attrs.rename.as_ref(), rule);
            out.push(BindField {
                member,
                ty: field.ty.clone(),
                name,
                skip: attrs.skip.is_some(),
            });
        }

        check_unique(
            out.iter()
                .filter(|field| !field.skip)
                .map(|field| (field.name.as_str(), field.member.span())),
        )?;
        Ok(BindKind::Bean(out))
    }

    fn parse_enum(data: &syn::DataEnum, rule: Option<RenameRule>) -> syn::Result<BindKind> {
        let mut out = Vec::with_capacity(data.variants.len());
        for variant in &data.variants {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(syn::Error::new(
                    variant.span(),
                    "`Bindable` enums may only have unit variants",
                ));
            }
            let attrs = VariantAttributes::parse(&variant.attrs)?;
            out.push(BindVariant {
                ident: variant.ident.clone(),
                name: property_name(&variant.ident, attrs.rename.as_ref(), rule),
            });
        }

        check_unique(
            out.iter()
                .map(|variant| (variant.name.as_str(), variant.ident.span())),
        )?;
        Ok(BindKind::Enum(out))
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }
}

// -----------------------------------------------------------------------------
// Generics

impl BindDerive<'_> {
    /// The type's where clause, extended with `T: 'static` for every type
    /// parameter and with `extra`.
    ///
    /// Non-generic types get no extra predicates: a bound such as
    /// `Vec<Self>: Typed` would make recursive beans unprovable.
    pub fn where_clause(
        &self,
        extra: impl IntoIterator<Item = syn::WherePredicate>,
    ) -> syn::WhereClause {
        let mut clause = self
            .generics
            .where_clause
            .clone()
            .unwrap_or_else(|| syn::WhereClause {
                where_token: Default::default(),
                predicates: Default::default(),
            });

        if !self.is_generic() {
            return clause;
        }

        for param in self.generics.type_params() {
            let ident = &param.ident;
            clause.predicates.push(syn::parse_quote!(#ident: 'static));
        }
        clause.predicates.extend(extra);
        clause
    }
}
