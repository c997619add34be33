//! Static descriptions of bindable types.
//!
//! A [`Shape`] tells the binder what a type looks like without needing a
//! value of it: which properties a bean declares, what a list holds, what a
//! map is keyed by. It also carries the type's built-in conversion from raw
//! request strings and its default constructor, when it has them.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::{Any, TypeId, type_name};
use core::fmt;

use crate::Bindable;
use crate::coerce::{BindContext, FromParam, coerce_scalar};
use crate::error::CoercionError;

// -----------------------------------------------------------------------------
// Function pointers

/// Lazily yields a nested shape, so recursive types can describe themselves.
pub type ShapeFn = fn() -> Shape;

/// Converts raw request values into a boxed value of the shape's type.
///
/// `Ok(None)` means the input carried no value and the target should be
/// left untouched.
pub type CoerceFn =
    fn(&BindContext<'_>, &[String]) -> Result<Option<Box<dyn Bindable>>, CoercionError>;

/// Builds a fresh value of the shape's type.
pub type ConstructFn = fn() -> Box<dyn Bindable>;

/// A [`ConstructFn`] backed by [`Default`].
pub fn construct_default<T: Default + Bindable>() -> Box<dyn Bindable> {
    Box::new(T::default())
}

// -----------------------------------------------------------------------------
// BeanShape

/// The declared properties of a bean.
#[derive(Clone, Copy)]
pub struct BeanShape {
    properties: &'static [&'static str],
    property: fn(&str) -> Option<Shape>,
}

impl BeanShape {
    /// `properties` lists the bindable names in declaration order, `property`
    /// maps one of them to its declared shape.
    #[inline]
    pub const fn new(
        properties: &'static [&'static str],
        property: fn(&str) -> Option<Shape>,
    ) -> Self {
        Self {
            properties,
            property,
        }
    }

    #[inline]
    pub const fn properties(&self) -> &'static [&'static str] {
        self.properties
    }

    /// The declared shape of property `name`. Names are case-sensitive.
    #[inline]
    pub fn property(&self, name: &str) -> Option<Shape> {
        (self.property)(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains(&name)
    }
}

impl fmt::Debug for BeanShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanShape")
            .field("properties", &self.properties)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// ShapeKind

#[derive(Clone, Copy, Debug)]
pub enum ShapeKind {
    /// Converted directly from request strings.
    Scalar,
    /// Named properties.
    Bean(BeanShape),
    /// A value that may be absent, created on demand.
    Optional(ShapeFn),
    /// A growable sequence.
    List(ShapeFn),
    /// A sequence that cannot grow. `len` is known for `[T; N]`.
    Array { element: ShapeFn, len: Option<usize> },
    /// A de-duplicating collection, bound as a whole.
    Set(ShapeFn),
    /// Entries addressed by key.
    Map { key: ShapeFn, value: ShapeFn },
}

// -----------------------------------------------------------------------------
// Shape

/// Static type descriptor used to plan a bind before mutating anything.
///
/// # Example
///
/// ```
/// use wf_bind::Typed;
/// use wf_bind::shape::ShapeKind;
///
/// let shape = <Vec<Option<u32>>>::type_shape();
/// let ShapeKind::List(element) = shape.kind() else { unreachable!() };
/// assert!(matches!(element().kind(), ShapeKind::Optional(_)));
/// assert!(shape.can_construct());
/// ```
#[derive(Clone, Copy)]
pub struct Shape {
    type_id: TypeId,
    type_path: &'static str,
    kind: ShapeKind,
    coerce: Option<CoerceFn>,
    construct: Option<ConstructFn>,
}

impl Shape {
    /// A shape of `kind` for `T`, with neither conversion nor constructor.
    #[inline]
    pub fn new<T: Any>(kind: ShapeKind) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_path: type_name::<T>(),
            kind,
            coerce: None,
            construct: None,
        }
    }

    /// A scalar shape converted through [`FromParam`].
    #[inline]
    pub fn scalar<T: FromParam + Bindable>() -> Self {
        Self::new::<T>(ShapeKind::Scalar).with_coerce(coerce_scalar::<T>)
    }

    #[inline]
    pub fn bean<T: Any>(bean: BeanShape) -> Self {
        Self::new::<T>(ShapeKind::Bean(bean))
    }

    #[inline]
    pub const fn with_coerce(mut self, coerce: CoerceFn) -> Self {
        self.coerce = Some(coerce);
        self
    }

    #[inline]
    pub const fn with_construct(mut self, construct: ConstructFn) -> Self {
        self.construct = Some(construct);
        self
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The full type path, as given by [`core::any::type_name`].
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// The type path with module prefixes removed, `Vec<String>` for
    /// `alloc::vec::Vec<alloc::string::String>`.
    pub fn type_name(&self) -> String {
        short_type_name(self.type_path)
    }

    #[inline]
    pub const fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline]
    pub const fn coerce_fn(&self) -> Option<CoerceFn> {
        self.coerce
    }

    #[inline]
    pub const fn construct_fn(&self) -> Option<ConstructFn> {
        self.construct
    }

    #[inline]
    pub const fn can_construct(&self) -> bool {
        self.construct.is_some()
    }

    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Shapes directly nested in this one, in declaration order.
    pub fn dependencies(&self) -> Vec<Shape> {
        match self.kind {
            ShapeKind::Scalar => Vec::new(),
            ShapeKind::Bean(bean) => bean
                .properties()
                .iter()
                .filter_map(|name| bean.property(name))
                .collect(),
            ShapeKind::Optional(inner)
            | ShapeKind::List(inner)
            | ShapeKind::Array { element: inner, .. }
            | ShapeKind::Set(inner) => alloc::vec![inner()],
            ShapeKind::Map { key, value } => alloc::vec![key(), value()],
        }
    }
}

impl PartialEq for Shape {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Shape {}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("type_path", &self.type_path)
            .field("kind", &self.kind)
            .field("coerce", &self.coerce.is_some())
            .field("construct", &self.construct.is_some())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Short names

fn short_type_name(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut start = 0;
    for (index, c) in path.char_indices() {
        if matches!(c, '<' | '>' | ',' | ' ' | '[' | ']' | ';' | '(' | ')' | '&' | '*') {
            push_last_segment(&mut out, &path[start..index]);
            out.push(c);
            start = index + c.len_utf8();
        }
    }
    push_last_segment(&mut out, &path[start..]);
    out
}

fn push_last_segment(out: &mut String, piece: &str) {
    out.push_str(piece.rsplit("::").next().unwrap_or(piece));
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{ShapeKind, short_type_name};
    use crate::Typed;

    #[test]
    fn short_names_drop_modules() {
        assert_eq!(short_type_name("alloc::string::String"), "String");
        assert_eq!(
            short_type_name("alloc::vec::Vec<core::option::Option<alloc::string::String>>"),
            "Vec<Option<String>>"
        );
        assert_eq!(short_type_name("[u8; 4]"), "[u8; 4]");
        assert_eq!(
            <BTreeMap<String, i64>>::type_shape().type_name(),
            "BTreeMap<String, i64>"
        );
    }

    #[test]
    fn map_shape_exposes_key_and_value() {
        let shape = <BTreeMap<String, Vec<u8>>>::type_shape();
        let ShapeKind::Map { key, value } = shape.kind() else {
            panic!("expected a map shape");
        };
        assert!(key().is::<String>());
        assert!(value().is::<Vec<u8>>());
        assert_eq!(shape.dependencies().len(), 2);
    }

    #[test]
    fn scalars_convert_and_construct() {
        let shape = i64::type_shape();
        assert!(matches!(shape.kind(), ShapeKind::Scalar));
        assert!(shape.coerce_fn().is_some());
        assert!(shape.can_construct());
        assert_eq!(shape, i64::type_shape());
        assert_ne!(shape, i32::type_shape());
    }
}
