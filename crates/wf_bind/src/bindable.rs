use alloc::boxed::Box;
use core::any::{Any, type_name};

use crate::error::TypeMismatch;
use crate::ops::{Bean, BindArray, BindList, BindMap, BindOption, BindSet};
use crate::shape::Shape;

// -----------------------------------------------------------------------------
// Typed

/// Static access to the [`Shape`] of a type.
///
/// Implemented by `#[derive(Bindable)]` and by every built-in bindable type.
/// The shape is what lets the binder check a parameter path before it
/// touches the target.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be bound from request parameters",
    note = "consider annotating `{Self}` with `#[derive(Bindable)]`"
)]
pub trait Typed: 'static {
    fn type_shape() -> Shape;
}

// -----------------------------------------------------------------------------
// Bindable

/// A value that request parameters can be bound into.
///
/// `bind_ref` and `bind_mut` expose what the value can do: a bean has named
/// properties, a list grows, a map is keyed, and so on. Scalars can only be
/// replaced wholesale through [`Bindable::set`].
///
/// # Example
///
/// ```
/// use wf_bind::{Bindable, BindRef};
///
/// let value: Box<dyn Bindable> = Box::new(vec![1_i64, 2, 3]);
/// assert!(matches!(value.bind_ref(), BindRef::List(list) if list.len() == 3));
/// assert_eq!(value.take::<Vec<i64>>().unwrap(), [1, 2, 3]);
/// ```
pub trait Bindable: Any {
    /// Returns the shape of the underlying type.
    fn bind_shape(&self) -> Shape;

    fn bind_ref(&self) -> BindRef<'_>;

    fn bind_mut(&mut self) -> BindMut<'_>;

    /// Replaces `self` with `value`.
    ///
    /// Fails without touching `self` if `value` holds another type.
    fn set(&mut self, value: Box<dyn Bindable>) -> Result<(), TypeMismatch>;
}

impl dyn Bindable {
    /// Returns `true` if the underlying type is `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut::<T>()
    }

    /// Moves the value out of the box as a `T`.
    pub fn take<T: Any>(self: Box<Self>) -> Result<T, TypeMismatch> {
        let found = self.bind_shape().type_path();
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(_) => Err(TypeMismatch {
                expected: type_name::<T>(),
                found,
            }),
        }
    }

    /// The full type path of the underlying type.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.bind_shape().type_path()
    }
}

// -----------------------------------------------------------------------------
// BindRef / BindMut

/// An immutable view of what a [`Bindable`] value can do.
pub enum BindRef<'a> {
    Bean(&'a dyn Bean),
    List(&'a dyn BindList),
    Array(&'a dyn BindArray),
    Set(&'a dyn BindSet),
    Map(&'a dyn BindMap),
    Optional(&'a dyn BindOption),
    Scalar(&'a dyn Bindable),
}

/// A mutable view of what a [`Bindable`] value can do.
pub enum BindMut<'a> {
    Bean(&'a mut dyn Bean),
    List(&'a mut dyn BindList),
    Array(&'a mut dyn BindArray),
    Set(&'a mut dyn BindSet),
    Map(&'a mut dyn BindMap),
    Optional(&'a mut dyn BindOption),
    Scalar(&'a mut dyn Bindable),
}

impl<'a> BindRef<'a> {
    /// Gives the viewed value back as a plain [`Bindable`].
    pub fn into_bindable(self) -> &'a dyn Bindable {
        match self {
            Self::Bean(v) => v,
            Self::List(v) => v,
            Self::Array(v) => v,
            Self::Set(v) => v,
            Self::Map(v) => v,
            Self::Optional(v) => v,
            Self::Scalar(v) => v,
        }
    }

    /// A short name of the view, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bean(_) => "bean",
            Self::List(_) => "list",
            Self::Array(_) => "array",
            Self::Set(_) => "set",
            Self::Map(_) => "map",
            Self::Optional(_) => "optional",
            Self::Scalar(_) => "scalar",
        }
    }
}

impl<'a> BindMut<'a> {
    /// Gives the viewed value back as a plain [`Bindable`].
    pub fn into_bindable(self) -> &'a mut dyn Bindable {
        match self {
            Self::Bean(v) => v,
            Self::List(v) => v,
            Self::Array(v) => v,
            Self::Set(v) => v,
            Self::Map(v) => v,
            Self::Optional(v) => v,
            Self::Scalar(v) => v,
        }
    }

    /// A short name of the view, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bean(_) => "bean",
            Self::List(_) => "list",
            Self::Array(_) => "array",
            Self::Set(_) => "set",
            Self::Map(_) => "map",
            Self::Optional(_) => "optional",
            Self::Scalar(_) => "scalar",
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::{BindMut, BindRef, Bindable};

    #[test]
    fn take_checks_the_type() {
        let value: Box<dyn Bindable> = Box::new(5_i64);
        assert!(value.is::<i64>());

        let err = value.take::<String>().unwrap_err();
        assert_eq!(err.expected, "alloc::string::String");
        assert_eq!(err.found, "i64");
    }

    #[test]
    fn set_replaces_same_type_only() {
        let mut value = vec![1_u8];
        value.set(Box::new(vec![7_u8, 8])).unwrap();
        assert_eq!(value, [7, 8]);

        assert!(value.set(Box::new(3_u8)).is_err());
        assert_eq!(value, [7, 8]);
    }

    #[test]
    fn views_round_trip() {
        let mut value: Vec<i32> = Vec::new();
        let view = value.bind_mut();
        assert_eq!(view.kind_name(), "list");
        let back = view.into_bindable();
        assert!(back.downcast_mut::<Vec<i32>>().is_some());

        let text = String::from("x");
        assert!(matches!(text.bind_ref(), BindRef::Scalar(_)));
        let mut flag = false;
        assert!(matches!(flag.bind_mut(), BindMut::Scalar(_)));
    }
}
