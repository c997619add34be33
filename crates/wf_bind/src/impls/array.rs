use alloc::boxed::Box;

use crate::coerce::{coerce_array, coerce_collection};
use crate::error::TypeMismatch;
use crate::impls::set_by_take;
use crate::ops::BindArray;
use crate::shape::{Shape, ShapeKind, construct_default};
use crate::{BindMut, BindRef, Bindable, Typed};

// -----------------------------------------------------------------------------
// [T; N]

impl<T: Typed + Bindable, const N: usize> Typed for [T; N] {
    fn type_shape() -> Shape {
        Shape::new::<Self>(ShapeKind::Array {
            element: T::type_shape,
            len: Some(N),
        })
        .with_coerce(coerce_array::<T, N>)
    }
}

impl<T: Typed + Bindable, const N: usize> Bindable for [T; N] {
    #[inline]
    fn bind_shape(&self) -> Shape {
        <Self as Typed>::type_shape()
    }

    #[inline]
    fn bind_ref(&self) -> BindRef<'_> {
        BindRef::Array(self)
    }

    #[inline]
    fn bind_mut(&mut self) -> BindMut<'_> {
        BindMut::Array(self)
    }

    #[inline]
    fn set(&mut self, value: Box<dyn Bindable>) -> Result<(), TypeMismatch> {
        set_by_take(self, value)
    }
}

impl<T: Typed + Bindable, const N: usize> BindArray for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn element_shape(&self) -> Shape {
        T::type_shape()
    }

    fn get_element(&self, index: usize) -> Option<&dyn Bindable> {
        <[T]>::get(self, index).map(|item| item as &dyn Bindable)
    }

    fn get_element_mut(&mut self, index: usize) -> Option<&mut dyn Bindable> {
        <[T]>::get_mut(self, index).map(|item| item as &mut dyn Bindable)
    }
}

// -----------------------------------------------------------------------------
// Box<[T]>

impl<T: Typed + Bindable> Typed for Box<[T]> {
    fn type_shape() -> Shape {
        Shape::new::<Self>(ShapeKind::Array {
            element: T::type_shape,
            len: None,
        })
        .with_coerce(coerce_collection::<Self, T>)
        .with_construct(construct_default::<Self>)
    }
}

impl<T: Typed + Bindable> Bindable for Box<[T]> {
    #[inline]
    fn bind_shape(&self) -> Shape {
        <Self as Typed>::type_shape()
    }

    #[inline]
    fn bind_ref(&self) -> BindRef<'_> {
        BindRef::Array(self)
    }

    #[inline]
    fn bind_mut(&mut self) -> BindMut<'_> {
        BindMut::Array(self)
    }

    #[inline]
    fn set(&mut self, value: Box<dyn Bindable>) -> Result<(), TypeMismatch> {
        set_by_take(self, value)
    }
}

impl<T: Typed + Bindable> BindArray for Box<[T]> {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn element_shape(&self) -> Shape {
        T::type_shape()
    }

    fn get_element(&self, index: usize) -> Option<&dyn Bindable> {
        <[T]>::get(self, index).map(|item| item as &dyn Bindable)
    }

    fn get_element_mut(&mut self, index: usize) -> Option<&mut dyn Bindable> {
        <[T]>::get_mut(self, index).map(|item| item as &mut dyn Bindable)
    }
}

#[cfg(test)]
mod tests {
    use crate::shape::ShapeKind;
    use crate::{BindRef, Bindable, Typed};

    #[test]
    fn fixed_arrays_know_their_length() {
        let shape = <[u8; 3]>::type_shape();
        assert!(matches!(shape.kind(), ShapeKind::Array { len: Some(3), .. }));
        assert!(!shape.can_construct());

        let value = [1_u8, 2, 3];
        let BindRef::Array(array) = value.bind_ref() else {
            panic!("expected an array view");
        };
        assert_eq!(array.len(), 3);
        assert!(array.get_element(3).is_none());
        assert_eq!(array.get_element(1).unwrap().downcast_ref::<u8>(), Some(&2));
    }
}
