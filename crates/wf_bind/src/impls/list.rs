use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::coerce::coerce_collection;
use crate::error::TypeMismatch;
use crate::impls::set_by_take;
use crate::ops::BindList;
use crate::shape::{Shape, ShapeKind, construct_default};
use crate::{BindMut, BindRef, Bindable, Typed};

macro_rules! impl_list {
    ($ty:ident, $push:ident) => {
        impl<T: Typed + Bindable> Typed for $ty<T> {
            fn type_shape() -> Shape {
                Shape::new::<Self>(ShapeKind::List(T::type_shape))
                    .with_coerce(coerce_collection::<Self, T>)
                    .with_construct(construct_default::<Self>)
            }
        }

        impl<T: Typed + Bindable> Bindable for $ty<T> {
            #[inline]
            fn bind_shape(&self) -> Shape {
                <Self as Typed>::type_shape()
            }

            #[inline]
            fn bind_ref(&self) -> BindRef<'_> {
                BindRef::List(self)
            }

            #[inline]
            fn bind_mut(&mut self) -> BindMut<'_> {
                BindMut::List(self)
            }

            #[inline]
            fn set(&mut self, value: Box<dyn Bindable>) -> Result<(), TypeMismatch> {
                set_by_take(self, value)
            }
        }

        impl<T: Typed + Bindable> BindList for $ty<T> {
            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }

            #[inline]
            fn element_shape(&self) -> Shape {
                T::type_shape()
            }

            fn get_element(&self, index: usize) -> Option<&dyn Bindable> {
                self.get(index).map(|item| item as &dyn Bindable)
            }

            fn get_element_mut(&mut self, index: usize) -> Option<&mut dyn Bindable> {
                self.get_mut(index).map(|item| item as &mut dyn Bindable)
            }

            fn push_element(&mut self, value: Box<dyn Bindable>) -> Result<(), TypeMismatch> {
                $ty::$push(self, value.take::<T>()?);
                Ok(())
            }
        }
    };
}

impl_list!(Vec, push);
impl_list!(VecDeque, push_back);
