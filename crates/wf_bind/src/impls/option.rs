use alloc::boxed::Box;

use crate::coerce::coerce_optional;
use crate::error::TypeMismatch;
use crate::impls::set_by_take;
use crate::ops::BindOption;
use crate::shape::{Shape, ShapeKind, construct_default};
use crate::{BindMut, BindRef, Bindable, Typed};

impl<T: Typed + Bindable> Typed for Option<T> {
    fn type_shape() -> Shape {
        Shape::new::<Self>(ShapeKind::Optional(T::type_shape))
            .with_coerce(coerce_optional::<T>)
            .with_construct(construct_default::<Self>)
    }
}

impl<T: Typed + Bindable> Bindable for Option<T> {
    #[inline]
    fn bind_shape(&self) -> Shape {
        <Self as Typed>::type_shape()
    }

    #[inline]
    fn bind_ref(&self) -> BindRef<'_> {
        BindRef::Optional(self)
    }

    #[inline]
    fn bind_mut(&mut self) -> BindMut<'_> {
        BindMut::Optional(self)
    }

    #[inline]
    fn set(&mut self, value: Box<dyn Bindable>) -> Result<(), TypeMismatch> {
        set_by_take(self, value)
    }
}

impl<T: Typed + Bindable> BindOption for Option<T> {
    #[inline]
    fn is_some(&self) -> bool {
        Option::is_some(self)
    }

    #[inline]
    fn inner_shape(&self) -> Shape {
        T::type_shape()
    }

    fn get_inner(&self) -> Option<&dyn Bindable> {
        self.as_ref().map(|inner| inner as &dyn Bindable)
    }

    fn get_inner_mut(&mut self) -> Option<&mut dyn Bindable> {
        self.as_mut().map(|inner| inner as &mut dyn Bindable)
    }

    fn insert_inner(&mut self, value: Box<dyn Bindable>) -> Result<&mut dyn Bindable, TypeMismatch> {
        let inner = value.take::<T>()?;
        Ok(self.insert(inner) as &mut dyn Bindable)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use crate::BindMut;
    use crate::Bindable;

    #[test]
    fn insert_inner_fills_the_slot() {
        let mut value: Option<i32> = None;
        let BindMut::Optional(slot) = value.bind_mut() else {
            panic!("expected an optional view");
        };
        assert!(slot.is_none());
        assert!(slot.insert_inner(Box::new(5_u8)).is_err());
        let inner = slot.insert_inner(Box::new(4_i32)).unwrap();
        *inner.downcast_mut::<i32>().unwrap() += 1;
        assert_eq!(value, Some(5));
    }
}
