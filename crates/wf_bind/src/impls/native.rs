use alloc::boxed::Box;
use alloc::string::String;

use crate::error::TypeMismatch;
use crate::impls::set_by_take;
use crate::shape::{Shape, construct_default};
use crate::{BindMut, BindRef, Bindable, Typed};

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl Typed for $ty {
            fn type_shape() -> Shape {
                Shape::scalar::<Self>().with_construct(construct_default::<Self>)
            }
        }

        impl Bindable for $ty {
            #[inline]
            fn bind_shape(&self) -> Shape {
                <Self as Typed>::type_shape()
            }

            #[inline]
            fn bind_ref(&self) -> BindRef<'_> {
                BindRef::Scalar(self)
            }

            #[inline]
            fn bind_mut(&mut self) -> BindMut<'_> {
                BindMut::Scalar(self)
            }

            #[inline]
            fn set(&mut self, value: Box<dyn Bindable>) -> Result<(), TypeMismatch> {
                set_by_take(self, value)
            }
        }
    )*};
}

impl_scalar!(
    bool, char, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::shape::ShapeKind;
    use crate::{BindMut, Bindable, Typed};

    #[test]
    fn scalars_replace_wholesale() {
        let mut value = 1_u64;
        value.set(Box::new(9_u64)).unwrap();
        assert_eq!(value, 9);

        let err = value.set(Box::new(String::from("9"))).unwrap_err();
        assert_eq!(err.expected, "u64");
        assert!(matches!(value.bind_mut(), BindMut::Scalar(_)));
        assert!(matches!(char::type_shape().kind(), ShapeKind::Scalar));
    }
}
