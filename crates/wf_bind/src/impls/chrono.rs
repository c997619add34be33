use alloc::boxed::Box;

use chrono::{NaiveDate, NaiveDateTime};

use crate::coerce::{BindContext, FromParam};
use crate::error::{CoercionError, TypeMismatch};
use crate::impls::set_by_take;
use crate::shape::{Shape, construct_default};
use crate::{BindMut, BindRef, Bindable, Typed};

fn parse_date(text: &str, cx: &BindContext<'_>) -> Option<NaiveDate> {
    cx.config()
        .date_formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

/// Tries every configured date format in order.
impl FromParam for NaiveDate {
    fn from_param(text: &str, cx: &BindContext<'_>) -> Result<Self, CoercionError> {
        parse_date(text, cx).ok_or_else(|| CoercionError::bad_format::<Self>(text))
    }
}

/// Tries every configured date-time format, then falls back to a date at
/// midnight.
impl FromParam for NaiveDateTime {
    fn from_param(text: &str, cx: &BindContext<'_>) -> Result<Self, CoercionError> {
        cx.config()
            .datetime_formats
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .or_else(|| parse_date(text, cx).and_then(|date| date.and_hms_opt(0, 0, 0)))
            .ok_or_else(|| CoercionError::bad_format::<Self>(text))
    }
}

macro_rules! impl_chrono_scalar {
    ($($ty:ty),*) => {$(
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

impl_chrono_scalar!(NaiveDate, NaiveDateTime);
