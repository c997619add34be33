use alloc::boxed::Box;
use alloc::string::String;

use super::{BindContext, CoercionError};
use crate::Bindable;

// -----------------------------------------------------------------------------
// FromParam

/// Conversion of one request string into a scalar.
///
/// `#[derive(Bindable)]` implements this for unit-only enums, matching
/// variant names exactly. Other scalar types implement it by hand and
/// derive with `#[bind(scalar)]`.
///
/// # Example
///
/// ```
/// use wf_bind::coerce::{BindContext, FromParam};
/// use wf_bind::derive::Bindable;
/// use wf_bind::error::CoercionError;
///
/// #[derive(Bindable, Debug, PartialEq)]
/// #[bind(scalar)]
/// struct Percent(u8);
///
/// impl FromParam for Percent {
///     fn from_param(text: &str, _: &BindContext<'_>) -> Result<Self, CoercionError> {
///         text.strip_suffix('%')
///             .and_then(|n| n.parse().ok())
///             .filter(|n| *n <= 100)
///             .map(Percent)
///             .ok_or_else(|| CoercionError::bad_format::<Self>(text))
///     }
/// }
/// ```
pub trait FromParam: Sized {
    /// Strings keep their raw text: no trimming, and empty is a value.
    const VERBATIM: bool = false;

    fn from_param(text: &str, cx: &BindContext<'_>) -> Result<Self, CoercionError>;
}

/// The [`CoerceFn`](crate::shape::CoerceFn) of every [`FromParam`] scalar.
pub fn coerce_scalar<T: FromParam + Bindable>(
    cx: &BindContext<'_>,
    raw: &[String],
) -> Result<Option<Box<dyn Bindable>>, CoercionError> {
    let Some(first) = raw.first() else {
        return Ok(None);
    };
    Ok(cx
        .parse_scalar::<T>(first)?
        .map(|value| Box::new(value) as Box<dyn Bindable>))
}

// -----------------------------------------------------------------------------
// Built-in scalars

impl FromParam for String {
    const VERBATIM: bool = true;

    #[inline]
    fn from_param(text: &str, _: &BindContext<'_>) -> Result<Self, CoercionError> {
        Ok(text.into())
    }
}

impl FromParam for char {
    fn from_param(text: &str, _: &BindContext<'_>) -> Result<Self, CoercionError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(CoercionError::bad_format::<char>(text)),
        }
    }
}

impl FromParam for bool {
    fn from_param(text: &str, _: &BindContext<'_>) -> Result<Self, CoercionError> {
        const TRUE: [&str; 5] = ["true", "t", "yes", "y", "on"];
        const FALSE: [&str; 5] = ["false", "f", "no", "n", "off"];

        if TRUE.iter().any(|t| t.eq_ignore_ascii_case(text)) {
            return Ok(true);
        }
        if FALSE.iter().any(|f| f.eq_ignore_ascii_case(text)) {
            return Ok(false);
        }
        // numeric flags, non-zero is true
        text.parse::<i64>()
            .map(|n| n != 0)
            .map_err(|_| CoercionError::bad_format::<bool>(text))
    }
}

macro_rules! impl_from_param_by_parse {
    ($($ty:ty),* $(,)?) => {$(
        impl FromParam for $ty {
            #[inline]
            fn from_param(text: &str, _: &BindContext<'_>) -> Result<Self, CoercionError> {
                text.parse::<$ty>().map_err(|_| CoercionError::bad_format::<$ty>(text))
            }
        }
    )*};
}

impl_from_param_by_parse!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::FromParam;
    use crate::bind::BinderConfig;
    use crate::coerce::BindContext;
    use crate::error::CoercionError;
    use crate::registry::BindRegistry;

    fn with_cx(f: impl FnOnce(&BindContext<'_>)) {
        let registry = BindRegistry::new();
        let config = BinderConfig::default();
        f(&BindContext::new(&registry, &config));
    }

    #[test]
    fn numbers() {
        with_cx(|cx| {
            assert_eq!(i64::from_param("-42", cx), Ok(-42));
            assert_eq!(u8::from_param("+7", cx), Ok(7));
            assert_eq!(f64::from_param("2.5", cx), Ok(2.5));
            assert_eq!(
                u8::from_param("256", cx),
                Err(CoercionError::bad_format::<u8>("256"))
            );
            assert!(i32::from_param("12abc", cx).is_err());
        });
    }

    #[test]
    fn booleans() {
        with_cx(|cx| {
            for text in ["true", "TRUE", "t", "Yes", "y", "on", "1", "-3"] {
                assert_eq!(bool::from_param(text, cx), Ok(true), "{text}");
            }
            for text in ["false", "F", "no", "N", "off", "0"] {
                assert_eq!(bool::from_param(text, cx), Ok(false), "{text}");
            }
            assert!(bool::from_param("maybe", cx).is_err());
        });
    }

    #[test]
    fn chars_and_strings() {
        with_cx(|cx| {
            assert_eq!(char::from_param("x", cx), Ok('x'));
            assert!(char::from_param("xy", cx).is_err());
            assert_eq!(String::from_param(" raw ", cx), Ok(String::from(" raw ")));
        });
    }

    #[test]
    fn blank_scalars_mean_no_value() {
        with_cx(|cx| {
            assert_eq!(cx.parse_scalar::<i64>("   "), Ok(None));
            assert_eq!(cx.parse_scalar::<i64>(" 12 "), Ok(Some(12)));
            assert_eq!(cx.parse_scalar::<String>(""), Ok(Some(String::new())));
            assert_eq!(cx.parse_scalar::<String>(" a "), Ok(Some(String::from(" a "))));
        });
    }
}
