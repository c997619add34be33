use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;

use crate::Bindable;
use crate::coerce::{BindContext, FromParam, coerce_scalar};
use crate::error::CoercionError;
use crate::registry::FromType;

type CoerceRule = dyn Fn(&BindContext<'_>, &[String]) -> Result<Option<Box<dyn Bindable>>, CoercionError>
    + Send
    + Sync;

/// A conversion rule registered for a type.
///
/// Takes precedence over the conversion built into the type's
/// [`Shape`](crate::shape::Shape), for the type itself and wherever it
/// appears as a collection element.
///
/// # Example
///
/// ```
/// use wf_bind::coerce::BindContext;
/// use wf_bind::error::CoercionError;
/// use wf_bind::registry::{BindRegistry, TypeTraitCoerce};
///
/// let mut registry = BindRegistry::new();
/// registry.register_coercion::<u32>(|text, _| {
///     u32::from_str_radix(text, 16).map_err(|_| CoercionError::bad_format::<u32>(text))
/// });
///
/// let config = Default::default();
/// let cx = BindContext::new(&registry, &config);
/// let value = cx.coerce(&<u32 as wf_bind::Typed>::type_shape(), &["ff".into()]);
/// assert_eq!(value.unwrap().unwrap().take::<u32>().unwrap(), 255);
/// ```
#[derive(Clone)]
pub struct TypeTraitCoerce {
    func: Arc<CoerceRule>,
}

impl TypeTraitCoerce {
    /// A rule seeing every raw value of the parameter.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&BindContext<'_>, &[String]) -> Result<Option<Box<dyn Bindable>>, CoercionError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// A scalar rule: reads the first value, trimmed, and treats blank
    /// input as no value.
    pub fn scalar<T, F>(func: F) -> Self
    where
        T: Bindable,
        F: Fn(&str, &BindContext<'_>) -> Result<T, CoercionError> + Send + Sync + 'static,
    {
        Self::new(move |cx, raw| {
            let Some(first) = raw.first() else {
                return Ok(None);
            };
            let text = if cx.config().trim_values {
                first.trim()
            } else {
                first.as_str()
            };
            if text.trim().is_empty() {
                return Ok(None);
            }
            func(text, cx).map(|value| Some(Box::new(value) as Box<dyn Bindable>))
        })
    }

    #[inline]
    pub fn coerce(
        &self,
        cx: &BindContext<'_>,
        raw: &[String],
    ) -> Result<Option<Box<dyn Bindable>>, CoercionError> {
        (self.func)(cx, raw)
    }
}

impl<T: FromParam + Bindable> FromType<T> for TypeTraitCoerce {
    fn from_type() -> Self {
        Self::new(coerce_scalar::<T>)
    }
}

impl core::fmt::Debug for TypeTraitCoerce {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeTraitCoerce").finish_non_exhaustive()
    }
}
