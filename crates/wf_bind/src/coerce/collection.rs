use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::slice;

use super::{BindContext, CoercionError};
use crate::{Bindable, Typed};

/// Converts every raw value to a `T`, in order, skipping blank ones.
pub fn coerce_each<T: Typed + Bindable>(
    cx: &BindContext<'_>,
    raw: &[String],
) -> Result<Vec<T>, CoercionError> {
    let shape = T::type_shape();
    let mut items = Vec::with_capacity(raw.len());
    for value in raw {
        if let Some(item) = cx.coerce(&shape, slice::from_ref(value))? {
            items.push(item.take::<T>()?);
        }
    }
    Ok(items)
}

/// Builds `C` from every raw value. The collection decides what happens
/// to duplicates.
pub fn coerce_collection<C, T>(
    cx: &BindContext<'_>,
    raw: &[String],
) -> Result<Option<Box<dyn Bindable>>, CoercionError>
where
    C: FromIterator<T> + Bindable,
    T: Typed + Bindable,
{
    let items = coerce_each::<T>(cx, raw)?;
    if items.is_empty() {
        return Ok(None);
    }
    Ok(Some(Box::new(items.into_iter().collect::<C>())))
}

/// Builds `[T; N]`, which needs exactly `N` values.
pub fn coerce_array<T: Typed + Bindable, const N: usize>(
    cx: &BindContext<'_>,
    raw: &[String],
) -> Result<Option<Box<dyn Bindable>>, CoercionError> {
    let items = coerce_each::<T>(cx, raw)?;
    if items.is_empty() {
        return Ok(None);
    }
    match <[T; N]>::try_from(items) {
        Ok(array) => Ok(Some(Box::new(array))),
        Err(_) => Err(CoercionError::bad_format::<[T; N]>(&raw.join(","))),
    }
}

/// Wraps the converted inner value in `Some`.
pub fn coerce_optional<T: Typed + Bindable>(
    cx: &BindContext<'_>,
    raw: &[String],
) -> Result<Option<Box<dyn Bindable>>, CoercionError> {
    match cx.coerce(&T::type_shape(), raw)? {
        Some(inner) => Ok(Some(Box::new(Some(inner.take::<T>()?)))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::{BTreeSet, VecDeque};
    use alloc::string::String;
    use alloc::vec::Vec;
    use alloc::{boxed::Box, vec};

    use crate::bind::BinderConfig;
    use crate::coerce::BindContext;
    use crate::error::CoercionError;
    use crate::registry::BindRegistry;
    use crate::{Bindable, Typed};

    fn raw(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| String::from(*v)).collect()
    }

    fn coerce<T: Typed + Bindable>(values: &[&str]) -> Result<Option<T>, CoercionError> {
        let registry = BindRegistry::new();
        let config = BinderConfig::default();
        let cx = BindContext::new(&registry, &config);
        cx.coerce(&T::type_shape(), &raw(values))
            .map(|v| v.map(|v| v.take::<T>().unwrap()))
    }

    #[test]
    fn lists_keep_order_and_duplicates() {
        assert_eq!(coerce::<Vec<i64>>(&["3", "1", "3"]), Ok(Some(vec![3, 1, 3])));
        assert_eq!(
            coerce::<VecDeque<u8>>(&["1", "2"]),
            Ok(Some(VecDeque::from([1, 2])))
        );
        assert_eq!(
            coerce::<Box<[i32]>>(&["5", "6"]),
            Ok(Some(Box::from([5, 6].as_slice())))
        );
    }

    #[test]
    fn sets_deduplicate() {
        let set = coerce::<BTreeSet<String>>(&[
            "testValue",
            "testValue",
            "testValue2",
            "testValue3",
        ])
        .unwrap()
        .unwrap();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn blank_elements_are_skipped() {
        assert_eq!(coerce::<Vec<i64>>(&["1", "", " ", "2"]), Ok(Some(vec![1, 2])));
        assert_eq!(coerce::<Vec<i64>>(&["", " "]), Ok(None));
        assert_eq!(
            coerce::<Vec<String>>(&["", "a"]),
            Ok(Some(vec![String::new(), String::from("a")]))
        );
    }

    #[test]
    fn first_bad_element_fails_the_whole_value() {
        assert_eq!(
            coerce::<Vec<i64>>(&["1", "two"]),
            Err(CoercionError::bad_format::<i64>("two"))
        );
    }

    #[test]
    fn fixed_arrays_need_exact_length() {
        assert_eq!(coerce::<[u8; 2]>(&["1", "2"]), Ok(Some([1, 2])));
        assert!(matches!(
            coerce::<[u8; 2]>(&["1"]),
            Err(CoercionError::BadFormat { .. })
        ));
    }

    #[test]
    fn optionals_wrap() {
        assert_eq!(coerce::<Option<u16>>(&["9"]), Ok(Some(Some(9))));
        assert_eq!(coerce::<Option<u16>>(&[""]), Ok(None));
        assert_eq!(coerce::<Option<String>>(&[""]), Ok(Some(Some(String::new()))));
    }

    #[test]
    fn scalars_use_the_first_value() {
        assert_eq!(coerce::<i64>(&["7", "8"]), Ok(Some(7)));
        assert_eq!(coerce::<i64>(&[]), Ok(None));
    }
}
