use alloc::boxed::Box;
use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::coerce::coerce_collection;
use crate::error::TypeMismatch;
use crate::impls::set_by_take;
use crate::ops::{BindMap, BindSet};
use crate::shape::{Shape, ShapeKind, construct_default};
use crate::{BindMut, BindRef, Bindable, Typed};

// -----------------------------------------------------------------------------
// HashSet

impl<T, S> Typed for HashSet<T, S>
where
    T: Typed + Bindable + Eq + Hash,
    S: BuildHasher + Default + 'static,
{
    fn type_shape() -> Shape {
        Shape::new::<Self>(ShapeKind::Set(T::type_shape))
            .with_coerce(coerce_collection::<Self, T>)
            .with_construct(construct_default::<Self>)
    }
}

impl<T, S> Bindable for HashSet<T, S>
where
    T: Typed + Bindable + Eq + Hash,
    S: BuildHasher + Default + 'static,
{
    #[inline]
    fn bind_shape(&self) -> Shape {
        <Self as Typed>::type_shape()
    }

    #[inline]
    fn bind_ref(&self) -> BindRef<'_> {
        BindRef::Set(self)
    }

    #[inline]
    fn bind_mut(&mut self) -> BindMut<'_> {
        BindMut::Set(self)
    }

    #[inline]
    fn set(&mut self, value: Box<dyn Bindable>) -> Result<(), TypeMismatch> {
        set_by_take(self, value)
    }
}

impl<T, S> BindSet for HashSet<T, S>
where
    T: Typed + Bindable + Eq + Hash,
    S: BuildHasher + Default + 'static,
{
    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    #[inline]
    fn element_shape(&self) -> Shape {
        T::type_shape()
    }

    fn contains_element(&self, value: &dyn Bindable) -> bool {
        value
            .downcast_ref::<T>()
            .is_some_and(|value| self.contains(value))
    }

    fn iter_elements(&self) -> Box<dyn Iterator<Item = &dyn Bindable> + '_> {
        Box::new(self.iter().map(|item| item as &dyn Bindable))
    }

    fn insert_element(&mut self, value: Box<dyn Bindable>) -> Result<bool, TypeMismatch> {
        Ok(self.insert(value.take::<T>()?))
    }
}

// -----------------------------------------------------------------------------
// HashMap

impl<K, V, S> Typed for HashMap<K, V, S>
where
    K: Typed + Bindable + Eq + Hash,
    V: Typed + Bindable,
    S: BuildHasher + Default + 'static,
{
    fn type_shape() -> Shape {
        Shape::new::<Self>(ShapeKind::Map {
            key: K::type_shape,
            value: V::type_shape,
        })
        .with_construct(construct_default::<Self>)
    }
}

impl<K, V, S> Bindable for HashMap<K, V, S>
where
    K: Typed + Bindable + Eq + Hash,
    V: Typed + Bindable,
    S: BuildHasher + Default + 'static,
{
    #[inline]
    fn bind_shape(&self) -> Shape {
        <Self as Typed>::type_shape()
    }

    #[inline]
    fn bind_ref(&self) -> BindRef<'_> {
        BindRef::Map(self)
    }

    #[inline]
    fn bind_mut(&mut self) -> BindMut<'_> {
        BindMut::Map(self)
    }

    #[inline]
    fn set(&mut self, value: Box<dyn Bindable>) -> Result<(), TypeMismatch> {
        set_by_take(self, value)
    }
}

impl<K, V, S> BindMap for HashMap<K, V, S>
where
    K: Typed + Bindable + Eq + Hash,
    V: Typed + Bindable,
    S: BuildHasher + Default + 'static,
{
    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    #[inline]
    fn key_shape(&self) -> Shape {
        K::type_shape()
    }

    #[inline]
    fn value_shape(&self) -> Shape {
        V::type_shape()
    }

    fn get_value(&self, key: &dyn Bindable) -> Option<&dyn Bindable> {
        let key = key.downcast_ref::<K>()?;
        self.get(key).map(|value| value as &dyn Bindable)
    }

    fn get_value_mut(&mut self, key: &dyn Bindable) -> Option<&mut dyn Bindable> {
        let key = key.downcast_ref::<K>()?;
        self.get_mut(key).map(|value| value as &mut dyn Bindable)
    }

    fn insert_entry(
        &mut self,
        key: Box<dyn Bindable>,
        value: Box<dyn Bindable>,
    ) -> Result<&mut dyn Bindable, TypeMismatch> {
        let key = key.take::<K>()?;
        let value = value.take::<V>()?;
        let slot = match self.entry(key) {
            Entry::Occupied(entry) => {
                let slot = entry.into_mut();
                *slot = value;
                slot
            }
            Entry::Vacant(entry) => entry.insert(value),
        };
        Ok(slot as &mut dyn Bindable)
    }

    fn iter_entries(&self) -> Box<dyn Iterator<Item = (&dyn Bindable, &dyn Bindable)> + '_> {
        Box::new(
            self.iter()
                .map(|(key, value)| (key as &dyn Bindable, value as &dyn Bindable)),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::string::String;

    use crate::shape::ShapeKind;
    use crate::{BindRef, Bindable, Typed};

    #[test]
    fn std_hash_collections() {
        assert!(matches!(
            <HashSet<String>>::type_shape().kind(),
            ShapeKind::Set(_)
        ));

        let mut value: HashMap<u8, bool> = HashMap::new();
        value.insert(1, true);
        let BindRef::Map(map) = value.bind_ref() else {
            panic!("expected a map view");
        };
        assert_eq!(map.get_value(&1_u8).unwrap().downcast_ref::<bool>(), Some(&true));
        assert_eq!(map.iter_entries().count(), 1);
    }
}
