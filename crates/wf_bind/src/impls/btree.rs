use alloc::boxed::Box;
use alloc::collections::btree_map::Entry;
use alloc::collections::{BTreeMap, BTreeSet};

use crate::coerce::coerce_collection;
use crate::error::TypeMismatch;
use crate::impls::set_by_take;
use crate::ops::{BindMap, BindSet};
use crate::shape::{Shape, ShapeKind, construct_default};
use crate::{BindMut, BindRef, Bindable, Typed};

// -----------------------------------------------------------------------------
// BTreeSet

impl<T: Typed + Bindable + Ord> Typed for BTreeSet<T> {
    fn type_shape() -> Shape {
        Shape::new::<Self>(ShapeKind::Set(T::type_shape))
            .with_coerce(coerce_collection::<Self, T>)
            .with_construct(construct_default::<Self>)
    }
}

impl<T: Typed + Bindable + Ord> Bindable for BTreeSet<T> {
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

impl<T: Typed + Bindable + Ord> BindSet for BTreeSet<T> {
    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
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
// BTreeMap

impl<K, V> Typed for BTreeMap<K, V>
where
    K: Typed + Bindable + Ord,
    V: Typed + Bindable,
{
    fn type_shape() -> Shape {
        Shape::new::<Self>(ShapeKind::Map {
            key: K::type_shape,
            value: V::type_shape,
        })
        .with_construct(construct_default::<Self>)
    }
}

impl<K, V> Bindable for BTreeMap<K, V>
where
    K: Typed + Bindable + Ord,
    V: Typed + Bindable,
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

impl<K, V> BindMap for BTreeMap<K, V>
where
    K: Typed + Bindable + Ord,
    V: Typed + Bindable,
{
    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
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
