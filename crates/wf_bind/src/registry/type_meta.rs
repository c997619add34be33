use alloc::boxed::Box;
use alloc::string::String;
use core::any::TypeId;
use core::fmt;

use wf_utils::TypeIdMap;

use crate::Typed;
use crate::registry::TypeTrait;
use crate::shape::Shape;

// -----------------------------------------------------------------------------
// TypeMeta

/// Runtime entry of a registered type: its [`Shape`] and a [`TypeTrait`] table.
///
/// # Example
///
/// ```
/// # use wf_bind::registry::{FromType, TypeMeta, TypeTraitConstruct};
/// let mut meta = TypeMeta::of::<String>();
/// meta.insert_trait::<TypeTraitConstruct>(FromType::<String>::from_type());
///
/// let ctor = meta.get_trait::<TypeTraitConstruct>().unwrap();
/// assert_eq!(ctor.construct().take::<String>().unwrap(), "");
/// assert_eq!(meta.type_name(), "String");
/// ```
pub struct TypeMeta {
    shape: Shape,
    type_name: String,
    trait_table: TypeIdMap<Box<dyn TypeTrait>>,
}

impl TypeMeta {
    #[inline]
    pub fn of<T: Typed>() -> Self {
        Self::from_shape(T::type_shape())
    }

    pub fn from_shape(shape: Shape) -> Self {
        Self {
            type_name: shape.type_name(),
            shape,
            trait_table: TypeIdMap::new(),
        }
    }

    #[inline]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.shape.type_id()
    }

    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.shape.type_path()
    }

    /// The type path without module prefixes.
    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Inserts a [`TypeTrait`], replacing one of the same type.
    #[inline]
    pub fn insert_trait<T: TypeTrait>(&mut self, data: T) {
        self.trait_table.insert_type::<T>(Box::new(data));
    }

    pub fn remove_trait<T: TypeTrait>(&mut self) -> Option<Box<dyn TypeTrait>> {
        self.trait_table.remove(&TypeId::of::<T>())
    }

    pub fn get_trait<T: TypeTrait>(&self) -> Option<&T> {
        match self.trait_table.get_type::<T>() {
            Some(data) => data.downcast_ref::<T>(),
            None => None,
        }
    }

    pub fn get_trait_mut<T: TypeTrait>(&mut self) -> Option<&mut T> {
        match self.trait_table.get_mut(&TypeId::of::<T>()) {
            Some(data) => data.downcast_mut::<T>(),
            None => None,
        }
    }

    #[inline]
    pub fn has_trait<T: TypeTrait>(&self) -> bool {
        self.trait_table.contains_type::<T>()
    }

    #[inline]
    pub fn trait_len(&self) -> usize {
        self.trait_table.len()
    }
}

impl Clone for TypeMeta {
    fn clone(&self) -> Self {
        let mut trait_table = TypeIdMap::with_capacity(self.trait_table.len());
        for (id, data) in self.trait_table.iter() {
            trait_table.insert(*id, (**data).clone_type_trait());
        }
        Self {
            shape: self.shape,
            type_name: self.type_name.clone(),
            trait_table,
        }
    }
}

impl fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMeta")
            .field("type_path", &self.type_path())
            .field("traits", &self.trait_len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::TypeMeta;
    use crate::registry::{FromType, TypeTraitConstruct};

    #[derive(Clone)]
    struct Marker(u8);

    #[test]
    fn traits_are_keyed_by_type() {
        let mut meta = TypeMeta::of::<Vec<u8>>();
        assert_eq!(meta.trait_len(), 0);

        meta.insert_trait(Marker(1));
        meta.insert_trait(Marker(2));
        meta.insert_trait::<TypeTraitConstruct>(FromType::<Vec<u8>>::from_type());

        assert_eq!(meta.trait_len(), 2);
        assert_eq!(meta.get_trait::<Marker>().map(|m| m.0), Some(2));

        meta.get_trait_mut::<Marker>().unwrap().0 = 5;
        let copy = meta.clone();
        assert_eq!(copy.get_trait::<Marker>().map(|m| m.0), Some(5));
        assert!(copy.has_trait::<TypeTraitConstruct>());

        assert!(meta.remove_trait::<Marker>().is_some());
        assert!(!meta.has_trait::<Marker>());
        assert_eq!(meta.type_name(), "Vec<u8>");
    }

    #[test]
    fn clones_own_their_traits() {
        let mut meta = TypeMeta::of::<String>();
        meta.insert_trait(Marker(3));
        meta.insert_trait::<TypeTraitConstruct>(FromType::<String>::from_type());

        let copy = meta.clone();
        meta.get_trait_mut::<Marker>().unwrap().0 = 9;

        assert_eq!(copy.get_trait::<Marker>().map(|m| m.0), Some(3));
        assert_eq!(meta.get_trait::<Marker>().map(|m| m.0), Some(9));

        let ctor = copy.get_trait::<TypeTraitConstruct>().unwrap();
        assert_eq!(ctor.construct().take::<String>().unwrap(), "");
    }
}
