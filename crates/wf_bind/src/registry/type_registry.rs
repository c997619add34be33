use alloc::string::String;
use core::any::TypeId;

use wf_utils::TypeIdMap;
use wf_utils::hash::{HashMap, HashSet};

use crate::coerce::BindContext;
use crate::error::CoercionError;
use crate::registry::{FromType, TypeMeta, TypeTrait, TypeTraitCoerce, TypeTraitConstruct};
use crate::shape::Shape;
use crate::{Bindable, Typed};

// -----------------------------------------------------------------------------
// BindRegistry

/// Store of the types a binder knows about, with their overrides.
///
/// Built once at startup, then shared read-only by every
/// [`Binder`](crate::bind::Binder). Registering a type also registers the
/// types nested in it.
///
/// # Example
///
/// ```
/// use core::any::TypeId;
/// use wf_bind::registry::{BindRegistry, TypeTraitConstruct};
///
/// let mut registry = BindRegistry::new();
/// registry.register::<Vec<Option<u8>>>();
///
/// assert!(registry.contains(TypeId::of::<Option<u8>>()));
/// assert!(registry.get_with_type_name("Vec<Option<u8>>").is_some());
/// assert!(registry.get_type_trait::<TypeTraitConstruct>(TypeId::of::<u8>()).is_none());
/// ```
pub struct BindRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<String, TypeId>,
    ambiguous_names: HashSet<String>,
    auto_registered: bool,
}

impl Default for BindRegistry {
    /// See [`BindRegistry::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl BindRegistry {
    /// A registry without any type.
    pub fn empty() -> Self {
        Self {
            type_meta_table: TypeIdMap::new(),
            type_path_to_id: HashMap::default(),
            type_name_to_id: HashMap::default(),
            ambiguous_names: HashSet::default(),
            auto_registered: false,
        }
    }

    /// A registry with the primitive scalars and `String`.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<u128>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<i128>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<String>();
        registry
    }

    fn add_new_type_indices(&mut self, type_id: TypeId) {
        let Some(meta) = self.type_meta_table.get(&type_id) else {
            return;
        };
        let type_name = meta.type_name();

        if !self.ambiguous_names.contains(type_name) {
            if self.type_name_to_id.contains_key(type_name) {
                self.type_name_to_id.remove(type_name);
                self.ambiguous_names.insert(String::from(type_name));
            } else {
                self.type_name_to_id.insert(String::from(type_name), type_id);
            }
        }

        self.type_path_to_id.insert(meta.type_path(), type_id);
    }

    /// Registers `T` and, recursively, the types nested in it.
    ///
    /// Registering a type twice does nothing.
    #[inline]
    pub fn register<T: Typed>(&mut self) {
        self.register_shape(T::type_shape());
    }

    /// Registers the type described by `shape`, see [`register`](Self::register).
    ///
    /// Returns `false` if it was already present.
    pub fn register_shape(&mut self, shape: Shape) -> bool {
        let type_id = shape.type_id();
        if !self
            .type_meta_table
            .try_insert(type_id, || TypeMeta::from_shape(shape))
        {
            return false;
        }
        self.add_new_type_indices(type_id);
        log::trace!("registered bindable type `{}`", shape.type_path());

        for nested in shape.dependencies() {
            self.register_shape(nested);
        }
        true
    }

    /// Registers every non-generic type derived with
    /// `#[bind(auto_register)]`.
    ///
    /// Returns `true` once the platform supports it. Without the
    /// `auto_register` feature this does nothing and returns `false`.
    ///
    /// ```no_run
    /// # use core::any::TypeId;
    /// # use wf_bind::{derive::Bindable, registry::BindRegistry};
    /// #[derive(Bindable, Default)]
    /// #[bind(default, auto_register)]
    /// struct Query {
    ///     terms: Vec<String>,
    /// }
    ///
    /// let mut registry = BindRegistry::empty();
    /// assert!(registry.auto_register());
    /// assert!(registry.contains(TypeId::of::<Query>()));
    /// assert!(registry.contains(TypeId::of::<Vec<String>>()));
    /// ```
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            if !self.auto_registered {
                crate::__macro_exports::auto_register::__register_types(self);
            }
            self.auto_registered
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    #[cfg(feature = "auto_register")]
    #[inline]
    pub(crate) fn mark_auto_registered(&mut self) {
        self.auto_registered = true;
    }

    /// Attaches the type trait `D` to `T`, registering `T` first if needed.
    pub fn register_type_trait<T: Typed, D: TypeTrait + FromType<T>>(&mut self) {
        self.insert_type_trait::<T, D>(D::from_type());
    }

    /// Attaches `data` to `T`, registering `T` first if needed.
    pub fn insert_type_trait<T: Typed, D: TypeTrait>(&mut self, data: D) {
        self.register::<T>();
        if let Some(meta) = self.type_meta_table.get_mut(&TypeId::of::<T>()) {
            meta.insert_trait(data);
        }
    }

    /// Overrides how `T` is converted from one request value.
    ///
    /// The rule sees the first raw value, trimmed, and never sees blank
    /// input.
    pub fn register_coercion<T: Typed + Bindable>(
        &mut self,
        func: impl Fn(&str, &BindContext<'_>) -> Result<T, CoercionError> + Send + Sync + 'static,
    ) {
        self.insert_type_trait::<T, _>(TypeTraitCoerce::scalar(func));
    }

    /// Overrides how a missing `T` is created along a path.
    pub fn register_constructor<T: Typed + Bindable>(
        &mut self,
        func: impl Fn() -> T + Send + Sync + 'static,
    ) {
        self.insert_type_trait::<T, _>(TypeTraitConstruct::new(func));
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    #[inline]
    pub fn get_mut(&mut self, type_id: TypeId) -> Option<&mut TypeMeta> {
        self.type_meta_table.get_mut(&type_id)
    }

    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Looks a type up by its short name. Ambiguous names find nothing.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&TypeMeta> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns `true` if several registered types share the short name.
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    pub fn get_type_trait<D: TypeTrait>(&self, type_id: TypeId) -> Option<&D> {
        match self.get(type_id) {
            Some(meta) => meta.get_trait::<D>(),
            None => None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_meta_table.is_empty()
    }

    /// Visits the registered types in arbitrary order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }

    /// Visits the registered types carrying the type trait `D`.
    pub fn iter_with_trait<D: TypeTrait>(&self) -> impl Iterator<Item = (&TypeMeta, &D)> {
        self.type_meta_table
            .values()
            .filter_map(|meta| meta.get_trait::<D>().map(|data| (meta, data)))
    }
}

impl core::fmt::Debug for BindRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BindRegistry")
            .field("types", &self.type_meta_table.len())
            .field("auto_registered", &self.auto_registered)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::any::TypeId;

    use super::BindRegistry;
    use crate::registry::{TypeTraitCoerce, TypeTraitConstruct};

    mod a {
        #[derive(crate::derive::Bindable, Default)]
        #[bind(default)]
        pub struct Item {
            pub id: u32,
        }
    }

    mod b {
        use alloc::string::String;
        use alloc::vec::Vec;

        #[derive(crate::derive::Bindable, Default)]
        pub struct Item {
            pub tags: Vec<String>,
        }
    }

    #[test]
    fn new_registers_scalars() {
        let registry = BindRegistry::new();
        assert_eq!(registry.len(), 17);
        assert!(registry.contains(TypeId::of::<String>()));
        assert!(registry.get_with_type_path("alloc::string::String").is_some());
        assert!(BindRegistry::empty().is_empty());
    }

    #[test]
    fn register_walks_nested_types() {
        let mut registry = BindRegistry::empty();
        registry.register::<BTreeMap<String, Vec<i64>>>();
        assert!(registry.contains(TypeId::of::<String>()));
        assert!(registry.contains(TypeId::of::<Vec<i64>>()));
        assert!(registry.contains(TypeId::of::<i64>()));
        assert_eq!(registry.len(), 4);

        registry.register::<Vec<i64>>();
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn same_short_name_is_ambiguous() {
        let mut registry = BindRegistry::empty();
        registry.register::<a::Item>();
        registry.register::<b::Item>();
        assert!(registry.is_ambiguous("Item"));
        assert!(registry.get_with_type_name("Item").is_none());
        assert!(registry.contains(TypeId::of::<Vec<String>>()));
    }

    #[test]
    fn overrides_register_their_type() {
        let mut registry = BindRegistry::empty();
        registry.register_constructor(|| a::Item { id: 7 });
        registry.register_coercion::<u32>(|text, _| Ok(text.len() as u32));

        let ctor = registry
            .get_type_trait::<TypeTraitConstruct>(TypeId::of::<a::Item>())
            .unwrap();
        assert_eq!(ctor.construct().take::<a::Item>().unwrap().id, 7);
        assert!(
            registry
                .get_type_trait::<TypeTraitCoerce>(TypeId::of::<u32>())
                .is_some()
        );
        assert_eq!(registry.iter_with_trait::<TypeTraitConstruct>().count(), 1);
    }
}
