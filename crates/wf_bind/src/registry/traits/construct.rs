use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::Bindable;
use crate::registry::FromType;

/// A constructor registered for a type.
///
/// Used when the binder must create a missing value along a path, and
/// preferred over the type's own default constructor. This is how types
/// without [`Default`] become instantiable.
#[derive(Clone)]
pub struct TypeTraitConstruct {
    func: Arc<dyn Fn() -> Box<dyn Bindable> + Send + Sync>,
}

impl TypeTraitConstruct {
    pub fn new<T, F>(func: F) -> Self
    where
        T: Bindable,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(move || Box::new(func()) as Box<dyn Bindable>),
        }
    }

    /// Builds a fresh value.
    #[inline]
    pub fn construct(&self) -> Box<dyn Bindable> {
        (self.func)()
    }
}

impl<T: Default + Bindable> FromType<T> for TypeTraitConstruct {
    fn from_type() -> Self {
        Self::new(T::default)
    }
}

impl core::fmt::Debug for TypeTraitConstruct {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeTraitConstruct").finish_non_exhaustive()
    }
}
