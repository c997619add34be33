/// Builds a [`TypeTrait`](crate::registry::TypeTrait) for the type `T`.
///
/// # Example
///
/// ```
/// # use wf_bind::registry::{FromType, TypeMeta, TypeTraitConstruct};
/// let mut meta = TypeMeta::of::<String>();
/// meta.insert_trait::<TypeTraitConstruct>(FromType::<String>::from_type());
/// assert!(meta.has_trait::<TypeTraitConstruct>());
/// ```
pub trait FromType<T> {
    fn from_type() -> Self;
}
