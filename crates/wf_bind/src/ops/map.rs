use alloc::boxed::Box;

use crate::Bindable;
use crate::error::TypeMismatch;
use crate::shape::Shape;

/// Entries addressed by a typed key.
///
/// Keys arrive as text from the path and are converted to the declared key
/// type before lookup.
pub trait BindMap: Bindable {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn key_shape(&self) -> Shape;

    fn value_shape(&self) -> Shape;

    /// Looks up `key`. A key of the wrong type is never present.
    fn get_value(&self, key: &dyn Bindable) -> Option<&dyn Bindable>;

    fn get_value_mut(&mut self, key: &dyn Bindable) -> Option<&mut dyn Bindable>;

    /// Inserts or replaces an entry and returns the stored value.
    fn insert_entry(
        &mut self,
        key: Box<dyn Bindable>,
        value: Box<dyn Bindable>,
    ) -> Result<&mut dyn Bindable, TypeMismatch>;

    fn iter_entries(&self) -> Box<dyn Iterator<Item = (&dyn Bindable, &dyn Bindable)> + '_>;
}
