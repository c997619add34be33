use alloc::boxed::Box;

use crate::Bindable;
use crate::error::TypeMismatch;
use crate::shape::Shape;

/// A collection without duplicates. Sets are bound as a whole and cannot
/// be indexed by a path.
pub trait BindSet: Bindable {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn element_shape(&self) -> Shape;

    fn contains_element(&self, value: &dyn Bindable) -> bool;

    fn iter_elements(&self) -> Box<dyn Iterator<Item = &dyn Bindable> + '_>;

    /// Inserts `value`, returning `false` if an equal element was present.
    fn insert_element(&mut self, value: Box<dyn Bindable>) -> Result<bool, TypeMismatch>;
}
