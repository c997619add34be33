use crate::Bindable;
use crate::shape::Shape;

/// A sequence whose length cannot change.
pub trait BindArray: Bindable {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn element_shape(&self) -> Shape;

    fn get_element(&self, index: usize) -> Option<&dyn Bindable>;

    fn get_element_mut(&mut self, index: usize) -> Option<&mut dyn Bindable>;
}
