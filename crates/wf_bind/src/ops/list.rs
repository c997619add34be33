use alloc::boxed::Box;

use crate::Bindable;
use crate::error::TypeMismatch;
use crate::shape::Shape;

/// A sequence that can grow at its end.
pub trait BindList: Bindable {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The declared element shape.
    fn element_shape(&self) -> Shape;

    fn get_element(&self, index: usize) -> Option<&dyn Bindable>;

    fn get_element_mut(&mut self, index: usize) -> Option<&mut dyn Bindable>;

    /// Appends `value`, which must hold the element type.
    fn push_element(&mut self, value: Box<dyn Bindable>) -> Result<(), TypeMismatch>;
}
