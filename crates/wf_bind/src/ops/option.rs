use alloc::boxed::Box;

use crate::Bindable;
use crate::error::TypeMismatch;
use crate::shape::Shape;

/// A slot that may be empty, looked through by paths.
pub trait BindOption: Bindable {
    fn is_some(&self) -> bool;

    #[inline]
    fn is_none(&self) -> bool {
        !self.is_some()
    }

    fn inner_shape(&self) -> Shape;

    fn get_inner(&self) -> Option<&dyn Bindable>;

    fn get_inner_mut(&mut self) -> Option<&mut dyn Bindable>;

    /// Fills the slot with `value` and returns it.
    fn insert_inner(&mut self, value: Box<dyn Bindable>) -> Result<&mut dyn Bindable, TypeMismatch>;
}
