//! Items referenced by `#[derive(Bindable)]` output.

pub mod alloc_utils {
    pub use alloc::boxed::Box;
}

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::Typed;
    use crate::registry::BindRegistry;

    /// A registration function collected by `inventory`.
    pub struct __AutoRegisterFunc(pub fn(&mut BindRegistry));

    inventory::collect!(__AutoRegisterFunc);

    /// Registers `Self`, used through `<T as __RegisterType>::__register`.
    pub trait __RegisterType {
        fn __register(registry: &mut BindRegistry);
    }

    impl<T: Typed> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut BindRegistry) {
            registry.register::<T>();
        }
    }

    // Always present: if it runs, `inventory` works on this platform.
    inventory::submit! {
        __AutoRegisterFunc(BindRegistry::mark_auto_registered)
    }

    pub fn __register_types(registry: &mut BindRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }
}
