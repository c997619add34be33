use alloc::boxed::Box;
use alloc::string::String;
use core::slice;

use super::{CoercionError, FromParam};
use crate::Bindable;
use crate::bind::BinderConfig;
use crate::error::AccessError;
use crate::registry::{BindRegistry, TypeTraitCoerce, TypeTraitConstruct};
use crate::shape::Shape;

/// Read-only state shared by every step of a bind pass.
///
/// Holds the registry of conversion and constructor overrides, and the
/// binder configuration.
#[derive(Clone, Copy)]
pub struct BindContext<'a> {
    registry: &'a BindRegistry,
    config: &'a BinderConfig,
}

impl<'a> BindContext<'a> {
    #[inline]
    pub const fn new(registry: &'a BindRegistry, config: &'a BinderConfig) -> Self {
        Self { registry, config }
    }

    #[inline]
    pub const fn registry(&self) -> &'a BindRegistry {
        self.registry
    }

    #[inline]
    pub const fn config(&self) -> &'a BinderConfig {
        self.config
    }

    /// Converts `raw` into a value of `shape`.
    ///
    /// `Ok(None)` means nothing should be assigned.
    pub fn coerce(
        &self,
        shape: &Shape,
        raw: &[String],
    ) -> Result<Option<Box<dyn Bindable>>, CoercionError> {
        if let Some(rule) = self
            .registry
            .get_type_trait::<TypeTraitCoerce>(shape.type_id())
        {
            return rule.coerce(self, raw);
        }

        match shape.coerce_fn() {
            Some(coerce) => coerce(self, raw),
            None => Err(CoercionError::Unsupported {
                type_path: shape.type_path(),
            }),
        }
    }

    /// Converts a map key taken from a path.
    pub fn coerce_key(&self, shape: &Shape, key: &str) -> Result<Box<dyn Bindable>, AccessError> {
        let raw = String::from(key);
        match self.coerce(shape, slice::from_ref(&raw)) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(AccessError::BadKey {
                key: raw,
                cause: CoercionError::BadFormat {
                    value: String::from(key),
                    type_path: shape.type_path(),
                },
            }),
            Err(cause) => Err(AccessError::BadKey { key: raw, cause }),
        }
    }

    /// Reads one scalar, applying the trimming and blank-value policy.
    pub fn parse_scalar<T: FromParam>(&self, text: &str) -> Result<Option<T>, CoercionError> {
        if T::VERBATIM {
            return T::from_param(text, self).map(Some);
        }

        let text = if self.config.trim_values {
            text.trim()
        } else {
            text
        };
        if text.trim().is_empty() {
            return Ok(None);
        }
        T::from_param(text, self).map(Some)
    }

    /// Builds a fresh value of `shape`, preferring a registered constructor.
    pub fn construct(&self, shape: &Shape) -> Result<Box<dyn Bindable>, AccessError> {
        if let Some(ctor) = self
            .registry
            .get_type_trait::<TypeTraitConstruct>(shape.type_id())
        {
            return Ok(ctor.construct());
        }

        match shape.construct_fn() {
            Some(construct) => Ok(construct()),
            None => Err(AccessError::NotInstantiable {
                type_path: shape.type_path(),
            }),
        }
    }

    /// Fails like [`construct`](Self::construct) would, without building anything.
    pub fn require_construct(&self, shape: &Shape) -> Result<(), AccessError> {
        if shape.can_construct()
            || self
                .registry
                .get_type_trait::<TypeTraitConstruct>(shape.type_id())
                .is_some()
        {
            Ok(())
        } else {
            Err(AccessError::NotInstantiable {
                type_path: shape.type_path(),
            })
        }
    }

    /// Guards list growth against absurd indices.
    #[inline]
    pub fn check_index(&self, index: usize) -> Result<(), AccessError> {
        let limit = self.config.max_index;
        if index > limit {
            Err(AccessError::IndexLimit { index, limit })
        } else {
            Ok(())
        }
    }
}

impl core::fmt::Debug for BindContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BindContext")
            .field("types", &self.registry.len())
            .field("config", self.config)
            .finish()
    }
}
