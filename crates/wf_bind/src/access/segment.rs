use alloc::boxed::Box;

use super::{look_through, look_through_mut};
use crate::coerce::BindContext;
use crate::error::AccessError;
use crate::path::PathSegment;
use crate::{BindMut, BindRef, Bindable};

impl PathSegment {
    fn unknown_property(&self, name: &str, type_path: &'static str) -> AccessError {
        AccessError::UnknownProperty {
            name: name.into(),
            type_path,
        }
    }

    fn not_indexable(&self, type_path: &'static str) -> AccessError {
        AccessError::NotIndexable {
            segment: self.clone(),
            type_path,
        }
    }

    fn absent(&self) -> AccessError {
        AccessError::Absent {
            segment: self.clone(),
        }
    }

    /// Reads the value this segment selects in `value`.
    pub fn access<'a>(
        &self,
        cx: &BindContext<'_>,
        value: &'a dyn Bindable,
    ) -> Result<&'a dyn Bindable, AccessError> {
        let value = look_through(value, self)?;
        let type_path = value.type_path();

        match (self, value.bind_ref()) {
            (Self::Property(name), BindRef::Bean(bean)) => bean
                .property(name)
                .ok_or_else(|| self.unknown_property(name, type_path)),
            (Self::Index(index), BindRef::List(list)) => {
                list.get_element(*index).ok_or_else(|| self.absent())
            }
            (Self::Index(index), BindRef::Array(array)) => array
                .get_element(*index)
                .ok_or_else(|| self.not_indexable(type_path)),
            (Self::Index(_) | Self::Key(_), BindRef::Map(map)) => {
                let key = cx.coerce_key(&map.key_shape(), &self.key_text())?;
                map.get_value(&*key).ok_or_else(|| self.absent())
            }
            (Self::Property(name), _) => Err(self.unknown_property(name, type_path)),
            _ => Err(self.not_indexable(type_path)),
        }
    }

    /// Selects the value this segment designates in `value` for writing.
    ///
    /// With `create`, missing list slots, map entries and empty options are
    /// constructed on the way.
    pub fn access_mut<'a>(
        &self,
        cx: &BindContext<'_>,
        value: &'a mut dyn Bindable,
        create: bool,
    ) -> Result<&'a mut dyn Bindable, AccessError> {
        let value = look_through_mut(cx, value, create, self)?;
        let type_path = value.type_path();

        match (self, value.bind_mut()) {
            (Self::Property(name), BindMut::Bean(bean)) => bean
                .property_mut(name)
                .ok_or_else(|| self.unknown_property(name, type_path)),
            (Self::Index(index), BindMut::List(list)) => {
                let index = *index;
                if create {
                    cx.check_index(index)?;
                    while list.len() <= index {
                        let item = cx.construct(&list.element_shape())?;
                        list.push_element(item)?;
                    }
                }
                list.get_element_mut(index).ok_or_else(|| self.absent())
            }
            (Self::Index(index), BindMut::Array(array)) => array
                .get_element_mut(*index)
                .ok_or_else(|| self.not_indexable(type_path)),
            (Self::Index(_) | Self::Key(_), BindMut::Map(map)) => {
                let key = cx.coerce_key(&map.key_shape(), &self.key_text())?;
                if map.get_value(&*key).is_some() {
                    return map.get_value_mut(&*key).ok_or_else(|| self.absent());
                }
                if !create {
                    return Err(self.absent());
                }
                let fresh = cx.construct(&map.value_shape())?;
                Ok(map.insert_entry(key, fresh)?)
            }
            (Self::Property(name), _) => Err(self.unknown_property(name, type_path)),
            _ => Err(self.not_indexable(type_path)),
        }
    }

    /// Stores `value` in the slot this segment designates in `parent`.
    ///
    /// Lists are padded with constructed elements up to the index, maps get
    /// a new or replaced entry, everything else is overwritten in place.
    pub fn assign(
        &self,
        cx: &BindContext<'_>,
        parent: &mut dyn Bindable,
        value: Box<dyn Bindable>,
    ) -> Result<(), AccessError> {
        let parent = look_through_mut(cx, parent, true, self)?;
        let type_path = parent.type_path();

        match (self, parent.bind_mut()) {
            (Self::Property(name), BindMut::Bean(bean)) => bean
                .property_mut(name)
                .ok_or_else(|| self.unknown_property(name, type_path))?
                .set(value)?,
            (Self::Index(index), BindMut::List(list)) => {
                let index = *index;
                cx.check_index(index)?;
                while list.len() < index {
                    let item = cx.construct(&list.element_shape())?;
                    list.push_element(item)?;
                }
                match list.get_element_mut(index) {
                    Some(slot) => slot.set(value)?,
                    None => list.push_element(value)?,
                }
            }
            (Self::Index(index), BindMut::Array(array)) => array
                .get_element_mut(*index)
                .ok_or_else(|| self.not_indexable(type_path))?
                .set(value)?,
            (Self::Index(_) | Self::Key(_), BindMut::Map(map)) => {
                let key = cx.coerce_key(&map.key_shape(), &self.key_text())?;
                map.insert_entry(key, value)?;
            }
            (Self::Property(name), _) => return Err(self.unknown_property(name, type_path)),
            _ => return Err(self.not_indexable(type_path)),
        }
        Ok(())
    }
}
