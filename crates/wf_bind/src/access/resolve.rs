use crate::coerce::BindContext;
use crate::error::AccessError;
use crate::path::PathSegment;
use crate::shape::{Shape, ShapeKind};
use crate::{BindRef, Bindable};

/// A position of the shape walk: the declared shape, and the live value
/// when one is being inspected and already exists.
pub(super) struct Cursor<'v> {
    pub shape: Shape,
    pub value: Option<&'v dyn Bindable>,
}

/// Applies `segment` to the cursor without touching any value.
///
/// With `live` set, the walk also checks what the current values imply:
/// slots past the end of a list, missing map entries and empty options must
/// be constructible, and arrays are bounded by their actual length.
pub(super) fn step<'v>(
    cx: &BindContext<'_>,
    cursor: Cursor<'v>,
    segment: &PathSegment,
    terminal: bool,
    live: bool,
) -> Result<Cursor<'v>, AccessError> {
    let Cursor {
        mut shape,
        mut value,
    } = cursor;

    while let ShapeKind::Optional(inner) = shape.kind() {
        shape = inner();
        value = match value.map(Bindable::bind_ref) {
            Some(BindRef::Optional(slot)) => slot.get_inner(),
            _ => None,
        };
        if live && value.is_none() {
            cx.require_construct(&shape)?;
        }
    }

    let type_path = shape.type_path();
    match (segment, shape.kind()) {
        (PathSegment::Property(name), ShapeKind::Bean(bean)) => {
            let Some(child) = bean.property(name) else {
                return Err(AccessError::UnknownProperty {
                    name: name.clone(),
                    type_path,
                });
            };
            let value = match value.map(Bindable::bind_ref) {
                Some(BindRef::Bean(bean)) => bean.property(name),
                _ => None,
            };
            Ok(Cursor {
                shape: child,
                value,
            })
        }
        (PathSegment::Index(index), ShapeKind::List(element)) => {
            let index = *index;
            cx.check_index(index)?;
            let element = element();
            let (len, child) = match value.map(Bindable::bind_ref) {
                Some(BindRef::List(list)) => (list.len(), list.get_element(index)),
                _ => (0, None),
            };
            let pads = index > len || (!terminal && index == len);
            if live && pads {
                cx.require_construct(&element)?;
            }
            Ok(Cursor {
                shape: element,
                value: child,
            })
        }
        (PathSegment::Index(index), ShapeKind::Array { element, len }) => {
            let index = *index;
            let (actual, child) = match value.map(Bindable::bind_ref) {
                Some(BindRef::Array(array)) => (Some(array.len()), array.get_element(index)),
                _ => (None, None),
            };
            let bound = if live { actual.or(len).or(Some(0)) } else { len };
            if bound.is_some_and(|bound| index >= bound) {
                return Err(AccessError::NotIndexable {
                    segment: segment.clone(),
                    type_path,
                });
            }
            Ok(Cursor {
                shape: element(),
                value: child,
            })
        }
        (PathSegment::Index(_) | PathSegment::Key(_), ShapeKind::Map { key, value: entry }) => {
            let key = cx.coerce_key(&key(), &segment.key_text())?;
            let entry = entry();
            let child = match value.map(Bindable::bind_ref) {
                Some(BindRef::Map(map)) => map.get_value(&*key),
                _ => None,
            };
            if live && !terminal && child.is_none() {
                cx.require_construct(&entry)?;
            }
            Ok(Cursor {
                shape: entry,
                value: child,
            })
        }
        (PathSegment::Property(name), _) => Err(AccessError::UnknownProperty {
            name: name.clone(),
            type_path,
        }),
        _ => Err(AccessError::NotIndexable {
            segment: segment.clone(),
            type_path,
        }),
    }
}
