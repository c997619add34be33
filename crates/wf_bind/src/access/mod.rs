//! Reading, creating and assigning values along a [`ParsedPath`].
//!
//! Each [`PathSegment`] is applied to the value reached so far:
//!
//! - a property selects a bean field by its exact name;
//! - an index selects a list or array slot, or a map entry;
//! - a quoted key selects a map entry.
//!
//! Optional values are looked through. When asked to create, missing list
//! slots, map entries and empty options are filled with freshly constructed
//! values, so a path can reach arbitrarily deep into an empty target.
//!
//! [`ParsedPath::resolve`] walks the same path over shapes first, so a
//! parameter that cannot be bound is rejected before anything is created.
//!
//! [`ParsedPath`]: crate::path::ParsedPath
//! [`PathSegment`]: crate::path::PathSegment
//! [`ParsedPath::resolve`]: crate::path::ParsedPath::resolve

mod path;
mod resolve;
mod segment;

use crate::coerce::BindContext;
use crate::error::AccessError;
use crate::path::PathSegment;
use crate::{BindMut, BindRef, Bindable};

/// Unwraps optional values, failing on an empty one.
fn look_through<'a>(
    mut value: &'a dyn Bindable,
    segment: &PathSegment,
) -> Result<&'a dyn Bindable, AccessError> {
    while let BindRef::Optional(slot) = value.bind_ref() {
        value = slot.get_inner().ok_or_else(|| AccessError::Absent {
            segment: segment.clone(),
        })?;
    }
    Ok(value)
}

/// Unwraps optional values, filling empty ones when `create` is set.
fn look_through_mut<'a>(
    cx: &BindContext<'_>,
    mut value: &'a mut dyn Bindable,
    create: bool,
    segment: &PathSegment,
) -> Result<&'a mut dyn Bindable, AccessError> {
    loop {
        value = match value.bind_mut() {
            BindMut::Optional(slot) => {
                if slot.is_some() {
                    match slot.get_inner_mut() {
                        Some(inner) => inner,
                        None => {
                            return Err(AccessError::Absent {
                                segment: segment.clone(),
                            });
                        }
                    }
                } else if create {
                    let inner = cx.construct(&slot.inner_shape())?;
                    slot.insert_inner(inner)?
                } else {
                    return Err(AccessError::Absent {
                        segment: segment.clone(),
                    });
                }
            }
            view => return Ok(view.into_bindable()),
        };
    }
}
