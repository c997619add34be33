//! The per-request context carried by every action bean.

use alloc::string::String;

use wf_bind::derive::Bindable;
use wf_bind::ops::Bean;

use crate::ValidationErrors;

// -----------------------------------------------------------------------------
// ActionBeanContext

/// What an action bean knows about the request it serves.
///
/// Only `eventName` is a bindable property. It is kept out of reach of
/// request parameters by the binder's reserved paths, `context` by default,
/// rather than by hiding it.
#[derive(Bindable, Debug, Clone, Default, PartialEq)]
#[bind(default, rename_all = "camelCase")]
pub struct ActionBeanContext {
    event_name: Option<String>,
    #[bind(skip)]
    locale: Option<String>,
    #[bind(skip)]
    source_page: Option<String>,
    #[bind(skip)]
    validation_errors: ValidationErrors,
}

impl ActionBeanContext {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The event being handled, if the request named one.
    #[inline]
    pub fn event_name(&self) -> Option<&str> {
        self.event_name.as_deref()
    }

    #[inline]
    pub fn set_event_name(&mut self, event: Option<String>) {
        self.event_name = event;
    }

    #[inline]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    #[inline]
    pub fn set_locale(&mut self, locale: Option<String>) {
        self.locale = locale;
    }

    /// The page that submitted the request, to return to when input is
    /// rejected.
    #[inline]
    pub fn source_page(&self) -> Option<&str> {
        self.source_page.as_deref()
    }

    #[inline]
    pub fn set_source_page(&mut self, page: Option<String>) {
        self.source_page = page;
    }

    #[inline]
    pub fn validation_errors(&self) -> &ValidationErrors {
        &self.validation_errors
    }

    #[inline]
    pub fn validation_errors_mut(&mut self) -> &mut ValidationErrors {
        &mut self.validation_errors
    }
}

// -----------------------------------------------------------------------------
// ActionBean

/// A bean that handles requests.
///
/// Usually a derived bean with a `context` property:
///
/// ```
/// use wf_action::{ActionBean, ActionBeanContext};
/// use wf_bind::derive::Bindable;
///
/// #[derive(Bindable, Default)]
/// #[bind(default)]
/// struct Logout {
///     context: ActionBeanContext,
/// }
///
/// impl ActionBean for Logout {
///     fn context(&self) -> &ActionBeanContext {
///         &self.context
///     }
///
///     fn context_mut(&mut self) -> &mut ActionBeanContext {
///         &mut self.context
///     }
/// }
/// ```
pub trait ActionBean: Bean {
    fn context(&self) -> &ActionBeanContext;

    fn context_mut(&mut self) -> &mut ActionBeanContext;
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use wf_bind::Typed;
    use wf_bind::ops::Bean;
    use wf_bind::shape::ShapeKind;

    use super::ActionBeanContext;

    #[test]
    fn only_the_event_name_is_a_property() {
        let context = ActionBeanContext::new();
        assert_eq!(context.property_names(), ["eventName"]);
        assert!(context.property("locale").is_none());
        assert!(context.property("validationErrors").is_none());

        let ShapeKind::Bean(bean) = ActionBeanContext::type_shape().kind() else {
            panic!("context should be a bean");
        };
        assert!(bean.contains("eventName"));
        assert!(ActionBeanContext::type_shape().can_construct());
    }

    #[test]
    fn accessors() {
        let mut context = ActionBeanContext::new();
        context.set_event_name(Some(String::from("save")));
        context.set_locale(Some(String::from("en-GB")));
        context.validation_errors_mut().add("age", "required");

        assert_eq!(context.event_name(), Some("save"));
        assert_eq!(context.locale(), Some("en-GB"));
        assert_eq!(context.source_page(), None);
        assert_eq!(context.validation_errors().len(), 1);
    }
}
