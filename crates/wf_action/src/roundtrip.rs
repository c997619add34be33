//! One request through the binder, start to finish.

use alloc::string::String;
use core::any::type_name;

use wf_bind::bind::{Binder, BindingErrors, ParamMap};

use crate::ActionBean;

/// Names the page a form was submitted from. Skipped by the binder's
/// default configuration.
pub const SOURCE_PAGE_PARAMETER: &str = "_sourcePage";

/// Names the event when no explicit event is set. Never bound.
pub const EVENT_NAME_PARAMETER: &str = "_eventName";

// -----------------------------------------------------------------------------
// Roundtrip

/// Collects the parameters of a request and binds them onto a fresh action
/// bean.
///
/// Built for tests and for embedding the binder in a host that already
/// decoded the request.
#[derive(Debug, Clone)]
pub struct Roundtrip {
    binder: Binder,
    params: ParamMap,
    event: Option<String>,
    locale: Option<String>,
}

impl Roundtrip {
    pub fn new(binder: Binder) -> Self {
        Self {
            binder,
            params: ParamMap::new(),
            event: None,
            locale: None,
        }
    }

    #[inline]
    pub fn binder(&self) -> &Binder {
        &self.binder
    }

    #[inline]
    pub fn params(&self) -> &ParamMap {
        &self.params
    }

    /// Appends values to a parameter.
    pub fn add_parameter<I, S>(&mut self, name: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.add_all(name, values);
        self
    }

    /// Replaces every value of a parameter.
    pub fn set_parameter<I, S>(&mut self, name: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.set(name, values);
        self
    }

    /// The event to handle. Takes precedence over an `_eventName`
    /// parameter.
    pub fn set_event(&mut self, event: impl Into<String>) -> &mut Self {
        self.event = Some(event.into());
        self
    }

    pub fn set_source_page(&mut self, page: impl Into<String>) -> &mut Self {
        self.params.set(SOURCE_PAGE_PARAMETER, [page.into()]);
        self
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) -> &mut Self {
        self.locale = Some(locale.into());
        self
    }

    /// The event this request will run, if any.
    pub fn event(&self) -> Option<&str> {
        self.event
            .as_deref()
            .or_else(|| self.params.first(EVENT_NAME_PARAMETER))
    }

    /// Runs the request against `B::default()`.
    pub fn execute<B: ActionBean + Default>(&self) -> Outcome<B> {
        self.execute_on(B::default())
    }

    /// Runs the request against `bean`.
    ///
    /// The bean's context is replaced first, so parameters can never
    /// observe a stale one. Binding failures meant for the user end up in
    /// the context's validation errors. All of them, informational ones
    /// included, are kept in the [`Outcome`].
    pub fn execute_on<B: ActionBean>(&self, mut bean: B) -> Outcome<B> {
        let event = self.event().map(String::from);
        log::debug!(
            "executing {} with event {:?} and {} parameter(s)",
            type_name::<B>(),
            event,
            self.params.len(),
        );

        let context = bean.context_mut();
        *context = Default::default();
        context.set_event_name(event);
        context.set_locale(self.locale.clone());
        context.set_source_page(self.params.first(SOURCE_PAGE_PARAMETER).map(String::from));

        let failures = if self.params.contains(EVENT_NAME_PARAMETER) {
            let mut params = self.params.clone();
            params.remove(EVENT_NAME_PARAMETER);
            self.binder.bind(&mut bean, &params)
        } else {
            self.binder.bind(&mut bean, &self.params)
        };

        bean.context_mut()
            .validation_errors_mut()
            .add_failures(&failures);

        if !failures.is_empty() {
            log::debug!(
                "{} binding failure(s), {} reported",
                failures.len(),
                bean.context().validation_errors().len(),
            );
        }

        Outcome { bean, failures }
    }
}

// -----------------------------------------------------------------------------
// Outcome

/// The bound bean and every binding failure of the request.
#[derive(Debug)]
pub struct Outcome<B> {
    bean: B,
    failures: BindingErrors,
}

impl<B: ActionBean> Outcome<B> {
    #[inline]
    pub fn bean(&self) -> &B {
        &self.bean
    }

    #[inline]
    pub fn bean_mut(&mut self) -> &mut B {
        &mut self.bean
    }

    #[inline]
    pub fn into_bean(self) -> B {
        self.bean
    }

    #[inline]
    pub fn failures(&self) -> &BindingErrors {
        &self.failures
    }

    /// `true` if no failure reached the validation errors.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.bean.context().validation_errors().is_empty()
    }

    pub fn into_parts(self) -> (B, BindingErrors) {
        (self.bean, self.failures)
    }
}
