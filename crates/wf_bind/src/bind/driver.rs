use alloc::string::String;
use alloc::sync::Arc;

use crate::Bindable;
use crate::bind::{BindStage, BinderConfig, BindingErrors, BindingFailure, ParamMap, ReservedPaths};
use crate::coerce::BindContext;
use crate::error::{AccessError, BindError};
use crate::path::ParsedPath;
use crate::registry::BindRegistry;

// -----------------------------------------------------------------------------
// Binder

/// Binds request parameters onto a target bean.
///
/// Cheap to clone and shareable between threads. The registry and the
/// configuration are fixed once the binder is built.
///
/// # Example
///
/// ```
/// use wf_bind::prelude::*;
///
/// #[derive(Bindable, Default)]
/// #[bind(default, rename_all = "camelCase")]
/// struct Search {
///     query: String,
///     page_size: Option<u32>,
///     tags: Vec<String>,
/// }
///
/// let binder = Binder::default();
/// let params: ParamMap = [
///     ("query", "rust"),
///     ("pageSize", " 20 "),
///     ("tags[1]", "b"),
///     ("sort", "asc"),
/// ]
/// .into_iter()
/// .collect();
///
/// let mut search = Search::default();
/// let errors = binder.bind(&mut search, &params);
///
/// assert_eq!(search.query, "rust");
/// assert_eq!(search.page_size, Some(20));
/// assert_eq!(search.tags, ["", "b"]);
///
/// // `sort` is not a property: reported, but only for information.
/// assert_eq!(errors.len(), 1);
/// assert!(!errors.has_reportable());
/// ```
#[derive(Clone)]
pub struct Binder {
    registry: Arc<BindRegistry>,
    config: Arc<BinderConfig>,
    reserved: Arc<ReservedPaths>,
}

impl Default for Binder {
    /// A binder over [`BindRegistry::new`] and the default configuration.
    fn default() -> Self {
        Self::new(BindRegistry::new(), BinderConfig::default())
    }
}

impl Binder {
    pub fn new(registry: BindRegistry, config: BinderConfig) -> Self {
        Self::from_shared(Arc::new(registry), Arc::new(config))
    }

    /// Builds a binder sharing an existing registry and configuration.
    pub fn from_shared(registry: Arc<BindRegistry>, config: Arc<BinderConfig>) -> Self {
        let reserved = Arc::new(ReservedPaths::new(config.reserved_paths.iter().cloned()));
        Self {
            registry,
            config,
            reserved,
        }
    }

    #[inline]
    pub fn registry(&self) -> &Arc<BindRegistry> {
        &self.registry
    }

    #[inline]
    pub fn config(&self) -> &Arc<BinderConfig> {
        &self.config
    }

    #[inline]
    pub fn reserved(&self) -> &ReservedPaths {
        &self.reserved
    }

    #[inline]
    pub fn context(&self) -> BindContext<'_> {
        BindContext::new(&self.registry, &self.config)
    }

    /// Binds every parameter onto `root`.
    ///
    /// Parameters are handled one by one in name order. A parameter that
    /// fails leaves the target as it was for that parameter and does not
    /// affect the others.
    pub fn bind(&self, root: &mut dyn Bindable, params: &ParamMap) -> BindingErrors {
        let mut errors = BindingErrors::new();
        for (name, values) in params.iter() {
            log::trace!("binding `{name}` = {values:?}");
            if let Err(failure) = self.bind_one(root, name, values) {
                if failure.is_informational() {
                    log::debug!("ignoring parameter: {failure}");
                } else {
                    log::debug!("{failure}");
                }
                errors.push(failure);
            }
        }
        errors
    }

    /// Binds a single parameter onto `root`.
    ///
    /// `Ok` also covers skipped parameters and values that carry nothing,
    /// such as a blank number.
    pub fn bind_one(
        &self,
        root: &mut dyn Bindable,
        name: &str,
        values: &[String],
    ) -> Result<(), BindingFailure> {
        let fail = |stage: BindStage, cause: BindError| {
            BindingFailure::new(name, values, stage, cause)
        };

        if self.config.is_ignored(name) {
            log::trace!("skipping ignored parameter `{name}`");
            return Ok(());
        }

        if let Some(prefix) = self.reserved.matches(name) {
            log::warn!("refusing to bind `{name}`: `{prefix}` is reserved");
            let cause = AccessError::Forbidden {
                path: String::from(name.trim()),
            };
            return Err(fail(BindStage::Resolve, BindError::Access(cause)));
        }

        let path = ParsedPath::parse(name).map_err(|err| fail(BindStage::Parse, err.into()))?;

        let cx = self.context();
        let shape = path
            .resolve(&cx, root)
            .map_err(|err| fail(BindStage::Resolve, err.into()))?;

        let Some(value) = cx
            .coerce(&shape, values)
            .map_err(|err| fail(BindStage::Coerce, err.into()))?
        else {
            log::trace!("`{name}` carries no value");
            return Ok(());
        };

        path.assign(&cx, root, value)
            .map_err(|err| fail(BindStage::Apply, err.into()))
    }
}

impl core::fmt::Debug for Binder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Binder")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::Binder;
    use crate::bind::{BindStage, BinderConfig, ParamMap};
    use crate::derive::Bindable;
    use crate::error::{CoercionError, FailureKind};
    use crate::registry::BindRegistry;

    #[derive(Bindable, Default, Debug)]
    #[bind(default, rename_all = "camelCase")]
    struct Inner {
        label: String,
    }

    #[derive(Bindable, Default, Debug)]
    #[bind(default, rename_all = "camelCase")]
    struct Form {
        count: i64,
        flag: bool,
        name: String,
        numbers: Vec<i64>,
        fixed: [u8; 2],
        inner: Option<Inner>,
        entries: BTreeMap<String, Inner>,
        by_id: BTreeMap<i64, String>,
        context: Inner,
    }

    #[derive(Bindable, Default, Debug)]
    #[bind(default)]
    struct Node {
        label: String,
        children: Vec<Node>,
    }

    fn params(pairs: &[(&str, &str)]) -> ParamMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn failures_never_abort_the_pass() {
        let mut form = Form::default();
        let errors = Binder::default().bind(
            &mut form,
            &params(&[
                ("count", "12x"),
                ("flag", "yes"),
                ("name", " padded "),
                ("numbers[bad", "1"),
                ("entries['a'].label", "A"),
                ("inner.label", "in"),
            ]),
        );

        assert_eq!(errors.len(), 2);
        let kinds = errors.iter().map(|f| (f.path(), f.stage(), f.kind())).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            [
                ("count", BindStage::Coerce, FailureKind::BadFormat),
                ("numbers[bad", BindStage::Parse, FailureKind::Malformed),
            ]
        );
        assert_eq!(form.count, 0);
        assert!(form.flag);
        assert_eq!(form.name, " padded ");
        assert_eq!(form.entries["a"].label, "A");
        assert_eq!(form.inner.unwrap().label, "in");
    }

    #[test]
    fn reserved_and_ignored_names() {
        let mut form = Form::default();
        let binder = Binder::default();
        let errors = binder.bind(
            &mut form,
            &params(&[
                ("context.label", "x"),
                ("Context.label", "x"),
                (" context.label", "x"),
                ("_sourcePage", "/form.jsp"),
            ]),
        );

        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|f| f.kind() == FailureKind::Forbidden));
        assert!(errors.has_reportable());
        assert_eq!(form.context.label, "");
    }

    #[test]
    fn out_of_range_array_has_no_side_effects() {
        let mut form = Form::default();
        let errors = Binder::default().bind(
            &mut form,
            &params(&[("fixed[2]", "9"), ("fixed[1]", "7")]),
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.iter().next().unwrap().kind(), FailureKind::NotIndexable);
        assert_eq!(form.fixed, [0, 7]);
    }

    #[test]
    fn blank_values_leave_targets_alone() {
        let mut form = Form {
            count: 5,
            ..Form::default()
        };
        let mut request = ParamMap::new();
        request.add("count", "  ");
        request.add_all("numbers", ["1", "", "3"]);
        let errors = Binder::default().bind(&mut form, &request);

        assert!(errors.is_empty());
        assert_eq!(form.count, 5);
        assert_eq!(form.numbers, [1, 3]);
    }

    #[test]
    fn registry_rules_win() {
        let mut registry = BindRegistry::new();
        registry.register_coercion::<bool>(|text, _| match text {
            "checked" => Ok(true),
            _ => Err(CoercionError::bad_format::<bool>(text)),
        });
        let binder = Binder::new(registry, BinderConfig::default());

        let mut form = Form::default();
        let errors = binder.bind(&mut form, &params(&[("flag", "checked")]));
        assert!(errors.is_empty());
        assert!(form.flag);

        let errors = binder.bind(&mut form, &params(&[("flag", "yes")]));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn index_limit_is_configurable() {
        let config = BinderConfig {
            max_index: 3,
            ..BinderConfig::default()
        };
        let binder = Binder::new(BindRegistry::new(), config);
        let mut form = Form::default();
        let errors = binder.bind(&mut form, &params(&[("numbers[4]", "1"), ("numbers[3]", "2")]));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.iter().next().unwrap().kind(), FailureKind::IndexLimit);
        assert_eq!(form.numbers, [0, 0, 0, 2]);
    }

    #[test]
    fn recursive_beans_grow_on_demand() {
        let mut root = Node::default();
        let errors = Binder::default().bind(
            &mut root,
            &params(&[("children[1].children[0].label", "leaf"), ("label", "root")]),
        );

        assert!(errors.is_empty());
        assert_eq!(root.label, "root");
        assert_eq!(root.children.len(), 2);
        assert!(root.children[0].children.is_empty());
        assert_eq!(root.children[1].children.len(), 1);
        assert_eq!(root.children[1].children[0].label, "leaf");
    }

    #[test]
    fn bad_keys_and_whole_containers_are_rejected() {
        let mut form = Form::default();
        let errors = Binder::default().bind(
            &mut form,
            &params(&[
                ("byId['abc']", "x"),
                ("byId['7']", "seven"),
                ("entries", "a"),
                ("inner", "b"),
            ]),
        );

        let kinds = errors.iter().map(|f| (f.path(), f.stage(), f.kind())).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            [
                ("byId['abc']", BindStage::Resolve, FailureKind::BadKey),
                ("entries", BindStage::Coerce, FailureKind::Unsupported),
                ("inner", BindStage::Coerce, FailureKind::Unsupported),
            ]
        );
        assert_eq!(form.by_id.len(), 1);
        assert_eq!(form.by_id[&7], "seven");
        assert!(form.entries.is_empty());
        assert!(form.inner.is_none());
    }
}
