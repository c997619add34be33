use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::Span;
use toml_edit::{Document, Item, Table};

/// The caller's `Cargo.toml`, used to find how generated code should name
/// a weft crate.
///
/// Derive output must spell paths that resolve from the crate invoking the
/// macro, which may depend on `wf_bind` directly or only on the `wf_core`
/// facade.
///
/// # Example
///
/// ```rust
/// # use wf_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("wf_bind"));
/// ```
///
/// # Resolution rules
///
/// 1. The requested crate is a dependency: `::wf_bind`.
/// 2. The requested crate starts with `wf_` and `weft` is a dependency:
///    `::weft::bind`.
/// 3. Same with the `wf_core` facade: `::wf_core::bind`.
/// 4. Same with the short alias `wf`: `::wf::bind`.
/// 5. Steps 1-4 again over `dev-dependencies`.
/// 6. Otherwise `::wf_bind`.
///
/// A crate referring to itself through the macro needs
/// `extern crate self as wf_bind;` in its root.
#[derive(Debug)]
pub struct Manifest {
    manifest: Option<Document<Box<str>>>,
    modified_time: Option<SystemTime>,
}

const FULL_FRAMEWORK_NAME: &str = "weft";
const CORE_FRAMEWORK_NAME: &str = "wf_core";
const SHORT_FRAMEWORK_NAME: &str = "wf";
const FRAMEWORK_PREFIX: &str = "wf_";

impl Manifest {
    fn manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        Some(path)
    }

    fn modified_time(path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .ok()
    }

    // An unreadable manifest resolves every crate to its absolute path.
    fn read(path: &Path) -> Option<Document<Box<str>>> {
        let text = std::fs::read_to_string(path).ok()?.into_boxed_str();
        Document::parse(text).ok()
    }

    fn absolute(name: &str) -> Option<syn::Path> {
        syn::parse_str(&format!("::{name}")).ok()
    }

    fn nested(root: &str, module: &str) -> Option<syn::Path> {
        let mut path = Self::absolute(root)?;
        path.segments.push(syn::parse_str(module).ok()?);
        Some(path)
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Self::absolute(name);
        }

        let module = name.strip_prefix(FRAMEWORK_PREFIX)?;
        [FULL_FRAMEWORK_NAME, CORE_FRAMEWORK_NAME, SHORT_FRAMEWORK_NAME]
            .into_iter()
            .find(|root| deps.contains_key(root))
            .and_then(|root| Self::nested(root, module))
    }

    /// Returns the path generated code should use for the crate `name`.
    ///
    /// See the type-level docs for the lookup order.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        let found = self.manifest.as_ref().and_then(|manifest| {
            ["dependencies", "dev-dependencies"]
                .into_iter()
                .find_map(|section| match manifest.get(section) {
                    Some(Item::Table(deps)) => Self::find_in_deps(deps, name),
                    _ => None,
                })
        });

        found
            .or_else(|| Self::absolute(name))
            .unwrap_or_else(|| syn::Path::from(syn::Ident::new(name, Span::call_site())))
    }

    /// Runs `func` against the caller's manifest.
    ///
    /// Parsed manifests are cached per path and re-read when the file's
    /// modification time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(manifest_path) = Self::manifest_path() else {
            return func(&Manifest {
                manifest: None,
                modified_time: None,
            });
        };
        let modified_time = Self::modified_time(&manifest_path);

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time.is_some()
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }
        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read(&manifest_path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}
