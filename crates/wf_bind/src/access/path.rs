use alloc::boxed::Box;

use super::resolve::{Cursor, step};
use crate::Bindable;
use crate::coerce::BindContext;
use crate::error::AccessError;
use crate::path::ParsedPath;
use crate::shape::Shape;

impl ParsedPath {
    /// Reads the value at this path.
    pub fn access<'a>(
        &self,
        cx: &BindContext<'_>,
        root: &'a dyn Bindable,
    ) -> Result<&'a dyn Bindable, AccessError> {
        let mut value = root;
        for segment in self {
            value = segment.access(cx, value)?;
        }
        Ok(value)
    }

    /// Reaches the value at this path for writing, constructing missing
    /// values on the way when `create` is set.
    pub fn access_mut<'a>(
        &self,
        cx: &BindContext<'_>,
        root: &'a mut dyn Bindable,
        create: bool,
    ) -> Result<&'a mut dyn Bindable, AccessError> {
        let mut value = root;
        for segment in self {
            value = segment.access_mut(cx, value, create)?;
        }
        Ok(value)
    }

    /// The declared shape at the end of this path, starting from a type.
    ///
    /// Only what the types guarantee is checked: property names, the
    /// kind of every indexed value, index limits, map keys and the length
    /// of fixed arrays.
    pub fn resolve_shape(&self, cx: &BindContext<'_>, root: Shape) -> Result<Shape, AccessError> {
        self.walk(cx, Cursor { shape: root, value: None }, false)
    }

    /// The declared shape at the end of this path, starting from a value.
    ///
    /// Besides what [`resolve_shape`](Self::resolve_shape) checks, every
    /// value that [`assign`](Self::assign) would have to create must be
    /// constructible, so a successful resolve means the assignment can only
    /// fail on the value itself.
    pub fn resolve(&self, cx: &BindContext<'_>, root: &dyn Bindable) -> Result<Shape, AccessError> {
        let cursor = Cursor {
            shape: root.bind_shape(),
            value: Some(root),
        };
        self.walk(cx, cursor, true)
    }

    fn walk(
        &self,
        cx: &BindContext<'_>,
        mut cursor: Cursor<'_>,
        live: bool,
    ) -> Result<Shape, AccessError> {
        let count = self.len();
        for (index, segment) in self.iter().enumerate() {
            cursor = step(cx, cursor, segment, index + 1 == count, live)?;
        }
        Ok(cursor.shape)
    }

    /// Stores `value` at this path, creating every missing parent.
    pub fn assign(
        &self,
        cx: &BindContext<'_>,
        root: &mut dyn Bindable,
        value: Box<dyn Bindable>,
    ) -> Result<(), AccessError> {
        let Some((last, parents)) = self.segments().split_last() else {
            return Ok(());
        };
        let mut parent = root;
        for segment in parents {
            parent = segment.access_mut(cx, parent, true)?;
        }
        last.assign(cx, parent, value)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::bind::BinderConfig;
    use crate::coerce::BindContext;
    use crate::derive::Bindable;
    use crate::error::AccessError;
    use crate::path::ParsedPath;
    use crate::registry::BindRegistry;
    use crate::Typed;

    #[derive(Bindable, Default, Debug, PartialEq)]
    #[bind(default)]
    struct Pet {
        name: String,
    }

    #[derive(Bindable, Debug, PartialEq)]
    struct Locked {
        id: u32,
    }

    #[derive(Bindable, Default, Debug, PartialEq)]
    #[bind(default, rename_all = "camelCase")]
    struct Person {
        name: String,
        age: Option<u32>,
        tags: Vec<String>,
        scores: BTreeMap<String, i64>,
        pets: Vec<Pet>,
        best_friend: Option<Pet>,
        codes: [u8; 2],
        locked: Option<Locked>,
    }

    fn path(text: &str) -> ParsedPath {
        ParsedPath::parse(text).unwrap()
    }

    fn with_cx<R>(f: impl FnOnce(&BindContext<'_>) -> R) -> R {
        let registry = BindRegistry::new();
        let config = BinderConfig {
            max_index: 10,
            ..BinderConfig::default()
        };
        f(&BindContext::new(&registry, &config))
    }

    #[test]
    fn access_mut_creates_missing_parents() {
        let mut person = Person::default();
        with_cx(|cx| {
            let name = path("pets[2].name")
                .access_mut(cx, &mut person, true)
                .unwrap();
            *name.downcast_mut::<String>().unwrap() = "Rex".into();

            path("bestFriend.name").access_mut(cx, &mut person, true).unwrap();
        });
        assert_eq!(person.pets.len(), 3);
        assert_eq!(person.pets[2].name, "Rex");
        assert_eq!(person.pets[0], Pet::default());
        assert_eq!(person.best_friend, Some(Pet::default()));
    }

    #[test]
    fn access_without_create_reports_absence() {
        let mut person = Person::default();
        with_cx(|cx| {
            assert!(matches!(
                path("pets[0].name").access(cx, &person),
                Err(AccessError::Absent { .. })
            ));
            assert!(matches!(
                path("bestFriend.name").access_mut(cx, &mut person, false),
                Err(AccessError::Absent { .. })
            ));
            assert!(matches!(
                path("scores['x']").access(cx, &person),
                Err(AccessError::Absent { .. })
            ));
        });
        assert!(person.best_friend.is_none());
    }

    #[test]
    fn reading_existing_values() {
        let mut person = Person::default();
        person.scores.insert("one".into(), 1);
        person.codes = [4, 5];
        with_cx(|cx| {
            let one = path("scores['one']").access(cx, &person).unwrap();
            assert_eq!(one.downcast_ref::<i64>(), Some(&1));
            let code = path("codes[1]").access(cx, &person).unwrap();
            assert_eq!(code.downcast_ref::<u8>(), Some(&5));
            assert!(matches!(
                path("codes[2]").access(cx, &person),
                Err(AccessError::NotIndexable { .. })
            ));
        });
    }

    #[test]
    fn assign_pads_lists_and_inserts_entries() {
        let mut person = Person::default();
        with_cx(|cx| {
            path("tags[2]")
                .assign(cx, &mut person, Box::new(String::from("c")))
                .unwrap();
            path("tags[0]")
                .assign(cx, &mut person, Box::new(String::from("a")))
                .unwrap();
            path("scores[7]")
                .assign(cx, &mut person, Box::new(7_i64))
                .unwrap();
            path("age")
                .assign(cx, &mut person, Box::new(Some(30_u32)))
                .unwrap();
            assert!(matches!(
                path("age").assign(cx, &mut person, Box::new(30_u32)),
                Err(AccessError::TypeMismatch(_))
            ));
        });
        assert_eq!(person.tags, ["a", "", "c"]);
        assert_eq!(person.scores.get("7"), Some(&7));
        assert_eq!(person.age, Some(30));
    }

    #[test]
    fn index_limit_guards_growth() {
        let mut person = Person::default();
        with_cx(|cx| {
            assert_eq!(
                path("tags[11]").assign(cx, &mut person, Box::new(String::new())),
                Err(AccessError::IndexLimit {
                    index: 11,
                    limit: 10
                })
            );
        });
        assert!(person.tags.is_empty());
    }

    #[test]
    fn resolve_shape_checks_types_only() {
        with_cx(|cx| {
            let root = Person::type_shape();
            assert!(path("scores['x']").resolve_shape(cx, root).unwrap().is::<i64>());
            assert!(path("pets[3].name").resolve_shape(cx, root).unwrap().is::<String>());
            assert!(path("age").resolve_shape(cx, root).unwrap().is::<Option<u32>>());
            assert!(path("locked.id").resolve_shape(cx, root).is_ok());

            assert!(matches!(
                path("codes[2]").resolve_shape(cx, root),
                Err(AccessError::NotIndexable { .. })
            ));
            assert!(matches!(
                path("tags.size").resolve_shape(cx, root),
                Err(AccessError::UnknownProperty { .. })
            ));
            assert!(matches!(
                path("age[0]").resolve_shape(cx, root),
                Err(AccessError::NotIndexable { .. })
            ));
            assert!(matches!(
                path("Name").resolve_shape(cx, root),
                Err(AccessError::UnknownProperty { .. })
            ));
        });
    }

    #[test]
    fn resolve_rejects_what_cannot_be_created() {
        let person = Person::default();
        with_cx(|cx| {
            assert_eq!(
                path("locked.id").resolve(cx, &person),
                Err(AccessError::NotInstantiable {
                    type_path: Locked::type_shape().type_path()
                })
            );
            assert!(path("pets[4].name").resolve(cx, &person).is_ok());
            assert!(path("tags[4]").resolve(cx, &person).is_ok());
        });
    }

    #[test]
    fn registered_constructor_makes_type_instantiable() {
        let mut registry = BindRegistry::new();
        registry.register_constructor(|| Locked { id: 9 });
        let config = BinderConfig::default();
        let cx = BindContext::new(&registry, &config);

        let mut person = Person::default();
        assert!(path("locked.id").resolve(&cx, &person).is_ok());
        path("locked.id").access_mut(&cx, &mut person, true).unwrap();
        assert_eq!(person.locked, Some(Locked { id: 9 }));
    }
}
