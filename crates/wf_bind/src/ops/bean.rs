use crate::Bindable;

/// A value with named properties.
///
/// Property names are matched exactly, case included. Implemented by
/// `#[derive(Bindable)]` on structs with named fields.
///
/// # Example
///
/// ```
/// use wf_bind::derive::Bindable;
/// use wf_bind::ops::Bean;
///
/// #[derive(Bindable, Default)]
/// #[bind(rename_all = "camelCase")]
/// struct Person {
///     first_name: String,
///     age: u32,
/// }
///
/// let mut person = Person::default();
/// let age = person.property_mut("age").unwrap();
/// *age.downcast_mut::<u32>().unwrap() = 42;
///
/// assert_eq!(person.age, 42);
/// assert!(person.property("firstName").is_some());
/// assert!(person.property("first_name").is_none());
/// ```
pub trait Bean: Bindable {
    fn property(&self, name: &str) -> Option<&dyn Bindable>;

    fn property_mut(&mut self, name: &str) -> Option<&mut dyn Bindable>;

    /// The bindable property names in declaration order.
    fn property_names(&self) -> &'static [&'static str];
}
