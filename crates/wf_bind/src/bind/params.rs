use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// Request parameters: every name with all of its raw values.
///
/// Names iterate in sorted order, which is the order they are bound in.
///
/// # Example
///
/// ```
/// use wf_bind::bind::ParamMap;
///
/// let mut params = ParamMap::new();
/// params.add("tags", "a");
/// params.add("tags", "b");
/// params.set("name", ["Ann"]);
///
/// assert_eq!(params.get("tags"), Some(&["a".to_string(), "b".to_string()][..]));
/// assert_eq!(params.first("name"), Some("Ann"));
/// assert_eq!(params.names().collect::<Vec<_>>(), ["name", "tags"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    params: BTreeMap<String, Vec<String>>,
}

impl ParamMap {
    #[inline]
    pub const fn new() -> Self {
        Self {
            params: BTreeMap::new(),
        }
    }

    /// Appends one value to `name`.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.entry(name.into()).or_default().push(value.into());
    }

    /// Appends several values to `name`.
    pub fn add_all<I, S>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params
            .entry(name.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
    }

    /// Replaces every value of `name`.
    pub fn set<I, S>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params
            .insert(name.into(), values.into_iter().map(Into::into).collect());
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.params.get(name).map(Vec::as_slice)
    }

    pub fn first(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.params.remove(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.params
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for ParamMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.add(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::ParamMap;

    #[test]
    fn collects_repeated_names() {
        let mut params: ParamMap = [("b", "1"), ("a", "x"), ("b", "2")].into_iter().collect();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("b").unwrap(), ["1", "2"]);

        params.add_all("a", ["y", "z"]);
        assert_eq!(params.get("a").unwrap().len(), 3);
        assert_eq!(params.iter().map(|(name, _)| name).collect::<Vec<_>>(), ["a", "b"]);

        assert_eq!(params.remove("a").map(|v| v.len()), Some(3));
        assert!(!params.contains("a"));
        assert_eq!(params.first("missing"), None);
    }
}
