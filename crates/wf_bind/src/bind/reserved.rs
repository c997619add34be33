use alloc::string::String;
use alloc::vec::Vec;

/// Path prefixes that request input may never reach.
///
/// A name is reserved when, once trimmed, it starts with one of the
/// prefixes regardless of case, and the prefix ends at a segment boundary.
///
/// # Example
///
/// ```
/// use wf_bind::bind::ReservedPaths;
///
/// let reserved = ReservedPaths::new(["context"]);
/// assert!(reserved.matches("context.eventName").is_some());
/// assert!(reserved.matches(" Context.eventName").is_some());
/// assert!(reserved.matches("CONTEXT").is_some());
/// assert!(reserved.matches("contextual").is_none());
/// assert!(reserved.matches("bean.context").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedPaths {
    prefixes: Vec<String>,
}

impl ReservedPaths {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the prefix reserving `name`, if any.
    pub fn matches(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        self.prefixes
            .iter()
            .map(String::as_str)
            .find(|prefix| reserves(prefix, name))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

fn reserves(prefix: &str, name: &str) -> bool {
    let (Some(head), Some(rest)) = (name.get(..prefix.len()), name.get(prefix.len()..)) else {
        return false;
    };
    !prefix.is_empty()
        && head.eq_ignore_ascii_case(prefix)
        && matches!(rest.chars().next(), None | Some('.' | '['))
}
