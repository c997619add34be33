//! Parameter names as typed paths.
//!
//! A request parameter name such as `listOfBeans[3].intProperty` or
//! `mapOfLongs['one']` is parsed once into a [`ParsedPath`]: a non-empty list
//! of [`PathSegment`]s whose first element is always a property.
//!
//! ## Grammar
//!
//! ```text
//! path      = segment ( "." segment )*
//! segment   = ident ( "[" index "]" )*
//! index     = digits | "'" chars "'" | '"' chars '"'
//! ident     = ( letter | "_" | "$" ) ( alnum | "_" | "$" )*
//! ```
//!
//! Inside a quoted key a backslash escapes the next character. Names with
//! surrounding whitespace are rejected rather than trimmed.

mod parser;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;

// -----------------------------------------------------------------------------
// PathSegment

/// One step of a [`ParsedPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named bean property.
    Property(String),
    /// A numeric list, array or map index.
    Index(usize),
    /// A quoted map key.
    Key(String),
}

impl PathSegment {
    /// The text a map key is converted from.
    pub fn key_text(&self) -> String {
        match self {
            Self::Property(text) | Self::Key(text) => text.clone(),
            Self::Index(index) => alloc::format!("{index}"),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property(name) => f.write_str(name),
            Self::Index(index) => write!(f, "[{index}]"),
            Self::Key(key) => {
                f.write_str("['")?;
                for c in key.chars() {
                    if matches!(c, '\'' | '\\') {
                        f.write_str("\\")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str("']")
            }
        }
    }
}

// -----------------------------------------------------------------------------
// ParsedPath

/// A parsed parameter name.
///
/// # Examples
///
/// ```
/// use wf_bind::path::{ParsedPath, PathSegment};
///
/// let path = ParsedPath::parse("listOfBeans[3].mapOfLongs['one']").unwrap();
/// assert_eq!(path.segments(), &[
///     PathSegment::Property("listOfBeans".into()),
///     PathSegment::Index(3),
///     PathSegment::Property("mapOfLongs".into()),
///     PathSegment::Key("one".into()),
/// ]);
/// assert_eq!(path.root(), "listOfBeans");
///
/// assert!(ParsedPath::parse(" context.eventName").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedPath {
    // Never empty and always starts with a property.
    segments: Vec<PathSegment>,
}

impl ParsedPath {
    pub fn parse(name: &str) -> Result<Self, ParseError> {
        parser::parse(name).map(|segments| Self { segments })
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The name of the root property.
    ///
    /// A parsed path always starts with a property, so this is never empty.
    pub fn root(&self) -> &str {
        debug_assert!(
            matches!(self.segments.first(), Some(PathSegment::Property(_))),
            "parsed paths start with a property"
        );
        match self.segments.first() {
            Some(PathSegment::Property(name)) => name,
            _ => "",
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// `true` for a bare property name.
    #[inline]
    pub fn is_simple(&self) -> bool {
        self.segments.len() == 1
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, PathSegment> {
        self.segments.iter()
    }
}

impl FromStr for ParsedPath {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a ParsedPath {
    type Item = &'a PathSegment;
    type IntoIter = core::slice::Iter<'a, PathSegment>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl fmt::Display for ParsedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 && matches!(segment, PathSegment::Property(_)) {
                f.write_str(".")?;
            }
            fmt::Display::fmt(segment, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{ParsedPath, PathSegment};

    #[test]
    fn display_is_canonical() {
        let path = ParsedPath::parse("a.b[1][\"k\"].c['it\\'s']").unwrap();
        assert_eq!(path.to_string(), "a.b[1]['k'].c['it\\'s']");
        assert_eq!(ParsedPath::parse(&path.to_string()).unwrap(), path);
    }

    #[test]
    fn key_text_of_index() {
        assert_eq!(PathSegment::Index(12).key_text(), "12");
        assert_eq!(PathSegment::Key("one".into()).key_text(), "one");
    }

    #[test]
    fn from_str_and_iteration() {
        let path: ParsedPath = "mapOfLongs['one']".parse().unwrap();
        assert_eq!(path.len(), 2);
        assert!(!path.is_simple());
        assert_eq!((&path).into_iter().count(), 2);
    }

    #[test]
    fn root_is_the_leading_property() {
        for name in ["a", "a.b", "a[0]", "a['k'].b[2]"] {
            let path = ParsedPath::parse(name).unwrap();
            assert_eq!(path.root(), "a", "{name}");
            assert!(matches!(path.segments()[0], PathSegment::Property(_)));
        }
        assert!(ParsedPath::parse("[0]").is_err());
        assert!(ParsedPath::parse("").is_err());
    }
}
