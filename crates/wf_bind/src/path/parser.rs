use alloc::string::String;
use alloc::vec::Vec;
use core::iter::Peekable;
use core::str::CharIndices;

use super::PathSegment;
use crate::error::ParseError;

#[inline]
fn malformed(offset: usize, reason: &'static str) -> ParseError {
    ParseError::Malformed { offset, reason }
}

pub(super) fn parse(name: &str) -> Result<Vec<PathSegment>, ParseError> {
    if name.trim().is_empty() {
        return Err(malformed(0, "empty parameter name"));
    }
    if name.starts_with(char::is_whitespace) {
        return Err(malformed(0, "leading whitespace"));
    }
    if name.ends_with(char::is_whitespace) {
        let offset = name.trim_end().len();
        return Err(malformed(offset, "trailing whitespace"));
    }

    let mut parser = Parser {
        len: name.len(),
        chars: name.char_indices().peekable(),
    };
    let mut segments = Vec::new();

    loop {
        segments.push(PathSegment::Property(parser.identifier()?));

        while parser.eat('[') {
            segments.push(parser.bracket()?);
        }

        match parser.chars.next() {
            None => return Ok(segments),
            Some((_, '.')) => continue,
            Some((offset, _)) => return Err(malformed(offset, "unexpected character")),
        }
    }
}

struct Parser<'a> {
    len: usize,
    chars: Peekable<CharIndices<'a>>,
}

impl Parser<'_> {
    #[inline]
    fn offset(&mut self) -> usize {
        self.chars.peek().map_or(self.len, |&(offset, _)| offset)
    }

    fn eat(&mut self, expected: char) -> bool {
        self.chars.next_if(|&(_, c)| c == expected).is_some()
    }

    fn identifier(&mut self) -> Result<String, ParseError> {
        let start = self.offset();
        let mut ident = String::new();

        match self.chars.next_if(|&(_, c)| c.is_alphabetic() || c == '_' || c == '$') {
            Some((_, c)) => ident.push(c),
            None => return Err(malformed(start, "expected a property name")),
        }
        while let Some((_, c)) = self
            .chars
            .next_if(|&(_, c)| c.is_alphanumeric() || c == '_' || c == '$')
        {
            ident.push(c);
        }

        Ok(ident)
    }

    // The opening bracket is already consumed.
    fn bracket(&mut self) -> Result<PathSegment, ParseError> {
        let start = self.offset();
        let segment = match self.chars.peek().map(|&(_, c)| c) {
            Some(c) if c.is_ascii_digit() => PathSegment::Index(self.digits()?),
            Some(quote @ ('\'' | '"')) => {
                self.chars.next();
                PathSegment::Key(self.quoted(quote, start)?)
            }
            Some(']') => return Err(malformed(start, "empty index")),
            Some(_) => return Err(malformed(start, "index must be digits or a quoted key")),
            None => return Err(malformed(start, "unterminated index")),
        };

        if self.eat(']') {
            Ok(segment)
        } else {
            Err(malformed(self.offset(), "expected `]`"))
        }
    }

    fn digits(&mut self) -> Result<usize, ParseError> {
        let start = self.offset();
        let mut value: usize = 0;
        while let Some((_, c)) = self.chars.next_if(|&(_, c)| c.is_ascii_digit()) {
            let digit = c as usize - '0' as usize;
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .ok_or_else(|| malformed(start, "index out of range"))?;
        }
        Ok(value)
    }

    fn quoted(&mut self, quote: char, start: usize) -> Result<String, ParseError> {
        let mut key = String::new();
        loop {
            match self.chars.next() {
                Some((_, '\\')) => match self.chars.next() {
                    Some((_, c)) => key.push(c),
                    None => return Err(malformed(start, "unterminated key")),
                },
                Some((_, c)) if c == quote => return Ok(key),
                Some((_, c)) => key.push(c),
                None => return Err(malformed(start, "unterminated key")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use super::parse;
    use crate::error::ParseError;
    use crate::path::PathSegment::{Index, Key, Property};

    fn prop(name: &str) -> crate::path::PathSegment {
        Property(String::from(name))
    }

    fn reason(name: &str) -> (usize, &'static str) {
        match parse(name).unwrap_err() {
            ParseError::Malformed { offset, reason } => (offset, reason),
        }
    }

    #[test]
    fn simple_and_nested() {
        assert_eq!(parse("longProperty").unwrap(), vec![prop("longProperty")]);
        assert_eq!(
            parse("nestedBean.enumProperty").unwrap(),
            vec![prop("nestedBean"), prop("enumProperty")]
        );
        assert_eq!(
            parse("listOfBeans[3].intProperty").unwrap(),
            vec![prop("listOfBeans"), Index(3), prop("intProperty")]
        );
    }

    #[test]
    fn quoted_keys() {
        assert_eq!(
            parse("mapOfLongs['one']").unwrap(),
            vec![prop("mapOfLongs"), Key("one".into())]
        );
        assert_eq!(
            parse("m[\"a.b[c]\"]").unwrap(),
            vec![prop("m"), Key("a.b[c]".into())]
        );
        assert_eq!(
            parse(r"m['it\'s']").unwrap(),
            vec![prop("m"), Key("it's".into())]
        );
        assert_eq!(parse("m['']").unwrap(), vec![prop("m"), Key("".into())]);
    }

    #[test]
    fn chained_brackets() {
        assert_eq!(
            parse("grid[1][2]").unwrap(),
            vec![prop("grid"), Index(1), Index(2)]
        );
        assert_eq!(
            parse("_private$x[0]").unwrap(),
            vec![prop("_private$x"), Index(0)]
        );
    }

    #[test]
    fn whitespace_is_rejected() {
        assert_eq!(reason(""), (0, "empty parameter name"));
        assert_eq!(reason("   "), (0, "empty parameter name"));
        assert_eq!(reason(" context.eventName"), (0, "leading whitespace"));
        assert_eq!(reason("name "), (4, "trailing whitespace"));
        assert_eq!(reason("a. b"), (2, "expected a property name"));
    }

    #[test]
    fn structural_errors() {
        assert_eq!(reason("a..b"), (2, "expected a property name"));
        assert_eq!(reason("a."), (2, "expected a property name"));
        assert_eq!(reason(".a"), (0, "expected a property name"));
        assert_eq!(reason("[0]"), (0, "expected a property name"));
        assert_eq!(reason("1abc"), (0, "expected a property name"));
        assert_eq!(reason("a[]"), (2, "empty index"));
        assert_eq!(reason("a[x]"), (2, "index must be digits or a quoted key"));
        assert_eq!(reason("a[1"), (3, "expected `]`"));
        assert_eq!(reason("a["), (2, "unterminated index"));
        assert_eq!(reason("a['x"), (2, "unterminated key"));
        assert_eq!(reason("a['x'"), (5, "expected `]`"));
        assert_eq!(reason("a-b"), (1, "unexpected character"));
        assert_eq!(reason("a[0]b"), (4, "unexpected character"));
    }

    #[test]
    fn index_overflow() {
        assert_eq!(
            reason("a[99999999999999999999999999]"),
            (2, "index out of range")
        );
    }
}
