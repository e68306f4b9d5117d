use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser wrapper that attaches a name to another parser
///
/// The name only matters inside a [`block`](crate::block::block): a tagged step
/// records its result under the tag for the block's reducer. Parsing is delegated
/// unchanged.
pub struct Tagged<P> {
    parser: P,
    tag: Cow<'static, str>,
}

impl<P> Tagged<P> {
    pub fn new(parser: P, tag: impl Into<Cow<'static, str>>) -> Self {
        Tagged {
            parser,
            tag: tag.into(),
        }
    }

    pub fn into_inner(self) -> P {
        self.parser
    }
}

impl<P: Parser> Parser for Tagged<P> {
    type Element = P::Element;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'_, Self::Element>) -> ParseResult<Self::Output> {
        self.parser.parse(cursor)
    }

    fn tag_name(&self) -> Option<&str> {
        Some(&self.tag)
    }
}

/// Extension trait to add .tag() method support for parsers
///
/// Tagging consumes the parser and returns a new one, so a parser used untagged
/// elsewhere is never renamed behind its users' backs. To reuse one parser under
/// several names, share it through an `Arc` and tag clones of the `Arc`.
pub trait TagExt: Parser + Sized {
    fn tag(self, tag: impl Into<Cow<'static, str>>) -> Tagged<Self> {
        Tagged::new(self, tag)
    }
}

/// Implement TagExt for all parsers
impl<P> TagExt for P where P: Parser {}

/// Convenience function to create a Tagged parser
pub fn tag<P: Parser>(parser: P, tag: impl Into<Cow<'static, str>>) -> Tagged<P> {
    Tagged::new(parser, tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::one_of;
    use crate::maybe::Maybe;
    use std::sync::Arc;

    #[test]
    fn test_tag_is_reported() {
        let parser = one_of(['a']).tag("first");
        assert_eq!(parser.tag_name(), Some("first"));
    }

    #[test]
    fn test_tag_delegates_parse() {
        let parser = tag(one_of(['a']), "letter");
        let mut cursor = Cursor::from_text("ab");

        assert_eq!(parser.parse(&mut cursor).unwrap(), Maybe::Present('a'));
        assert_eq!(parser.parse(&mut cursor).unwrap(), Maybe::Absent);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_retagging_shared_parser_leaves_original_untagged() {
        let shared = Arc::new(one_of(['x']));
        let left = Arc::clone(&shared).tag("left");
        let right = Arc::clone(&shared).tag(String::from("right"));

        assert_eq!(shared.tag_name(), None);
        assert_eq!(left.tag_name(), Some("left"));
        assert_eq!(right.tag_name(), Some("right"));
    }

    #[test]
    fn test_outer_tag_wins() {
        let parser = one_of(['a']).tag("inner").tag("outer");
        assert_eq!(parser.tag_name(), Some("outer"));
        assert_eq!(parser.into_inner().tag_name(), Some("inner"));
    }
}
