use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::maybe::Maybe;
use crate::parser::Parser;

/// Parser that always succeeds, substituting a fallback value when the inner
/// parser does not match
///
/// The cursor is wherever the inner parser left it: advanced on a match,
/// untouched otherwise.
pub struct OptionParser<P, O> {
    parser: P,
    alternate: O,
}

impl<P, O> OptionParser<P, O> {
    pub fn new(parser: P, alternate: O) -> Self {
        OptionParser { parser, alternate }
    }
}

impl<P, O> Parser for OptionParser<P, O>
where
    P: Parser<Output = O>,
    O: Clone,
{
    type Element = P::Element;
    type Output = O;

    fn parse(&self, cursor: &mut Cursor<'_, Self::Element>) -> ParseResult<O> {
        match self.parser.parse(cursor)? {
            Maybe::Present(value) => Ok(Maybe::Present(value)),
            Maybe::Absent => Ok(Maybe::Present(self.alternate.clone())),
        }
    }
}

/// Convenience function to create an OptionParser with an explicit fallback
pub fn option<P>(parser: P, alternate: P::Output) -> OptionParser<P, P::Output>
where
    P: Parser,
    P::Output: Clone,
{
    OptionParser::new(parser, alternate)
}

/// Convenience function to create an OptionParser falling back to `Default::default()`
pub fn optional<P>(parser: P) -> OptionParser<P, P::Output>
where
    P: Parser,
    P::Output: Clone + Default,
{
    OptionParser::new(parser, P::Output::default())
}

/// Parser that runs another parser and discards its value
pub struct Skip<P> {
    parser: P,
}

impl<P> Skip<P> {
    pub fn new(parser: P) -> Self {
        Skip { parser }
    }
}

impl<P: Parser> Parser for Skip<P> {
    type Element = P::Element;
    type Output = ();

    fn parse(&self, cursor: &mut Cursor<'_, Self::Element>) -> ParseResult<()> {
        Ok(self.parser.parse(cursor)?.map(|_| ()))
    }
}

/// Convenience function to create a Skip parser
pub fn skip<P: Parser>(parser: P) -> Skip<P> {
    Skip::new(parser)
}

/// Extension trait to add .optional(), .or_default_to() and .skip() methods
pub trait OptionExt: Parser + Sized {
    fn optional(self) -> OptionParser<Self, Self::Output>
    where
        Self::Output: Clone + Default,
    {
        optional(self)
    }

    fn or_default_to(self, alternate: Self::Output) -> OptionParser<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        option(self, alternate)
    }

    fn skip(self) -> Skip<Self> {
        Skip::new(self)
    }
}

/// Implement OptionExt for all parsers
impl<P> OptionExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::one_of;
    use crate::text::{character, string};

    #[test]
    fn test_option_inner_succeeds() {
        let mut cursor = Cursor::from_text("-5");
        let parser = option(character('-'), '+');

        assert_eq!(parser.parse(&mut cursor).unwrap(), Maybe::Present('-'));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_option_falls_back_without_consuming() {
        let mut cursor = Cursor::from_text("5");
        let parser = character('-').or_default_to('+');

        assert_eq!(parser.parse(&mut cursor).unwrap(), Maybe::Present('+'));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_optional_uses_default() {
        let mut cursor = Cursor::from_text("xyz");
        let parser = optional(string("abc"));

        assert_eq!(
            parser.parse(&mut cursor).unwrap(),
            Maybe::Present(String::new())
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_optional_at_end_of_input() {
        let data: [u32; 0] = [];
        let mut cursor = Cursor::new(&data[..]);
        let parser = one_of([1u32]).optional();

        assert_eq!(parser.parse(&mut cursor).unwrap(), Maybe::Present(0));
    }

    #[test]
    fn test_skip_discards_value() {
        let mut cursor = Cursor::from_text("abc!");
        let parser = skip(string("abc"));

        assert_eq!(parser.parse(&mut cursor).unwrap(), Maybe::Present(()));
        assert_eq!(cursor.remaining_text(), "!");
    }

    #[test]
    fn test_skip_preserves_failure() {
        let mut cursor = Cursor::from_text("abd");
        let parser = string("abc").skip();

        assert_eq!(parser.parse(&mut cursor).unwrap(), Maybe::Absent);
        assert_eq!(cursor.position(), 0);
    }
}
