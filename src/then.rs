use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::maybe::Maybe;
use crate::parser::Parser;

/// Parser combinator that runs two parsers in sequence and keeps only the second result
///
/// Useful for discarding punctuation in front of a payload. If the second parser
/// fails, the input consumed by the first is given back as well.
pub struct Then<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Then { parser1, parser2 }
    }
}

impl<P1, P2> Parser for Then<P1, P2>
where
    P1: Parser,
    P2: Parser<Element = P1::Element>,
{
    type Element = P1::Element;
    type Output = P2::Output;

    fn parse(&self, cursor: &mut Cursor<'_, Self::Element>) -> ParseResult<Self::Output> {
        let start = cursor.mark();

        let Maybe::Present(_) = self.parser1.parse(cursor)? else {
            return Ok(Maybe::Absent);
        };

        match self.parser2.parse(cursor)? {
            Maybe::Present(value) => Ok(Maybe::Present(value)),
            Maybe::Absent => {
                cursor.rewind(start);
                Ok(Maybe::Absent)
            }
        }
    }
}

/// Convenience function to create a Then parser
pub fn sequence<P1, P2>(parser1: P1, parser2: P2) -> Then<P1, P2>
where
    P1: Parser,
    P2: Parser<Element = P1::Element>,
{
    Then::new(parser1, parser2)
}

/// Extension trait to add .then() method support for parsers
pub trait ThenExt: Parser + Sized {
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<Element = Self::Element>,
    {
        Then::new(self, other)
    }
}

/// Implement ThenExt for all parsers
impl<P> ThenExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::is;
    use crate::literal::literal;

    #[test]
    fn test_then_both_succeed() {
        let data = b"A5xyz";
        let mut cursor = Cursor::new(&data[..]);
        let parser = is(b'A').then(is(b'5'));

        assert_eq!(parser.parse(&mut cursor).unwrap(), Maybe::Present(b'5'));
        assert_eq!(cursor.peek(), Some(&b'x'));
    }

    #[test]
    fn test_then_first_fails() {
        let data = b"Bxyz";
        let mut cursor = Cursor::new(&data[..]);
        let parser = is(b'A').then(is(b'x'));

        assert_eq!(parser.parse(&mut cursor).unwrap(), Maybe::Absent);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_then_second_fails_rewinds_first() {
        let data = b"Axyz";
        let mut cursor = Cursor::new(&data[..]);
        let parser = is(b'A').then(is(b'5'));

        assert_eq!(parser.parse(&mut cursor).unwrap(), Maybe::Absent);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_then_different_output_types() {
        let data = b"::name";
        let mut cursor = Cursor::new(&data[..]);
        let parser = sequence(literal(*b"::"), is(b'n'));

        assert_eq!(parser.parse(&mut cursor).unwrap(), Maybe::Present(b'n'));
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_then_chain() {
        let data = b"A5B";
        let mut cursor = Cursor::new(&data[..]);
        let parser = is(b'A').then(is(b'5')).then(is(b'B'));

        assert_eq!(parser.parse(&mut cursor).unwrap(), Maybe::Present(b'B'));
        assert!(cursor.is_at_end());
    }
}
