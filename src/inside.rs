use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::maybe::Maybe;
use crate::parser::Parser;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open + content + close` and returns just the `content` value with the
/// delimiters discarded. Whitespace is not skipped around any of the three parts.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Inside<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Inside<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Inside {
            open,
            content,
            close,
        }
    }
}

impl<P1, P2, P3> Parser for Inside<P1, P2, P3>
where
    P1: Parser,
    P2: Parser<Element = P1::Element>,
    P3: Parser<Element = P1::Element>,
{
    type Element = P1::Element;
    type Output = P2::Output;

    fn parse(&self, cursor: &mut Cursor<'_, Self::Element>) -> ParseResult<Self::Output> {
        let start = cursor.mark();

        let Maybe::Present(_) = self.open.parse(cursor)? else {
            return Ok(Maybe::Absent);
        };
        let Maybe::Present(value) = self.content.parse(cursor)? else {
            cursor.rewind(start);
            return Ok(Maybe::Absent);
        };
        let Maybe::Present(_) = self.close.parse(cursor)? else {
            cursor.rewind(start);
            return Ok(Maybe::Absent);
        };

        Ok(Maybe::Present(value))
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn inside<P1, P2, P3>(open: P1, content: P2, close: P3) -> Inside<P1, P2, P3>
where
    P1: Parser,
    P2: Parser<Element = P1::Element>,
    P3: Parser<Element = P1::Element>,
{
    Inside::new(open, content, close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::is;
    use crate::many::many1;
    use crate::text::{character, digit, letter, string};

    #[test]
    fn test_brackets_number() {
        let mut cursor = Cursor::from_text("[425]");
        let parser = inside(character('['), many1(digit()), character(']'));

        assert_eq!(
            parser.parse(&mut cursor).unwrap(),
            Maybe::Present("425".to_string())
        );
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_parentheses_string() {
        let mut cursor = Cursor::from_text("(hello)");
        let parser = inside(character('('), string("hello"), character(')'));

        assert_eq!(
            parser.parse(&mut cursor).unwrap(),
            Maybe::Present("hello".to_string())
        );
    }

    #[test]
    fn test_multi_element_delimiters() {
        let mut cursor = Cursor::from_text("'(x)");
        let parser = inside(string("'("), letter(), character(')'));

        assert_eq!(parser.parse(&mut cursor).unwrap(), Maybe::Present('x'));
    }

    #[test]
    fn test_missing_close_rewinds() {
        let mut cursor = Cursor::from_text("(hello]");
        let parser = inside(character('('), string("hello"), character(')'));

        assert_eq!(parser.parse(&mut cursor).unwrap(), Maybe::Absent);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_missing_content_rewinds() {
        let data = b"{}";
        let mut cursor = Cursor::new(&data[..]);
        let parser = inside(is(b'{'), is(b'x'), is(b'}'));

        assert_eq!(parser.parse(&mut cursor).unwrap(), Maybe::Absent);
        assert_eq!(cursor.position(), 0);
    }
}
