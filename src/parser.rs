use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::ParseResult;
use std::sync::Arc;

/// Core parser trait for parser combinators
pub trait Parser {
    /// The type of input element consumed from the cursor
    type Element: Atomic;
    type Output;

    /// Attempt to parse at the current cursor position
    ///
    /// Returns `Ok(Maybe::Present)` and leaves the cursor after the consumed
    /// input on success. Returns `Ok(Maybe::Absent)` on failure, in which case the
    /// cursor must be exactly where it was on entry. `Err` is reserved for
    /// grammar defects such as an unbound placeholder.
    fn parse(&self, cursor: &mut Cursor<'_, Self::Element>) -> ParseResult<Self::Output>;

    /// Name under which a block records this parser's result
    fn tag_name(&self) -> Option<&str> {
        None
    }
}

/// Type-erased parser with single ownership
pub type BoxedParser<T, O> = Box<dyn Parser<Element = T, Output = O> + Send + Sync>;

/// Type-erased parser that can be referenced from several places in a grammar
pub type SharedParser<T, O> = Arc<dyn Parser<Element = T, Output = O> + Send + Sync>;

impl<P> Parser for &P
where
    P: Parser + ?Sized,
{
    type Element = P::Element;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'_, Self::Element>) -> ParseResult<Self::Output> {
        (**self).parse(cursor)
    }

    fn tag_name(&self) -> Option<&str> {
        (**self).tag_name()
    }
}

impl<P> Parser for Box<P>
where
    P: Parser + ?Sized,
{
    type Element = P::Element;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'_, Self::Element>) -> ParseResult<Self::Output> {
        (**self).parse(cursor)
    }

    fn tag_name(&self) -> Option<&str> {
        (**self).tag_name()
    }
}

impl<P> Parser for Arc<P>
where
    P: Parser + ?Sized,
{
    type Element = P::Element;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'_, Self::Element>) -> ParseResult<Self::Output> {
        (**self).parse(cursor)
    }

    fn tag_name(&self) -> Option<&str> {
        (**self).tag_name()
    }
}

/// Extension trait to erase a parser's concrete type
pub trait ErasedExt: Parser + Sized + Send + Sync + 'static {
    fn boxed(self) -> BoxedParser<Self::Element, Self::Output> {
        Box::new(self)
    }

    fn shared(self) -> SharedParser<Self::Element, Self::Output> {
        Arc::new(self)
    }
}

/// Implement ErasedExt for all thread-safe parsers
impl<P> ErasedExt for P where P: Parser + Send + Sync + 'static {}
