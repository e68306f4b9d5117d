//! Multi-step sequences whose tagged results are handed to a reducer.
//!
//! A block is the general form of sequencing: any number of steps run in
//! order against the same cursor, results of tagged steps are recorded by
//! tag name, and once every step has matched a reducer turns the recorded
//! [`Bindings`] into the block's output. If any step fails the block rewinds
//! to where it started and the reducer is never called.
//!
//! ```ignore
//! let pair = block::<char, u32>()
//!     .skip(character('('))
//!     .step(number().tag("x"))
//!     .skip(character(','))
//!     .step(number().tag("y"))
//!     .skip(character(')'))
//!     .build(|bindings| (*bindings.at("x"), *bindings.at("y")));
//! ```

use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::maybe::Maybe;
use crate::parser::Parser;
use log::trace;
use std::collections::HashMap;

/// Results recorded by the tagged steps of one block invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Bindings<M> {
    values: HashMap<String, M>,
}

impl<M> Bindings<M> {
    pub fn new() -> Self {
        Bindings {
            values: HashMap::new(),
        }
    }

    /// Record a value, returning whatever was previously stored under `tag`
    pub fn insert(&mut self, tag: impl Into<String>, value: M) -> Option<M> {
        self.values.insert(tag.into(), value)
    }

    pub fn get(&self, tag: &str) -> Option<&M> {
        self.values.get(tag)
    }

    pub fn remove(&mut self, tag: &str) -> Option<M> {
        self.values.remove(tag)
    }

    /// Borrow the value recorded under `tag`
    ///
    /// # Panics
    /// If no step with that tag was recorded. A reducer asking for a tag its
    /// block never records is a mistake in the grammar, not in the input.
    #[track_caller]
    pub fn at(&self, tag: &str) -> &M {
        match self.values.get(tag) {
            Some(value) => value,
            None => missing_tag(tag),
        }
    }

    /// Move the value recorded under `tag` out of the bindings
    ///
    /// # Panics
    /// Under the same condition as [`Bindings::at`].
    #[track_caller]
    pub fn take(&mut self, tag: &str) -> M {
        match self.values.remove(tag) {
            Some(value) => value,
            None => missing_tag(tag),
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.values.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<M> Default for Bindings<M> {
    fn default() -> Self {
        Bindings::new()
    }
}

#[track_caller]
fn missing_tag(tag: &str) -> ! {
    panic!("block binding `{}` was never recorded", tag)
}

/// One step of a block, type-erased over the parser it runs
trait Step<T: Atomic, M>: Send + Sync {
    fn run(&self, cursor: &mut Cursor<'_, T>, bindings: &mut Bindings<M>) -> ParseResult<()>;
}

/// Step whose result is recorded when its parser carries a tag
struct Record<P> {
    parser: P,
    tag: Option<String>,
}

impl<P> Step<P::Element, P::Output> for Record<P>
where
    P: Parser + Send + Sync,
{
    fn run(
        &self,
        cursor: &mut Cursor<'_, P::Element>,
        bindings: &mut Bindings<P::Output>,
    ) -> ParseResult<()> {
        let Maybe::Present(value) = self.parser.parse(cursor)? else {
            return Ok(Maybe::Absent);
        };
        if let Some(tag) = &self.tag {
            bindings.insert(tag.as_str(), value);
        }
        Ok(Maybe::Present(()))
    }
}

/// Step that must match but whose result is thrown away
struct Discard<P> {
    parser: P,
}

impl<P, M> Step<P::Element, M> for Discard<P>
where
    P: Parser + Send + Sync,
{
    fn run(&self, cursor: &mut Cursor<'_, P::Element>, _: &mut Bindings<M>) -> ParseResult<()> {
        Ok(self.parser.parse(cursor)?.map(|_| ()))
    }
}

type Reducer<M, R> = Box<dyn Fn(Bindings<M>) -> R + Send + Sync>;

/// Builder collecting the steps of a [`Block`]
///
/// `T` is the input element type and `M` the common output type of the steps
/// whose results may be recorded.
pub struct BlockBuilder<T: Atomic, M> {
    steps: Vec<Box<dyn Step<T, M>>>,
}

impl<T: Atomic, M: 'static> BlockBuilder<T, M> {
    pub fn new() -> Self {
        BlockBuilder { steps: Vec::new() }
    }

    /// Append a step whose result is recorded under the parser's tag, if it has one
    pub fn step<P>(mut self, parser: P) -> Self
    where
        P: Parser<Element = T, Output = M> + Send + Sync + 'static,
    {
        let tag = parser.tag_name().map(str::to_owned);
        self.steps.push(Box::new(Record { parser, tag }));
        self
    }

    /// Append a step of any output type whose result is discarded
    ///
    /// Nothing is recorded for a skipped step, so passing a tagged parser here is
    /// a grammar mistake and trips a debug assertion.
    pub fn skip<P>(mut self, parser: P) -> Self
    where
        P: Parser<Element = T> + Send + Sync + 'static,
    {
        debug_assert!(
            parser.tag_name().is_none(),
            "skipped block step is tagged `{}`; use `step` to record it",
            parser.tag_name().unwrap_or_default()
        );
        self.steps.push(Box::new(Discard { parser }));
        self
    }

    /// Finish the block with the function that turns the recorded bindings into
    /// its output
    pub fn build<R, F>(self, reducer: F) -> Block<T, M, R>
    where
        F: Fn(Bindings<M>) -> R + Send + Sync + 'static,
    {
        Block {
            steps: self.steps,
            reducer: Box::new(reducer),
        }
    }
}

impl<T: Atomic, M: 'static> Default for BlockBuilder<T, M> {
    fn default() -> Self {
        BlockBuilder::new()
    }
}

/// Parser running a fixed list of steps and reducing their tagged results
pub struct Block<T: Atomic, M, R> {
    steps: Vec<Box<dyn Step<T, M>>>,
    reducer: Reducer<M, R>,
}

impl<T: Atomic, M, R> Block<T, M, R> {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<T: Atomic, M, R> Parser for Block<T, M, R> {
    type Element = T;
    type Output = R;

    fn parse(&self, cursor: &mut Cursor<'_, T>) -> ParseResult<R> {
        let start = cursor.mark();
        let mut bindings = Bindings::new();

        for (index, step) in self.steps.iter().enumerate() {
            if step.run(cursor, &mut bindings)?.is_absent() {
                trace!(
                    "block step {} failed at offset {}; rewinding to {}",
                    index,
                    cursor.position(),
                    start.offset()
                );
                cursor.rewind(start);
                return Ok(Maybe::Absent);
            }
        }

        Ok(Maybe::Present((self.reducer)(bindings)))
    }
}

/// Convenience function to start building a Block
pub fn block<T: Atomic, M: 'static>() -> BlockBuilder<T, M> {
    BlockBuilder::new()
}
