//! # descent - Backtracking Parser Combinators
//!
//! A parser combinator library for building recursive-descent parsers over any
//! sequence of tokens: characters, bytes, strings or your own symbol type.
//!
//! Small parsers are combined into larger ones with a handful of combinators:
//!
//! - **Choice** (`a.or(b)`): the first alternative that matches
//! - **Sequence** (`a.then(b)`): both in order, keeping the second result
//! - **Merge** (`a.merge_with(b)`): both in order, folding the two results together
//! - **Many** (`p.many()`, `p.many1()`, `p.repeat(min, max)`): repetition with folding
//! - **Block** (`block().step(..).build(..)`): any number of steps whose tagged
//!   results are handed to a reducer
//!
//! A parse attempt returns `Ok(Maybe::Present(value))` on a match and
//! `Ok(Maybe::Absent)` otherwise, and a parser that fails always leaves the
//! cursor where it found it, so alternatives can be tried without lookahead.
//! `Err` is reserved for grammar mistakes such as an unbound [`Placeholder`].
//!
//! Repeated results are folded by element type: characters and text concatenate
//! into a `String`, everything else collects into a `Vec`. See [`accumulator`].

pub mod accumulator;
pub mod atomic;
pub mod block;
pub mod cursor;
pub mod element;
pub mod error;
pub mod filter;
pub mod inside;
pub mod lift;
pub mod literal;
pub mod many;
pub mod maybe;
pub mod merge;
pub mod option;
pub mod or;
pub mod parser;
pub mod placeholder;
pub mod sep_by;
pub mod tag;
pub mod text;
pub mod then;


pub use accumulator::{Accumulate, Accumulator, Flatten, SequenceCollect, TextConcat, accumulate};
pub use atomic::Atomic;
pub use block::{Bindings, Block, BlockBuilder, block};
pub use cursor::{Cursor, Mark};
pub use element::{any, in_range, is, none_of, one_of};
pub use error::{GrammarError, ParseResult};
pub use filter::{FilterExt, filter};
pub use inside::inside;
pub use lift::{MapExt, lift, lift_vector};
pub use literal::literal;
pub use many::{ManyExt, many, many1, repeat};
pub use maybe::Maybe;
pub use merge::{MergeExt, merge};
pub use option::{OptionExt, option, optional, skip};
pub use or::{OrExt, choice};
pub use parser::{BoxedParser, ErasedExt, Parser, SharedParser};
pub use placeholder::{Placeholder, placeholder};
pub use sep_by::{end_by, sep_by};
pub use tag::{TagExt, tag};
pub use then::{ThenExt, sequence};
